use crate::domain::{a002_material, a005_procurement_timeline};
use anyhow::Result;
use contracts::usecases::u501_predict_materials::{request::PredictRequest, response::PredictResponse};

/// Material prediction for a project profile
///
/// The estimate is the seeded material list and procurement plan; the
/// request only has to be complete.
pub async fn execute(request: &PredictRequest) -> Result<PredictResponse> {
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    tracing::info!(
        "Predicting materials for {} / {} in {}, {}",
        request.project_type,
        request.size,
        request.city,
        request.state
    );

    let materials = a002_material::service::list_all().await?;
    let timeline = a005_procurement_timeline::service::list_items().await?;
    let response = PredictResponse::new(materials, timeline);

    tracing::info!(
        "Prediction: {} material(s), total {}",
        response.materials.len(),
        crate::shared::format::format_inr(response.total_cost)
    );
    Ok(response)
}

use axum::Json;
use contracts::domain::a005_procurement_timeline::aggregate::ProcurementTimeline;

use crate::domain::a005_procurement_timeline;
use crate::shared::api_error::ApiError;

/// GET /procurement/timeline
pub async fn timeline() -> Result<Json<ProcurementTimeline>, ApiError> {
    Ok(Json(a005_procurement_timeline::service::timeline().await?))
}

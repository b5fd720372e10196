use axum::Json;
use contracts::domain::a002_material::aggregate::Material;

use crate::domain::a002_material;
use crate::shared::api_error::ApiError;

/// GET /materials
pub async fn list_all() -> Result<Json<Vec<Material>>, ApiError> {
    Ok(Json(a002_material::service::list_all().await?))
}

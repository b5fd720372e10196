use axum::{extract::Path, Json};
use contracts::domain::a004_procurement::aggregate::{DeliveryLogRequest, ManagementUpdate};
use contracts::domain::a004_procurement::book::ProcurementBook;

use crate::domain::a004_procurement;
use crate::shared::api_error::ApiError;

// Every mutation answers with the whole book so the client can replace its snapshot.

/// GET /vendors/finalized
pub async fn list_finalized() -> Result<Json<ProcurementBook>, ApiError> {
    Ok(Json(a004_procurement::service::book().await?))
}

/// DELETE /vendors/finalized/:material
pub async fn remove(Path(material): Path<String>) -> Result<Json<ProcurementBook>, ApiError> {
    Ok(Json(a004_procurement::service::remove(&material).await?))
}

/// PATCH /procurement/:material
pub async fn update(
    Path(material): Path<String>,
    Json(update): Json<ManagementUpdate>,
) -> Result<Json<ProcurementBook>, ApiError> {
    Ok(Json(a004_procurement::service::update(&material, &update).await?))
}

/// POST /procurement/:material/deliveries
pub async fn append_delivery(
    Path(material): Path<String>,
    Json(request): Json<DeliveryLogRequest>,
) -> Result<Json<ProcurementBook>, ApiError> {
    Ok(Json(a004_procurement::service::append_delivery(&material, request).await?))
}

/// POST /procurement/:material/mark-paid
pub async fn mark_paid(Path(material): Path<String>) -> Result<Json<ProcurementBook>, ApiError> {
    Ok(Json(a004_procurement::service::mark_paid(&material).await?))
}

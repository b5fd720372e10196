use axum::{
    extract::{Path, Query, State},
    Json,
};
use contracts::domain::a003_vendor::aggregate::{
    FinalizeVendorRequest, Vendor, VendorId, VendorSearchQuery, VendorUpdateDto,
};
use contracts::domain::a004_procurement::book::ProcurementBook;

use crate::domain::{a003_vendor, a004_procurement};
use crate::shared::api_error::ApiError;
use crate::shared::state::AppState;

/// GET /vendors?material=&location=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<VendorSearchQuery>,
) -> Result<Json<Vec<Vendor>>, ApiError> {
    query.validate().map_err(ApiError::bad_request)?;
    let vendors = a003_vendor::service::search(&query, state.vendor_source.as_deref()).await?;
    Ok(Json(vendors))
}

/// POST /vendors/finalize/:id
///
/// Answers with the whole procurement book.
pub async fn finalize(
    Path(id): Path<i64>,
    Json(request): Json<FinalizeVendorRequest>,
) -> Result<Json<ProcurementBook>, ApiError> {
    let material = request.material.trim();
    if material.is_empty() {
        return Err(ApiError::bad_request("Material is required"));
    }
    Ok(Json(a004_procurement::service::finalize(VendorId(id), material).await?))
}

/// PATCH /vendors/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<VendorUpdateDto>,
) -> Result<Json<Vendor>, ApiError> {
    if dto.finalized == Some(true) {
        return Err(ApiError::bad_request(
            "Finalization needs a material, use POST /vendors/finalize/{id}",
        ));
    }
    Ok(Json(a003_vendor::service::update(VendorId(id), &dto).await?))
}

use crate::shared::api_utils::{api_url, send, send_json};
use contracts::domain::a003_vendor::aggregate::{
    FinalizeVendorRequest, Vendor, VendorId, VendorUpdateDto,
};
use contracts::domain::a004_procurement::book::ProcurementBook;
use gloo_net::http::Request;

pub async fn search_vendors(material: &str, location: Option<&str>) -> Result<Vec<Vendor>, String> {
    let mut params = vec![("material", material)];
    if let Some(location) = location.map(str::trim).filter(|l| !l.is_empty()) {
        params.push(("location", location));
    }
    send(Request::get(&api_url("/vendors")).query(params)).await
}

/// Finalizes the vendor for the material and returns the updated book
pub async fn finalize_vendor(id: VendorId, material: &str) -> Result<ProcurementBook, String> {
    let body = FinalizeVendorRequest {
        material: material.to_string(),
    };
    send_json(
        Request::post(&api_url(&format!("/vendors/finalize/{}", id))),
        &body,
    )
    .await
}

pub async fn update_vendor(id: VendorId, dto: &VendorUpdateDto) -> Result<Vendor, String> {
    send_json(Request::patch(&api_url(&format!("/vendors/{}", id))), dto).await
}

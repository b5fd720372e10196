//! Procurement book calls; every mutation answers with the whole book

use crate::shared::api_utils::{api_url, segment, send, send_json};
use contracts::domain::a004_procurement::aggregate::{DeliveryLogRequest, ManagementUpdate};
use contracts::domain::a004_procurement::book::ProcurementBook;
use gloo_net::http::Request;

fn material_url(material: &str, suffix: &str) -> String {
    api_url(&format!("/procurement/{}{}", segment(material), suffix))
}

pub async fn fetch_book() -> Result<ProcurementBook, String> {
    send(Request::get(&api_url("/vendors/finalized"))).await
}

pub async fn remove_finalized(material: &str) -> Result<ProcurementBook, String> {
    send(Request::delete(&api_url(&format!(
        "/vendors/finalized/{}",
        segment(material)
    ))))
    .await
}

pub async fn update_record(material: &str, update: &ManagementUpdate) -> Result<ProcurementBook, String> {
    send_json(Request::patch(&material_url(material, "")), update).await
}

pub async fn append_delivery(
    material: &str,
    request: &DeliveryLogRequest,
) -> Result<ProcurementBook, String> {
    send_json(Request::post(&material_url(material, "/deliveries")), request).await
}

pub async fn mark_paid(material: &str) -> Result<ProcurementBook, String> {
    send(Request::post(&material_url(material, "/mark-paid"))).await
}

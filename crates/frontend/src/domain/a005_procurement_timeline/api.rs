use crate::shared::api_utils::{api_url, send};
use contracts::domain::a005_procurement_timeline::aggregate::ProcurementTimeline;
use gloo_net::http::Request;

pub async fn fetch_timeline() -> Result<ProcurementTimeline, String> {
    send(Request::get(&api_url("/procurement/timeline"))).await
}

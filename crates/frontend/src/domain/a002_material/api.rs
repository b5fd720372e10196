use crate::shared::api_utils::{api_url, send};
use contracts::domain::a002_material::aggregate::Material;
use gloo_net::http::Request;

pub async fn fetch_materials() -> Result<Vec<Material>, String> {
    send(Request::get(&api_url("/materials"))).await
}

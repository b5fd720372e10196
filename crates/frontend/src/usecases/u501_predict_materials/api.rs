use crate::shared::api_utils::{api_url, send_json};
use contracts::usecases::u501_predict_materials::request::PredictRequest;
use contracts::usecases::u501_predict_materials::response::PredictResponse;
use gloo_net::http::Request;

/// Runs the material prediction for the form values
pub async fn predict(request: &PredictRequest) -> Result<PredictResponse, String> {
    send_json(Request::post(&api_url("/predict")), request).await
}

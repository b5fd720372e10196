use axum::Json;
use contracts::usecases::u501_predict_materials::{request::PredictRequest, response::PredictResponse};

use crate::shared::api_error::ApiError;
use crate::usecases::u501_predict_materials::executor;

/// POST /predict
pub async fn predict(Json(request): Json<PredictRequest>) -> Result<Json<PredictResponse>, ApiError> {
    request.validate().map_err(ApiError::bad_request)?;
    Ok(Json(executor::execute(&request).await?))
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a004_procurement::error::ProcurementError;
use serde_json::json;

/// Error returned by handlers, rendered as `{ "detail": "..." }`
#[derive(Debug)]
pub struct ApiError(pub StatusCode, pub String);

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self(StatusCode::BAD_REQUEST, detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self(StatusCode::NOT_FOUND, detail.into())
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self(StatusCode::BAD_GATEWAY, detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, detail.into())
    }

    pub fn status(&self) -> StatusCode {
        self.0
    }
}

impl From<ProcurementError> for ApiError {
    fn from(e: ProcurementError) -> Self {
        let status = match e {
            ProcurementError::NotFinalized(_)
            | ProcurementError::UnknownMaterial(_)
            | ProcurementError::UnknownVendor(_) => StatusCode::NOT_FOUND,
            ProcurementError::InvalidQuantity(_) | ProcurementError::NegativeAmount(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        Self(status, e.to_string())
    }
}

/// Service errors: domain errors keep their status, the rest is a 500
impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<ProcurementError>() {
            Ok(domain) => domain.into(),
            Err(other) => {
                tracing::error!("Request failed: {:#}", other);
                Self::internal(format!("Internal error: {}", other))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "detail": self.1 }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn renders_detail_body() {
        let response = ApiError::bad_request("Material is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Material is required");
    }

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let err: ApiError = anyhow::Error::from(ProcurementError::NotFinalized("Steel".into())).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let err: ApiError = ProcurementError::InvalidQuantity(0.0).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let err: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

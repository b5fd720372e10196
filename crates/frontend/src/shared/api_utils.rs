//! API utilities for frontend-backend communication
//!
//! The backend base URL is fixed at build time through `SMART_BUY_API_URL`.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    option_env!("SMART_BUY_API_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/vendors/finalized");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encodes one path segment (material names contain spaces)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Error text for a non-2xx answer: the `detail` field when present
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Sends a request without body and decodes the JSON answer
pub async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, String> {
    let response = request
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// Sends a JSON body and decodes the JSON answer
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    request: RequestBuilder,
    body: &B,
) -> Result<T, String> {
    let response = request
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let url = api_url("/health");
        assert!(url.ends_with("/health"));
        assert!(!url.contains("//health"));
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(segment("Structural Steel"), "Structural%20Steel");
        assert_eq!(segment("HVAC/Units"), "HVAC%2FUnits");
    }

    #[test]
    fn error_prefers_detail() {
        assert_eq!(
            error_message(404, r#"{"detail":"Material 'Glass' has no finalized vendor"}"#),
            "Material 'Glass' has no finalized vendor"
        );
        assert_eq!(error_message(502, "<html>"), "HTTP 502");
    }
}

use super::{VendorSource, VendorSourceError};
use async_trait::async_trait;
use contracts::domain::a003_vendor::aggregate::{VendorListing, VendorSearchQuery};
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for an upstream vendor search service
///
/// `GET {base_url}/vendors?material=..&location=..` answering either a bare
/// list of listings or `{ "vendors": [...] }`.
pub struct UpstreamVendorSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingsBody {
    Wrapped { vendors: Vec<VendorListing> },
    Bare(Vec<VendorListing>),
}

impl ListingsBody {
    fn into_listings(self) -> Vec<VendorListing> {
        match self {
            ListingsBody::Wrapped { vendors } => vendors,
            ListingsBody::Bare(vendors) => vendors,
        }
    }
}

impl UpstreamVendorSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn parse_body(body: &str) -> Result<Vec<VendorListing>, VendorSourceError> {
        serde_json::from_str::<ListingsBody>(body)
            .map(ListingsBody::into_listings)
            .map_err(|e| VendorSourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl VendorSource for UpstreamVendorSource {
    async fn search(&self, query: &VendorSearchQuery) -> Result<Vec<VendorListing>, VendorSourceError> {
        let url = format!("{}/vendors", self.base_url);
        let mut params = vec![("material", query.material.trim().to_string())];
        if let Some(location) = query.location() {
            params.push(("location", location.to_string()));
        }

        tracing::debug!("Upstream vendor search: GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| VendorSourceError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VendorSourceError::Network(e.to_string()))?;

        if !status.is_success() {
            let preview: String = body.chars().take(300).collect();
            return Err(VendorSourceError::Status(status.as_u16(), preview));
        }

        let listings = Self::parse_body(&body)?;
        tracing::info!(
            "Upstream returned {} listing(s) for '{}'",
            listings.len(),
            query.material
        );
        Ok(listings)
    }

    fn source_name(&self) -> &str {
        "upstream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_wrapped_and_bare_bodies() {
        let wrapped = r#"{"vendors":[{"vendor":"Shree Steel","location":"Pune","contact":"98220"}]}"#;
        let bare = r#"[{"vendor":"Shree Steel"},{"vendor":"Unknown Vendor"}]"#;
        assert_eq!(UpstreamVendorSource::parse_body(wrapped).unwrap().len(), 1);
        assert_eq!(UpstreamVendorSource::parse_body(bare).unwrap().len(), 2);
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = UpstreamVendorSource::parse_body("<html>").unwrap_err();
        assert!(matches!(err, VendorSourceError::Decode(_)));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let source = UpstreamVendorSource::new("http://localhost:9000/", 5).unwrap();
        assert_eq!(source.base_url, "http://localhost:9000");
    }
}

pub mod upstream;

use async_trait::async_trait;
use contracts::domain::a003_vendor::aggregate::{VendorListing, VendorSearchQuery};
use thiserror::Error;

/// Vendor search source errors
#[derive(Debug, Error)]
pub enum VendorSourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {0}: {1}")]
    Status(u16, String),

    #[error("Cannot decode upstream response: {0}")]
    Decode(String),
}

/// External vendor directory queried before the local catalog
#[async_trait]
pub trait VendorSource: Send + Sync {
    async fn search(&self, query: &VendorSearchQuery) -> Result<Vec<VendorListing>, VendorSourceError>;

    fn source_name(&self) -> &str;
}

pub use upstream::UpstreamVendorSource;

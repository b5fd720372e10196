use crate::shared::assistant::{AssistantProvider, CannedProvider, OpenAiProvider};
use crate::shared::config::Config;
use crate::shared::vendor_search::{UpstreamVendorSource, VendorSource};
use std::sync::Arc;

/// Shared handler state: the assistant and the optional upstream vendor source
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<dyn AssistantProvider>,
    pub vendor_source: Option<Arc<dyn VendorSource>>,
}

impl AppState {
    pub fn new(
        assistant: Arc<dyn AssistantProvider>,
        vendor_source: Option<Arc<dyn VendorSource>>,
    ) -> Self {
        Self {
            assistant,
            vendor_source,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let assistant: Arc<dyn AssistantProvider> = match config
            .assistant
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
        {
            Some(key) => Arc::new(OpenAiProvider::new(
                key.to_string(),
                config.assistant.model.clone(),
                config.assistant.endpoint.clone(),
            )),
            None => Arc::new(CannedProvider),
        };

        let vendor_source: Option<Arc<dyn VendorSource>> = match config
            .vendor_search
            .upstream_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
        {
            Some(url) => Some(Arc::new(UpstreamVendorSource::new(
                url,
                config.vendor_search.timeout_secs,
            )?)),
            None => None,
        };

        tracing::info!(
            "Assistant: {}, vendor source: {}",
            assistant.provider_name(),
            vendor_source
                .as_ref()
                .map(|s| s.source_name().to_string())
                .unwrap_or_else(|| "catalog".to_string())
        );
        Ok(Self::new(assistant, vendor_source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml_text: &str) -> Config {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn default_config_uses_offline_components() {
        let config = config("[database]\npath = \"x.db\"\n");
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.assistant.provider_name(), "canned");
        assert!(state.vendor_source.is_none());
    }

    #[test]
    fn configured_upstream_and_key_are_used() {
        let config = config(
            "[database]\npath = \"x.db\"\n[vendor_search]\nupstream_url = \"http://localhost:9000\"\n[assistant]\napi_key = \"sk-test\"\n",
        );
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.assistant.provider_name(), "openai");
        assert_eq!(state.vendor_source.unwrap().source_name(), "upstream");
    }
}

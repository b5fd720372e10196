use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub vendor_search: VendorSearchConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Empty list allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VendorSearchConfig {
    /// Base URL of the upstream vendor search service
    pub upstream_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for VendorSearchConfig {
    fn default() -> Self {
        Self {
            upstream_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Without a key the canned assistant answers
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// OpenAI-compatible base URL
    pub endpoint: Option<String>,
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8000

[database]
path = "target/db/smart_buy.db"

[cors]
allowed_origins = ["http://localhost:3000", "http://localhost:5173", "http://127.0.0.1:5173"]

[vendor_search]
# upstream_url = "http://localhost:9000"
timeout_secs = 30

[assistant]
# api_key = "sk-..."
model = "gpt-4o-mini"
# endpoint = "https://api.openai.com/v1"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default config
///
/// `HOST`, `PORT` and `SMART_BUY_DB` override the file afterwards.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(host) = var("HOST").filter(|h| !h.trim().is_empty()) {
        config.server.host = host;
    }
    if let Some(port) = var("PORT") {
        match port.trim().parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => tracing::warn!("Ignoring invalid PORT value '{}'", port),
        }
    }
    if let Some(path) = var("SMART_BUY_DB").filter(|p| !p.trim().is_empty()) {
        config.database.path = path;
    }
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.path, "target/db/smart_buy.db");
        assert_eq!(config.vendor_search.upstream_url, None);
        assert_eq!(config.vendor_search.timeout_secs, 30);
        assert_eq!(config.assistant.model, "gpt-4o-mini");
        assert!(config.assistant.api_key.is_none());
        assert_eq!(config.cors.allowed_origins.len(), 3);
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"x.db\"\n").unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.assistant.model, "gpt-4o-mini");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = default_config();
        apply_env_overrides(&mut config, |key| match key {
            "PORT" => Some("9100".into()),
            "SMART_BUY_DB" => Some("/tmp/sb.db".into()),
            _ => None,
        });
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "/tmp/sb.db");

        apply_env_overrides(&mut config, |key| (key == "PORT").then(|| "not-a-port".into()));
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_absolute_database_path_is_kept() {
        let mut config = default_config();
        config.database.path = "/var/lib/smart_buy.db".into();
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/var/lib/smart_buy.db")
        );
    }
}

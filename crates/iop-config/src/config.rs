use crate::{ConfigError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct IopConfig {
    pub project: String,

    /// IP address or hostname of the server the apps are deployed to.
    #[serde(default)]
    pub server_host: String,

    #[serde(default)]
    pub apps: BTreeMap<String, AppConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Custom hosts. Absent or empty means the app gets a generated host.
    #[serde(default)]
    pub hosts: Option<Vec<String>>,
}

impl IopConfig {
    pub fn parse(content: &str) -> Result<Self> {
        let config: IopConfig = toml::from_str(content)?;

        if config.server_host.trim().is_empty() {
            return Err(ConfigError::MissingServerHost);
        }

        Ok(config)
    }
}

pub async fn parse_iop_toml(config_path: &Path) -> Result<IopConfig> {
    debug!("Reading deployment config from {}", config_path.display());

    let content = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|source| ConfigError::Io {
            path: config_path.display().to_string(),
            source,
        })?;

    IopConfig::parse(&content)
}

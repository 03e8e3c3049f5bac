use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config_manager::asr::ASRConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translator::TranslatorConfig;

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "translator_config")]
    #[serde(default)]
    pub translator_config: TranslatorConfig,

    #[serde(rename = "asr_config")]
    #[serde(default)]
    pub asr_config: ASRConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_file, validate_config};
        let value = read_config_file(path)?;
        validate_config(&value)
    }

    /// Load the first candidate that parses, or fall back to defaults
    pub fn load_first(paths: &[String]) -> (Self, Option<String>) {
        for path in paths {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => return (config, Some(path.clone())),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", path, e);
                }
            }
        }
        (Self::default(), None)
    }
}

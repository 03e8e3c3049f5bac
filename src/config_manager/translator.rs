use serde::{Deserialize, Serialize};

use crate::translate::DownloadConditions;

/// Configuration for the translation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(rename = "translator_engine")]
    #[serde(default = "default_translator_engine")]
    pub translator_engine: String,

    #[serde(rename = "download_conditions")]
    #[serde(default)]
    pub download_conditions: DownloadConditions,
}

fn default_translator_engine() -> String {
    "engine_service".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            translator_engine: default_translator_engine(),
            download_conditions: DownloadConditions::default(),
        }
    }
}

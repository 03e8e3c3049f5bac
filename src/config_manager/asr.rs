use serde::{Deserialize, Serialize};

/// Configuration for speech recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ASRConfig {
    #[serde(rename = "asr_engine")]
    #[serde(default = "default_asr_engine")]
    pub asr_engine: String,

    #[serde(default = "default_language")]
    pub language: String, // BCP-47 locale, e.g. "en-US", "vi-VN"

    #[serde(rename = "language_model")]
    #[serde(default = "default_language_model")]
    pub language_model: String,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(rename = "max_capture_samples")]
    #[serde(default = "default_max_capture_samples")]
    pub max_capture_samples: usize,
}

fn default_asr_engine() -> String {
    "engine_service".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_language_model() -> String {
    "free_form".to_string()
}

fn default_prompt() -> String {
    "Please speak now".to_string()
}

fn default_max_capture_samples() -> usize {
    16_000 * 60 // one minute at 16 kHz
}

impl Default for ASRConfig {
    fn default() -> Self {
        Self {
            asr_engine: default_asr_engine(),
            language: default_language(),
            language_model: default_language_model(),
            prompt: default_prompt(),
            max_capture_samples: default_max_capture_samples(),
        }
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::controller::{LanguageSelection, TranslationRequest};
use crate::error::TranslatorResult;

/// Policy the engine must satisfy before it may fetch a language model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadConditions {
    #[serde(default = "default_require_wifi")]
    pub require_wifi: bool,
}

fn default_require_wifi() -> bool {
    true
}

impl Default for DownloadConditions {
    fn default() -> Self {
        Self {
            require_wifi: default_require_wifi(),
        }
    }
}

/// Translator interface - inference lives in the external engine service
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Make sure the model for `selection` is present, downloading it
    /// under `conditions` if needed
    async fn download_model_if_needed(
        &self,
        selection: &LanguageSelection,
        conditions: &DownloadConditions,
    ) -> TranslatorResult<()>;

    /// Translate the request text from source to target language
    async fn translate(&self, request: &TranslationRequest) -> TranslatorResult<String>;
}

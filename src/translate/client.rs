use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::controller::{LanguageSelection, TranslationRequest};
use crate::engine_service::{self, EngineServiceClient};
use crate::error::{TranslatorError, TranslatorResult};
use super::interface::{DownloadConditions, TranslatorInterface};

/// Translator that talks to the engine service over HTTP
pub struct TranslatorClient {
    engine_service: Arc<EngineServiceClient>,
}

impl TranslatorClient {
    pub fn new(engine_service: Arc<EngineServiceClient>) -> Self {
        Self { engine_service }
    }
}

#[async_trait]
impl TranslatorInterface for TranslatorClient {
    async fn download_model_if_needed(
        &self,
        selection: &LanguageSelection,
        conditions: &DownloadConditions,
    ) -> TranslatorResult<()> {
        debug!(
            "Ensuring model {} -> {} (require_wifi={})",
            selection.source, selection.target, conditions.require_wifi
        );

        let response = self
            .engine_service
            .download_model(engine_service::ModelDownloadRequest {
                source_lang: selection.source.code().to_string(),
                target_lang: selection.target.code().to_string(),
                require_wifi: conditions.require_wifi,
            })
            .await?;

        if response.success {
            Ok(())
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Model download failed".to_string());
            error!("Model download failed: {}", error_msg);
            Err(TranslatorError::ModelDownload(error_msg))
        }
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslatorResult<String> {
        debug!(
            "Sending translate request: {} -> {}, {} chars",
            request.source(),
            request.target(),
            request.text.chars().count()
        );

        let response = self
            .engine_service
            .translate(engine_service::TranslateRequest {
                text: request.text.clone(),
                source_lang: request.source().code().to_string(),
                target_lang: request.target().code().to_string(),
            })
            .await?;

        if response.success {
            Ok(response.translated_text)
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Translation failed".to_string());
            error!("Translation failed: {}", error_msg);
            Err(TranslatorError::Translation(error_msg))
        }
    }
}

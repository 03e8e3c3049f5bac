use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::engine_service::{ASRRequest, EngineServiceClient};
use crate::error::{TranslatorError, TranslatorResult};
use super::interface::{SpeechCaptureRequest, SpeechRecognitionInterface};

/// Speech recognizer backed by the engine service
pub struct ASRClient {
    engine_service: Arc<EngineServiceClient>,
    language_model: String,
}

impl ASRClient {
    pub fn new(engine_service: Arc<EngineServiceClient>, language_model: String) -> Self {
        Self {
            engine_service,
            language_model,
        }
    }
}

#[async_trait]
impl SpeechRecognitionInterface for ASRClient {
    async fn is_available(&self) -> bool {
        match self.engine_service.asr_available().await {
            Ok(response) => response.available,
            Err(e) => {
                warn!("ASR availability check failed: {}", e);
                false
            }
        }
    }

    async fn recognize(
        &self,
        request: &SpeechCaptureRequest,
    ) -> TranslatorResult<Option<Vec<String>>> {
        debug!(
            "Sending ASR request: {} samples, language={}",
            request.audio_data.len(),
            request.language
        );

        let response = self
            .engine_service
            .recognize(ASRRequest {
                audio_data: request.audio_data.clone(),
                language: request.language.clone(),
                language_model: self.language_model.clone(),
                prompt: request.prompt.clone(),
            })
            .await?;

        if !response.success {
            let error_msg = response.error.unwrap_or_else(|| "Speech recognition failed".to_string());
            error!("Speech recognition failed: {}", error_msg);
            return Err(TranslatorError::Recognition(error_msg));
        }

        if response.candidates.is_empty() {
            Ok(None)
        } else {
            Ok(Some(response.candidates))
        }
    }
}

use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use crate::config_manager::asr::ASRConfig;
use crate::engine_service::EngineServiceClient;
use super::client::ASRClient;
use super::interface::SpeechRecognitionInterface;

/// Factory for creating speech recognizers
pub struct ASRFactory;

impl ASRFactory {
    pub fn create_asr(
        asr_config: &ASRConfig,
        engine_service: Arc<EngineServiceClient>,
    ) -> Result<Arc<dyn SpeechRecognitionInterface>> {
        info!("Initializing ASR engine: {}", asr_config.asr_engine);

        match asr_config.asr_engine.as_str() {
            "engine_service" => Ok(Arc::new(ASRClient::new(
                engine_service,
                asr_config.language_model.clone(),
            ))),
            other => Err(anyhow::anyhow!("Unsupported ASR engine: {}", other)),
        }
    }
}

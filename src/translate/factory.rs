use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use crate::config_manager::translator::TranslatorConfig;
use crate::engine_service::EngineServiceClient;
use super::client::TranslatorClient;
use super::interface::TranslatorInterface;

/// Factory for creating translator clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create_translator(
        translator_config: &TranslatorConfig,
        engine_service: Arc<EngineServiceClient>,
    ) -> Result<Arc<dyn TranslatorInterface>> {
        info!("Initializing translator: {}", translator_config.translator_engine);

        match translator_config.translator_engine.as_str() {
            "engine_service" => Ok(Arc::new(TranslatorClient::new(engine_service))),
            other => Err(anyhow::anyhow!("Unsupported translator engine: {}", other)),
        }
    }
}

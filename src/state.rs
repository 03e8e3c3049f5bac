use std::sync::Arc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::asr::{ASRFactory, SpeechRecognitionInterface};
use crate::config_manager::Config;
use crate::engine_service::EngineServiceClient;
use crate::session::SessionServices;
use crate::translate::{TranslatorFactory, TranslatorInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine_service: Arc<EngineServiceClient>,
    pub translator: Arc<dyn TranslatorInterface>,
    pub asr: Arc<dyn SpeechRecognitionInterface>,
    pub client_contexts: Arc<DashMap<String, ClientContext>>,
}

#[derive(Clone)]
pub struct ClientContext {
    pub client_uid: String,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let engine_service = Arc::new(EngineServiceClient::new(
            std::env::var("ENGINE_SERVICE_URL")
                .unwrap_or_else(|_| config.system_config.engine_service_url.clone()),
        ));
        let translator =
            TranslatorFactory::create_translator(&config.translator_config, engine_service.clone())?;
        let asr = ASRFactory::create_asr(&config.asr_config, engine_service.clone())?;

        Ok(Self::with_services(config, engine_service, translator, asr))
    }

    pub fn with_services(
        config: Config,
        engine_service: Arc<EngineServiceClient>,
        translator: Arc<dyn TranslatorInterface>,
        asr: Arc<dyn SpeechRecognitionInterface>,
    ) -> Self {
        Self {
            config,
            engine_service,
            translator,
            asr,
            client_contexts: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    pub fn session_services(&self) -> SessionServices {
        SessionServices {
            translator: self.translator.clone(),
            asr: self.asr.clone(),
            download_conditions: self.config.translator_config.download_conditions,
            speech_language: self.config.asr_config.language.clone(),
            speech_prompt: self.config.asr_config.prompt.clone(),
            max_capture_samples: self.config.asr_config.max_capture_samples,
        }
    }
}

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::asr::{SpeechCaptureRequest, SpeechRecognitionInterface};
use crate::controller::{LanguagePairController, TranslationRequest};
use crate::error::{TranslatorError, TranslatorResult};
use crate::language::LanguageCode;
use crate::messages::{LanguageEntry, OutboundMessage};
use crate::translate::{DownloadConditions, TranslatorInterface};

/// External collaborators and policies a session dispatches to
#[derive(Clone)]
pub struct SessionServices {
    pub translator: Arc<dyn TranslatorInterface>,
    pub asr: Arc<dyn SpeechRecognitionInterface>,
    pub download_conditions: DownloadConditions,
    pub speech_language: String,
    pub speech_prompt: String,
    pub max_capture_samples: usize,
}

/// Result of an external call, delivered back to the session that issued it
#[derive(Debug)]
pub enum Completion {
    Translation {
        request: TranslationRequest,
        result: TranslatorResult<String>,
    },
    SpeechAvailability(bool),
    Speech(TranslatorResult<Option<Vec<String>>>),
}

/// One client's translator screen: a controller plus the action triggers.
///
/// Handlers run synchronously. External work is spawned and its outcome comes
/// back through [`TranslatorSession::handle_completion`].
pub struct TranslatorSession {
    client_uid: String,
    controller: LanguagePairController,
    services: SessionServices,
    audio_buffer: Vec<f32>,
    // Open only between a successful availability check and mic-audio-end.
    capture_open: bool,
    outbound: UnboundedSender<OutboundMessage>,
    completions: UnboundedSender<Completion>,
}

impl TranslatorSession {
    pub fn new(
        client_uid: String,
        services: SessionServices,
        outbound: UnboundedSender<OutboundMessage>,
    ) -> (Self, UnboundedReceiver<Completion>) {
        let (completions, completions_rx) = mpsc::unbounded_channel();
        let session = Self {
            client_uid,
            controller: LanguagePairController::new(),
            services,
            audio_buffer: Vec::new(),
            capture_open: false,
            outbound,
            completions,
        };
        (session, completions_rx)
    }

    #[cfg(test)]
    pub fn controller(&self) -> &LanguagePairController {
        &self.controller
    }

    /// Initial screen state: default fields and the autocomplete list
    pub fn greet(&self) {
        self.send_fields();
        self.send_languages("");
    }

    pub fn set_language_from(&mut self, text: String) {
        self.controller.set_from_text(text);
    }

    pub fn set_language_to(&mut self, text: String) {
        self.controller.set_to_text(text);
    }

    pub fn select_language_from(&mut self, code: LanguageCode) {
        self.controller.select_from(code);
        self.send_fields();
    }

    pub fn select_language_to(&mut self, code: LanguageCode) {
        self.controller.select_to(code);
        self.send_fields();
    }

    pub fn set_input(&mut self, text: String) {
        self.controller.set_input(text);
    }

    pub fn swap_languages(&mut self) {
        let fields = self.controller.swap();
        debug!("Client {} swapped languages: {} <-> {}", self.client_uid, fields.from, fields.to);
        self.send_fields();
    }

    pub fn fetch_languages(&self, prefix: Option<String>) {
        self.send_languages(prefix.as_deref().unwrap_or(""));
    }

    /// Build a request from the current fields and dispatch download-then-translate
    pub fn translate(&mut self, text: Option<String>) {
        if let Some(text) = text {
            self.controller.set_input(text);
        }
        let request = self.controller.build_request(self.controller.input());
        info!(
            "Client {} translating {} -> {}",
            self.client_uid,
            request.source(),
            request.target()
        );

        let translator = self.services.translator.clone();
        let conditions = self.services.download_conditions;
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let result = match translator
                .download_model_if_needed(&request.selection, &conditions)
                .await
            {
                Ok(()) => translator.translate(&request).await,
                Err(e) => Err(e),
            };
            let _ = completions.send(Completion::Translation { request, result });
        });
    }

    pub fn mic_start(&mut self) {
        self.capture_open = false;
        self.audio_buffer.clear();
        let asr = self.services.asr.clone();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let available = asr.is_available().await;
            let _ = completions.send(Completion::SpeechAvailability(available));
        });
    }

    pub fn mic_audio_data(&mut self, audio: Vec<f32>) {
        if !self.capture_open {
            debug!("Dropping audio from {}: no capture open", self.client_uid);
            return;
        }

        let room = self
            .services
            .max_capture_samples
            .saturating_sub(self.audio_buffer.len());
        if audio.len() > room {
            warn!(
                "Capture for {} reached {} samples, dropping the rest",
                self.client_uid, self.services.max_capture_samples
            );
        }
        self.audio_buffer.extend(audio.into_iter().take(room));
    }

    pub fn mic_audio_end(&mut self) {
        if !self.capture_open {
            debug!("Ignoring mic-audio-end from {}: no capture open", self.client_uid);
            return;
        }
        self.capture_open = false;

        let audio_data = std::mem::take(&mut self.audio_buffer);
        if audio_data.is_empty() {
            warn!("No audio data in buffer for {}", self.client_uid);
            return;
        }

        let request = SpeechCaptureRequest {
            audio_data,
            language: self.services.speech_language.clone(),
            prompt: self.services.speech_prompt.clone(),
        };
        let asr = self.services.asr.clone();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let result = asr.recognize(&request).await;
            let _ = completions.send(Completion::Speech(result));
        });
    }

    pub fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Translation { request, result } => match result {
                Ok(translated_text) => {
                    let TranslationRequest { text, selection } = request;
                    self.send(OutboundMessage::TranslationResult {
                        text,
                        source: selection.source,
                        target: selection.target,
                        translated_text,
                    });
                }
                Err(e) => self.notify(e),
            },
            Completion::SpeechAvailability(true) => {
                self.capture_open = true;
                self.audio_buffer.clear();
                self.send(OutboundMessage::Control {
                    text: "start-mic".to_string(),
                    prompt: Some(self.services.speech_prompt.clone()),
                });
            }
            Completion::SpeechAvailability(false) => {
                self.capture_open = false;
                self.notify(TranslatorError::SpeechUnavailable);
            }
            Completion::Speech(Ok(Some(candidates))) => {
                if let Some(first) = candidates.into_iter().next() {
                    self.controller.set_input(first);
                    self.send(OutboundMessage::InputText {
                        text: self.controller.input().to_string(),
                    });
                }
            }
            Completion::Speech(Ok(None)) => {
                debug!("No speech recognized for {}", self.client_uid);
            }
            Completion::Speech(Err(e)) => self.notify(e),
        }
    }

    fn notify(&self, error: TranslatorError) {
        warn!("Client {}: {}", self.client_uid, error);
        self.send(OutboundMessage::toast(error.to_string()));
    }

    fn send_fields(&self) {
        let selection = self.controller.selection();
        self.send(OutboundMessage::fields(
            self.controller.fields(),
            selection.source,
            selection.target,
        ));
    }

    fn send_languages(&self, prefix: &str) {
        let languages = self
            .controller
            .suggestions(prefix)
            .into_iter()
            .filter_map(|name| {
                LanguageCode::all()
                    .find(|code| code.display_name() == name)
                    .map(|code| LanguageEntry {
                        code,
                        name: name.to_string(),
                    })
            })
            .collect();
        self.send(OutboundMessage::LanguageList { languages });
    }

    fn send(&self, message: OutboundMessage) {
        // The receiver only goes away when the socket closes.
        let _ = self.outbound.send(message);
    }
}

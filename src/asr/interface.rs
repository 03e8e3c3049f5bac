use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslatorResult;

/// One speech-capture session sent to the recognizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechCaptureRequest {
    pub audio_data: Vec<f32>,
    pub language: String,
    pub prompt: String,
}

/// Speech recognition interface - recognition lives in the external engine service
#[async_trait]
pub trait SpeechRecognitionInterface: Send + Sync {
    /// Whether the recognizer can accept a capture session right now
    async fn is_available(&self) -> bool;

    /// Transcribe one capture session.
    ///
    /// # Returns
    /// Ordered, non-empty candidate list, or `None` when nothing was recognized
    async fn recognize(
        &self,
        request: &SpeechCaptureRequest,
    ) -> TranslatorResult<Option<Vec<String>>>;
}

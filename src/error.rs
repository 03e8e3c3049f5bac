use thiserror::Error;

/// Failures reported by the external translation and speech engines.
/// Messages are shown to the user verbatim.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("{0}")]
    ModelDownload(String),

    #[error("{0}")]
    Translation(String),

    #[error("Speech recognition not available")]
    SpeechUnavailable,

    #[error("{0}")]
    Recognition(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

pub type TranslatorResult<T> = Result<T, TranslatorError>;

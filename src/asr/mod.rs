pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{SpeechCaptureRequest, SpeechRecognitionInterface};
pub use factory::ASRFactory;

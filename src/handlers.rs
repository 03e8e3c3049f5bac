use tracing::warn;

use crate::messages::InboundMessage;
use crate::session::TranslatorSession;

/// Dispatch one client text frame to the session's action handlers
pub fn handle_message(session: &mut TranslatorSession, text: &str) {
    let msg: InboundMessage = match serde_json::from_str(text) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Unknown or malformed message: {} ({})", text, e);
            return;
        }
    };

    match msg {
        InboundMessage::SetLanguageFrom { text } => session.set_language_from(text),
        InboundMessage::SetLanguageTo { text } => session.set_language_to(text),
        InboundMessage::SelectLanguageFrom { code } => session.select_language_from(code),
        InboundMessage::SelectLanguageTo { code } => session.select_language_to(code),
        InboundMessage::SetInput { text } => session.set_input(text),
        InboundMessage::Translate { text } => session.translate(text),
        InboundMessage::SwapLanguages => session.swap_languages(),
        InboundMessage::MicStart => session.mic_start(),
        InboundMessage::MicAudioData { audio } => session.mic_audio_data(audio),
        InboundMessage::MicAudioEnd => session.mic_audio_end(),
        InboundMessage::FetchLanguages { prefix } => session.fetch_languages(prefix),
    }
}

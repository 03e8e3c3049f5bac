use serde::{Deserialize, Serialize};

use crate::controller::LanguageFields;
use crate::language::LanguageCode;

/// Messages a client sends over the WebSocket
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    SetLanguageFrom { text: String },
    SetLanguageTo { text: String },
    SelectLanguageFrom { code: LanguageCode },
    SelectLanguageTo { code: LanguageCode },
    SetInput { text: String },
    Translate {
        #[serde(default)]
        text: Option<String>,
    },
    SwapLanguages,
    MicStart,
    MicAudioData { audio: Vec<f32> },
    MicAudioEnd,
    FetchLanguages {
        #[serde(default)]
        prefix: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: LanguageCode,
    pub name: String,
}

/// Messages the server pushes to a client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    LanguageFields {
        from: String,
        to: String,
        source: LanguageCode,
        target: LanguageCode,
    },
    LanguageList { languages: Vec<LanguageEntry> },
    InputText { text: String },
    TranslationResult {
        text: String,
        source: LanguageCode,
        target: LanguageCode,
        translated_text: String,
    },
    Toast { message: String },
    Control {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        prompt: Option<String>,
    },
}

impl OutboundMessage {
    pub fn fields(fields: &LanguageFields, source: LanguageCode, target: LanguageCode) -> Self {
        OutboundMessage::LanguageFields {
            from: fields.from.clone(),
            to: fields.to.clone(),
            source,
            target,
        }
    }

    pub fn toast(message: impl Into<String>) -> Self {
        OutboundMessage::Toast {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_kebab_case_tags() {
        let msg: InboundMessage =
            serde_json::from_value(json!({"type": "set-language-to", "text": "Frnech"})).unwrap();
        assert_eq!(msg, InboundMessage::SetLanguageTo { text: "Frnech".to_string() });

        let msg: InboundMessage =
            serde_json::from_value(json!({"type": "select-language-from", "code": "vi"})).unwrap();
        assert_eq!(msg, InboundMessage::SelectLanguageFrom { code: LanguageCode::Vietnamese });

        let msg: InboundMessage = serde_json::from_value(json!({"type": "translate"})).unwrap();
        assert_eq!(msg, InboundMessage::Translate { text: None });

        let msg: InboundMessage = serde_json::from_value(json!({"type": "swap-languages"})).unwrap();
        assert_eq!(msg, InboundMessage::SwapLanguages);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let parsed = serde_json::from_value::<InboundMessage>(json!({"type": "ai-speak-signal"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn toast_serializes_with_type_tag() {
        let value = serde_json::to_value(OutboundMessage::toast("offline")).unwrap();
        assert_eq!(value, json!({"type": "toast", "message": "offline"}));
    }

    #[test]
    fn control_omits_missing_prompt() {
        let value = serde_json::to_value(OutboundMessage::Control {
            text: "stop-mic".to_string(),
            prompt: None,
        })
        .unwrap();
        assert_eq!(value, json!({"type": "control", "text": "stop-mic"}));
    }
}

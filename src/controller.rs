use serde::{Deserialize, Serialize};

use crate::language::{LanguageCode, LanguageTable};

/// Resolved (source, target) pair. Source and target may be equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSelection {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl Default for LanguageSelection {
    fn default() -> Self {
        Self {
            source: LanguageCode::English,
            target: LanguageCode::Vietnamese,
        }
    }
}

/// Raw text currently shown in the "from" and "to" fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFields {
    pub from: String,
    pub to: String,
}

impl Default for LanguageFields {
    fn default() -> Self {
        let selection = LanguageSelection::default();
        Self {
            from: selection.source.display_name().to_string(),
            to: selection.target.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub selection: LanguageSelection,
}

impl TranslationRequest {
    pub fn source(&self) -> LanguageCode {
        self.selection.source
    }

    pub fn target(&self) -> LanguageCode {
        self.selection.target
    }
}

/// Owns the language fields and input text of one session and decides
/// what gets sent to the translator.
#[derive(Debug, Clone, Default)]
pub struct LanguagePairController {
    table: LanguageTable,
    fields: LanguageFields,
    input: String,
}

impl LanguagePairController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_language(
        &self,
        raw_text: &str,
        default_if_empty: LanguageCode,
        default_if_unrecognized: LanguageCode,
    ) -> LanguageCode {
        self.table
            .resolve(raw_text, default_if_empty, default_if_unrecognized)
    }

    pub fn resolve_from(&self) -> LanguageCode {
        self.resolve_language(&self.fields.from, LanguageCode::English, LanguageCode::English)
    }

    // A typo here silently becomes Vietnamese.
    pub fn resolve_to(&self) -> LanguageCode {
        self.resolve_language(
            &self.fields.to,
            LanguageCode::Vietnamese,
            LanguageCode::Vietnamese,
        )
    }

    pub fn selection(&self) -> LanguageSelection {
        LanguageSelection {
            source: self.resolve_from(),
            target: self.resolve_to(),
        }
    }

    pub fn fields(&self) -> &LanguageFields {
        &self.fields
    }

    pub fn set_from_text(&mut self, text: impl Into<String>) {
        self.fields.from = text.into();
    }

    pub fn set_to_text(&mut self, text: impl Into<String>) {
        self.fields.to = text.into();
    }

    pub fn select_from(&mut self, code: LanguageCode) {
        self.fields.from = code.display_name().to_string();
    }

    pub fn select_to(&mut self, code: LanguageCode) {
        self.fields.to = code.display_name().to_string();
    }

    /// Exchange the raw text of both fields. Nothing is validated here;
    /// each field is re-resolved on next use.
    pub fn swap(&mut self) -> LanguageFields {
        std::mem::swap(&mut self.fields.from, &mut self.fields.to);
        self.fields.clone()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn build_request(&self, input_text: &str) -> TranslationRequest {
        TranslationRequest {
            text: input_text.to_string(),
            selection: self.selection(),
        }
    }

    pub fn suggestions(&self, prefix: &str) -> Vec<&'static str> {
        self.table.suggestions(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_english_to_vietnamese() {
        let controller = LanguagePairController::new();
        assert_eq!(
            controller.selection(),
            LanguageSelection {
                source: LanguageCode::English,
                target: LanguageCode::Vietnamese,
            }
        );
        assert_eq!(controller.fields().from, "English");
        assert_eq!(controller.fields().to, "Vietnamese");
    }

    #[test]
    fn swap_exchanges_fields_and_resolution() {
        let mut controller = LanguagePairController::new();
        let fields = controller.swap();
        assert_eq!(fields.from, "Vietnamese");
        assert_eq!(fields.to, "English");
        assert_eq!(controller.resolve_from(), LanguageCode::Vietnamese);
        assert_eq!(controller.resolve_to(), LanguageCode::English);
    }

    #[test]
    fn double_swap_restores_fields() {
        let mut controller = LanguagePairController::new();
        controller.set_from_text("Frnech");
        controller.set_to_text("");
        let original = controller.fields().clone();
        controller.swap();
        assert_eq!(controller.swap(), original);
    }

    #[test]
    fn swap_moves_raw_text_not_codes() {
        let mut controller = LanguagePairController::new();
        controller.set_from_text("Klingon");
        controller.swap();
        assert_eq!(controller.fields().to, "Klingon");
        // unrecognized in the "to" field falls back to its own default
        assert_eq!(controller.resolve_to(), LanguageCode::Vietnamese);
        assert_eq!(controller.resolve_from(), LanguageCode::Vietnamese);
    }

    #[test]
    fn blank_from_field_resolves_to_english() {
        let mut controller = LanguagePairController::new();
        controller.select_from(LanguageCode::Vietnamese);
        controller.set_from_text("");
        assert_eq!(controller.resolve_from(), LanguageCode::English);
    }

    #[test]
    fn typo_in_to_field_resolves_to_vietnamese() {
        let mut controller = LanguagePairController::new();
        controller.select_to(LanguageCode::English);
        controller.set_to_text("Frnech");
        assert_eq!(controller.resolve_to(), LanguageCode::Vietnamese);
    }

    #[test]
    fn same_source_and_target_is_allowed() {
        let mut controller = LanguagePairController::new();
        controller.select_to(LanguageCode::English);
        let selection = controller.selection();
        assert_eq!(selection.source, selection.target);
    }

    #[test]
    fn build_request_with_default_selection() {
        let controller = LanguagePairController::new();
        let request = controller.build_request("hello");
        assert_eq!(
            request,
            TranslationRequest {
                text: "hello".to_string(),
                selection: LanguageSelection {
                    source: LanguageCode::English,
                    target: LanguageCode::Vietnamese,
                },
            }
        );
    }

    #[test]
    fn input_is_replaced_not_appended() {
        let mut controller = LanguagePairController::new();
        controller.set_input("first");
        controller.set_input("second");
        assert_eq!(controller.input(), "second");
    }
}

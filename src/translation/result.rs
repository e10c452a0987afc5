use super::TranslateError;

/// Text shown when the source language could not be detected.
pub const DETECTION_FAILED_TEXT: &str = "Language detection failed";

/// Outcome of translating one chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// The backend translated the message, now or in an earlier call.
    Translated {
        text: String,
        original_lang_name: String,
        from_cache: bool,
    },
    /// Returned as-is: banned word, excluded language or already in the target language.
    Unchanged { text: String },
    /// The detector returned no language.
    DetectionFailed,
    /// The backend failed.
    Failed {
        error: TranslateError,
        original_lang_name: String,
    },
}

impl TranslationResult {
    pub fn final_text(&self) -> String {
        match self {
            Self::Translated { text, .. } | Self::Unchanged { text } => text.clone(),
            Self::DetectionFailed => DETECTION_FAILED_TEXT.to_string(),
            Self::Failed { error, .. } => error.to_string(),
        }
    }

    pub const fn was_translated(&self) -> bool {
        matches!(self, Self::Translated { .. })
    }

    pub fn original_lang_name(&self) -> Option<&str> {
        match self {
            Self::Translated {
                original_lang_name, ..
            }
            | Self::Failed {
                original_lang_name, ..
            } => Some(original_lang_name),
            Self::Unchanged { .. } | Self::DetectionFailed => None,
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub const fn from_cache(&self) -> bool {
        matches!(
            self,
            Self::Translated {
                from_cache: true,
                ..
            }
        )
    }
}

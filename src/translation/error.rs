use thiserror::Error;

use super::Engine;

/// Why a translation backend failed to produce text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("{engine} API key is missing")]
    MissingCredential { engine: Engine },

    #[error("{engine} quota may be exceeded")]
    QuotaExceeded { engine: Engine },

    #[error("Language '{code}' not supported by the {engine} integration")]
    UnsupportedLanguage { engine: Engine, code: String },

    #[error("{engine} API: {message}")]
    Provider { engine: Engine, message: String },
}

impl TranslateError {
    /// Wraps a provider failure, classifying quota errors by their message.
    pub fn from_provider(engine: Engine, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.to_lowercase().contains("quota") {
            Self::QuotaExceeded { engine }
        } else {
            Self::Provider { engine, message }
        }
    }

    pub const fn engine(&self) -> Engine {
        match self {
            Self::MissingCredential { engine }
            | Self::QuotaExceeded { engine }
            | Self::UnsupportedLanguage { engine, .. }
            | Self::Provider { engine, .. } => *engine,
        }
    }
}

//! Translation engine identifiers.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};

/// The translation backend selected for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Free Google endpoint, no credential needed.
    #[default]
    Google,
    /// Paid, token-based `DeepL` API.
    DeepL,
    /// LLM-prompted translation through the Gemini API.
    Gemini,
}

impl Engine {
    pub const ALL: [Self; 3] = [Self::Google, Self::DeepL, Self::Gemini];

    /// Lowercase identifier used in config files and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::DeepL => "deepl",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google Translator",
            Self::DeepL => "DeepL",
            Self::Gemini => "Gemini",
        }
    }

    pub const fn requires_credential(self) -> bool {
        !matches!(self, Self::Google)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Engine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|engine| {
                engine.id().eq_ignore_ascii_case(s) || engine.display_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| {
                anyhow!(
                    "Unknown translation engine: '{s}'\n\n\
                     Available engines: google, deepl, gemini"
                )
            })
    }
}

//! Dispatch over the configured translation engine.
//!
//! Backends know nothing about caching or rate limiting; those live in the
//! [`Orchestrator`](super::Orchestrator).

use std::future::Future;

use reqwest::Client;

use super::deepl::DeepLClient;
use super::gemini::GeminiClient;
use super::google::GoogleClient;
use super::{Engine, TranslateError};

/// Something that can translate text into a target language.
pub trait TranslationBackend {
    /// The engine identity, used to key cached translations.
    fn engine(&self) -> Engine;

    /// Translates `text` into `target` (ISO 639-1 code), returning trimmed text.
    fn translate(
        &self,
        text: &str,
        target: &str,
    ) -> impl Future<Output = Result<String, TranslateError>>;
}

/// Credentials and engine options needed to build a [`Backend`].
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    pub deepl_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

/// The three supported backends, selected once per session.
#[derive(Debug, Clone)]
pub enum Backend {
    Google(GoogleClient),
    DeepL(DeepLClient),
    Gemini(GeminiClient),
}

impl Backend {
    pub fn new(engine: Engine, options: &BackendOptions, client: Client) -> Self {
        match engine {
            Engine::Google => Self::Google(GoogleClient::new(client)),
            Engine::DeepL => Self::DeepL(DeepLClient::new(client, options.deepl_api_key.clone())),
            Engine::Gemini => Self::Gemini(GeminiClient::new(
                client,
                options.gemini_api_key.clone(),
                options.gemini_model.clone(),
            )),
        }
    }
}

impl TranslationBackend for Backend {
    fn engine(&self) -> Engine {
        match self {
            Self::Google(_) => Engine::Google,
            Self::DeepL(_) => Engine::DeepL,
            Self::Gemini(_) => Engine::Gemini,
        }
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        match self {
            Self::Google(client) => client.translate(text, target).await,
            Self::DeepL(client) => client.translate(text, target).await,
            Self::Gemini(client) => client.translate(text, target).await,
        }
    }
}

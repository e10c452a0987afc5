//! Per-session translation pipeline.
//!
//! For every chat message the orchestrator decides whether a backend call is
//! needed at all: cached translations, banned words and messages already in
//! the target language are answered locally. Live calls are rate limited.
//!
//! One orchestrator exists per listening session and is only ever used from
//! the worker thread that created it. Its async collaborators run on a
//! private single-threaded runtime, so every call blocks until complete.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::runtime::Runtime;

use super::backend::{Backend, TranslationBackend};
use super::detect::{GoogleDetector, LanguageDetector};
use super::language::language_name;
use super::rate_limit::RateLimiter;
use super::{Engine, TranslationResult};
use crate::cache::{CacheEntry, CacheKey, TranslationCache, normalize_message};
use crate::config::{DEFAULT_TARGET_LANGUAGE, SessionConfig};

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

const ENGLISH: &str = "en";

/// Options that shape translation decisions for a session.
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    /// Target language code (ISO 639-1).
    pub target_language: String,
    /// Leave English messages untranslated.
    pub exclude_english: bool,
    /// Messages equal to one of these words are never translated.
    pub banned_words: Vec<String>,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            exclude_english: false,
            banned_words: Vec::new(),
        }
    }
}

/// Decides, per chat message, between a cached answer, a local passthrough
/// and a live backend call.
pub struct Orchestrator<D = GoogleDetector, B = Backend> {
    runtime: Runtime,
    detector: D,
    backend: B,
    target_language: String,
    exclude_english: bool,
    banned_words: Vec<String>,
    cache: TranslationCache,
    rate_limiter: RateLimiter,
}

impl Orchestrator {
    /// Builds the orchestrator for a session: Google detection plus the configured engine.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        let detector = GoogleDetector::new(client.clone());
        let backend = Backend::new(config.engine, &config.backend_options(), client);

        Self::new(config.translator_settings(), detector, backend)
    }
}

impl<D: LanguageDetector, B: TranslationBackend> Orchestrator<D, B> {
    pub fn new(settings: TranslatorSettings, detector: D, backend: B) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start translation runtime")?;

        Ok(Self {
            runtime,
            detector,
            backend,
            target_language: settings.target_language,
            exclude_english: settings.exclude_english,
            banned_words: settings
                .banned_words
                .iter()
                .map(|word| normalize_message(word))
                .collect(),
            cache: TranslationCache::new(),
            rate_limiter: RateLimiter::default(),
        })
    }

    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiter) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// Starts from an existing cache instead of an empty one.
    #[cfg(test)]
    #[must_use]
    pub fn with_cache(mut self, cache: TranslationCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn engine(&self) -> Engine {
        self.backend.engine()
    }

    #[cfg(test)]
    pub const fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    #[cfg(test)]
    pub fn into_cache(self) -> TranslationCache {
        self.cache
    }

    /// Translates one chat message, blocking until a result is available.
    pub fn translate(&mut self, message: &str) -> TranslationResult {
        let engine = self.backend.engine();
        let key = CacheKey::new(message, engine);

        if let Some(entry) = self.cache.get(&key) {
            tracing::debug!(%engine, chat = message, "translation found in cache");
            return TranslationResult::Translated {
                text: entry.translated_text.clone(),
                original_lang_name: entry.original_lang_name.clone(),
                from_cache: true,
            };
        }

        if self
            .banned_words
            .iter()
            .any(|word| word == key.normalized_message())
        {
            tracing::debug!(chat = message, "banned word, skipping translation");
            return unchanged(message);
        }

        let language = match self.runtime.block_on(self.detector.detect(message)) {
            Ok(detection) if !detection.language.is_empty() => detection.language,
            Ok(_) => {
                tracing::warn!(chat = message, "language detection returned no language");
                return TranslationResult::DetectionFailed;
            }
            Err(e) => {
                tracing::warn!(chat = message, error = %e, "language detection failed");
                return TranslationResult::DetectionFailed;
            }
        };

        if (self.exclude_english && language.eq_ignore_ascii_case(ENGLISH))
            || language.eq_ignore_ascii_case(&self.target_language)
        {
            tracing::debug!(%language, "message already in an untranslated language");
            return unchanged(message);
        }

        self.rate_limiter.wait();
        let translated = self
            .runtime
            .block_on(self.backend.translate(message, &self.target_language));
        self.rate_limiter.record();

        let original_lang_name = language_name(&language);

        match translated {
            Ok(text) => {
                self.cache.put(
                    key,
                    CacheEntry {
                        translated_text: text.clone(),
                        original_lang_name: original_lang_name.clone(),
                    },
                );
                tracing::debug!(%engine, chat = message, "translation stored in cache");
                TranslationResult::Translated {
                    text,
                    original_lang_name,
                    from_cache: false,
                }
            }
            Err(error) => {
                tracing::warn!(%engine, error = %error, "translation failed");
                TranslationResult::Failed {
                    error,
                    original_lang_name,
                }
            }
        }
    }
}

fn unchanged(message: &str) -> TranslationResult {
    TranslationResult::Unchanged {
        text: message.to_string(),
    }
}

//! Source-language detection.

use std::future::Future;

use anyhow::{Result, bail};
use reqwest::Client;

use super::google::GoogleClient;

/// Best-guess language for a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// ISO 639-1 code, as returned by the detector (e.g. `en`, `zh-CN`).
    pub language: String,
    pub confidence: f64,
}

/// Something that can guess the language of a text.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> impl Future<Output = Result<Detection>>;
}

/// Detector backed by the free Google endpoint.
#[derive(Debug, Clone)]
pub struct GoogleDetector {
    client: GoogleClient,
}

impl GoogleDetector {
    pub fn new(client: Client) -> Self {
        Self {
            client: GoogleClient::new(client),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.client = self.client.with_endpoint(endpoint);
        self
    }
}

impl LanguageDetector for GoogleDetector {
    async fn detect(&self, text: &str) -> Result<Detection> {
        let reply = self.client.query(text, "en").await?;
        let Some(language) = reply.source_language else {
            bail!("no language returned for {text:?}");
        };
        Ok(Detection {
            language,
            confidence: reply.confidence,
        })
    }
}

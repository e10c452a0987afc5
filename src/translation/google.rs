//! Free Google translation endpoint (no credential).
//!
//! The same endpoint answers both translation and source-language detection:
//! every reply carries the detected language next to the translated segments.

use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde_json::Value;

use super::{Engine, TranslateError};

pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Parsed reply from the free endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleReply {
    pub text: String,
    pub source_language: Option<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct GoogleClient {
    client: Client,
    endpoint: String,
}

impl GoogleClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: DEFAULT_GOOGLE_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sends `text` to the endpoint with `target` as destination language.
    pub async fn query(&self, text: &str, target: &str) -> Result<GoogleReply> {
        let target = target.to_lowercase();
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .with_context(|| format!("Invalid Google endpoint: {}", self.endpoint))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to connect to Google translation endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("request failed with status {status}: {body}");
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to decode Google response")?;

        parse_reply(&body).context("Unexpected Google response format")
    }

    pub async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        self.query(text, target)
            .await
            .map(|reply| reply.text.trim().to_string())
            .map_err(|e| TranslateError::Provider {
                engine: Engine::Google,
                message: format!("{e:#}"),
            })
    }
}

fn parse_reply(body: &Value) -> Option<GoogleReply> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0)?.as_str())
        .collect();

    let source_language = body
        .get(2)
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())
        .map(str::to_string);

    let confidence = body.get(6).and_then(Value::as_f64).unwrap_or(0.0);

    Some(GoogleReply {
        text,
        source_language,
        confidence,
    })
}

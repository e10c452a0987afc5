//! Gemini `generateContent` backend.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::language::prompt_language_name;
use super::prompt::build_translation_prompt;
use super::{Engine, TranslateError};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const TEMPERATURE: f32 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 100;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(client: Client, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(TranslateError::MissingCredential {
                engine: Engine::Gemini,
            })?;

        let language =
            prompt_language_name(target).ok_or_else(|| TranslateError::UnsupportedLanguage {
                engine: Engine::Gemini,
                code: target.to_string(),
            })?;

        let request = build_request(&build_translation_prompt(language, text));
        let url = format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| provider_error(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(provider_error(format!("{status}: {body}")));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("invalid response: {e}")))?;

        response_text(body).ok_or_else(|| provider_error("empty response"))
    }
}

fn provider_error(message: impl Into<String>) -> TranslateError {
    TranslateError::Provider {
        engine: Engine::Gemini,
        message: message.into(),
    }
}

fn build_request(prompt: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}

fn response_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

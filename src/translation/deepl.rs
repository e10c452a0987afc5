//! `DeepL` REST API backend.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Engine, TranslateError};

const FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
const PRO_ENDPOINT: &str = "https://api.deepl.com/v2/translate";

/// `DeepL` answers 456 when the character quota is used up.
const QUOTA_EXCEEDED_STATUS: u16 = 456;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

#[derive(Debug, Clone)]
pub struct DeepLClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Option<String>,
}

impl DeepLClient {
    pub const fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Free-plan keys end in `:fx` and must use the free API host.
    fn endpoint_for(&self, api_key: &str) -> String {
        self.endpoint.clone().unwrap_or_else(|| {
            if api_key.ends_with(":fx") {
                FREE_ENDPOINT.to_string()
            } else {
                PRO_ENDPOINT.to_string()
            }
        })
    }

    pub async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(TranslateError::MissingCredential {
                engine: Engine::DeepL,
            })?;

        let request = TranslateRequest {
            text: [text],
            target_lang: target.to_uppercase(),
        };

        let response = self
            .client
            .post(self.endpoint_for(api_key))
            .header("Authorization", format!("DeepL-Auth-Key {api_key}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::from_provider(Engine::DeepL, e.to_string()))?;

        let status = response.status();
        if status.as_u16() == QUOTA_EXCEEDED_STATUS {
            return Err(TranslateError::QuotaExceeded {
                engine: Engine::DeepL,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::from_provider(
                Engine::DeepL,
                format!("{status}: {body}"),
            ));
        }

        let body: TranslateResponse = response.json().await.map_err(|e| {
            TranslateError::from_provider(Engine::DeepL, format!("invalid response: {e}"))
        })?;

        body.translations
            .into_iter()
            .next()
            .map(|t| t.text.trim().to_string())
            .ok_or_else(|| TranslateError::from_provider(Engine::DeepL, "no translation returned"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server) -> DeepLClient {
        DeepLClient::new(Client::new(), Some("secret:fx".to_string()))
            .with_endpoint(format!("{}/v2/translate", server.url()))
    }

    #[tokio::test]
    async fn test_translate_returns_trimmed_first_translation() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/translate")
            .match_header("authorization", "DeepL-Auth-Key secret:fx")
            .match_body(Matcher::Json(json!({"text": ["hallo"], "target_lang": "FR"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "translations": [
                        {"detected_source_language": "DE", "text": "  salut \n"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let text = client_for(&server).translate("hallo", "fr").await.unwrap();
        assert_eq!(text, "salut");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_456_is_quota_exceeded() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/translate")
            .with_status(456)
            .with_body("")
            .create_async()
            .await;

        let err = client_for(&server).translate("hallo", "fr").await.unwrap_err();
        assert_eq!(
            err,
            TranslateError::QuotaExceeded {
                engine: Engine::DeepL
            }
        );
    }

    #[tokio::test]
    async fn test_quota_message_in_error_body_is_quota_exceeded() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/translate")
            .with_status(403)
            .with_body(r#"{"message":"Quota for this billing period has been exceeded"}"#)
            .create_async()
            .await;

        let err = client_for(&server).translate("hallo", "fr").await.unwrap_err();
        assert_eq!(
            err,
            TranslateError::QuotaExceeded {
                engine: Engine::DeepL
            }
        );
    }

    #[tokio::test]
    async fn test_other_error_status_is_provider_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/translate")
            .with_status(403)
            .with_body(r#"{"message":"Wrong endpoint"}"#)
            .create_async()
            .await;

        let err = client_for(&server).translate("hallo", "fr").await.unwrap_err();
        let TranslateError::Provider { engine, message } = err else {
            panic!("expected a provider error, got {err:?}");
        };
        assert_eq!(engine, Engine::DeepL);
        assert!(message.contains("403"));
        assert!(message.contains("Wrong endpoint"));
    }

    #[tokio::test]
    async fn test_empty_translations_is_provider_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/translate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"translations":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server).translate("hallo", "fr").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = DeepLClient::new(Client::new(), None);
        let err = client.translate("hallo", "fr").await.unwrap_err();
        assert_eq!(
            err,
            TranslateError::MissingCredential {
                engine: Engine::DeepL
            }
        );
    }

    #[tokio::test]
    async fn test_empty_key_counts_as_missing() {
        let client = DeepLClient::new(Client::new(), Some(String::new()));
        let err = client.translate("hallo", "fr").await.unwrap_err();
        assert!(matches!(err, TranslateError::MissingCredential { .. }));
    }

    #[test]
    fn test_endpoint_for_free_key() {
        let client = DeepLClient::new(Client::new(), None);
        assert_eq!(client.endpoint_for("abc:fx"), FREE_ENDPOINT);
        assert_eq!(client.endpoint_for("abc"), PRO_ENDPOINT);
    }

    #[test]
    fn test_endpoint_override() {
        let client = DeepLClient::new(Client::new(), None).with_endpoint("http://localhost:1");
        assert_eq!(client.endpoint_for("abc:fx"), "http://localhost:1");
    }

    #[test]
    fn test_request_serialization() {
        let request = TranslateRequest {
            text: ["hallo"],
            target_lang: "FR".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"text": ["hallo"], "target_lang": "FR"}));
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::interface::{TranslateError, TranslationRequest, Translator};

/// Proxy client for the Google Translate v2 endpoint. The API key travels
/// only in the outbound query string.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<Value, TranslateError> {
        debug!("Forwarding translation request, target={}", request.target);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!("Translation upstream unreachable: {}", err);
                TranslateError::Unreachable(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Translation upstream returned {}", status);
            return Err(TranslateError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|err| TranslateError::Malformed(err.to_string()))
    }
}

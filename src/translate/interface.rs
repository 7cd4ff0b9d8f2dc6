use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Pass-through payload. `q` and `target` are forwarded to the upstream
/// service verbatim, without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub q: String,
    pub target: String,
}

#[derive(Error, Debug, Clone)]
pub enum TranslateError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("upstream response was not JSON: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// One attempt, no retry. A 2xx upstream body is relayed as opaque JSON
    /// even when it is itself an error payload from the service.
    async fn translate(&self, request: &TranslationRequest) -> Result<Value, TranslateError>;
}

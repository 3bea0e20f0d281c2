use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// A single chat-completion request built from one report.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

/// Why a remote insight could not be used. Never leaves the insight
/// generator: every variant selects the local fallback.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("remote call timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote service returned status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("remote service returned an empty completion")]
    EmptyCompletion,

    #[error("completion rejected: {0}")]
    Rejected(String),
}

/// The network seam of insight generation. Implementations perform exactly
/// one request per call and do not retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RemoteError>;
}

pub mod line;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use line::{LineNotifyProvider, MockNotifyProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not enabled: {0}")]
    NotEnabled(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Send error: {0}")]
    SendFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Remote API response: HTTP status plus the parsed body. The body is
/// logged as-is, no fields are inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait NotifyProvider: Send + Sync {
    async fn send(
        &self,
        token: &SecretString,
        message: &str,
    ) -> Result<ProviderResponse, ProviderError>;
}

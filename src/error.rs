use thiserror::Error;

use crate::services::providers::ProviderError;
use crate::services::secrets::SecretError;

/// Everything that can abort an invocation. None of these are recovered
/// locally; they surface to the Lambda runtime as-is.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Secret retrieval error: {0}")]
    Secret(#[from] SecretError),

    #[error("Malformed event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    #[error("Notification delivery error: {0}")]
    Provider(#[from] ProviderError),
}

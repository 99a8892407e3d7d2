use async_trait::async_trait;
use aws_sdk_ssm::Client;
use secrecy::SecretString;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Parameter lookup failed: {0}")]
    Lookup(String),

    #[error("Parameter has no value: {0}")]
    Missing(String),
}

/// Read access to the notification credential. One fetch per invocation;
/// any caching is the backing client's concern.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch(&self) -> Result<SecretString, SecretError>;
}

/// Token source backed by SSM Parameter Store, decryption requested.
pub struct SsmTokenSource {
    client: Client,
    parameter_name: String,
}

impl SsmTokenSource {
    pub fn new(sdk_config: &aws_config::SdkConfig, parameter_name: String) -> Self {
        Self {
            client: Client::new(sdk_config),
            parameter_name,
        }
    }
}

#[async_trait]
impl TokenSource for SsmTokenSource {
    async fn fetch(&self) -> Result<SecretString, SecretError> {
        let response = self
            .client
            .get_parameter()
            .name(&self.parameter_name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| SecretError::Lookup(format!("{}: {}", self.parameter_name, e)))?;

        let value = response
            .parameter
            .and_then(|p| p.value)
            .ok_or_else(|| SecretError::Missing(self.parameter_name.clone()))?;

        Ok(SecretString::new(value))
    }
}

/// Fixed-token source for testing.
pub struct MockTokenSource {
    token: String,
    fetch_count: AtomicU64,
}

impl MockTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            fetch_count: AtomicU64::new(0),
        }
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenSource for MockTokenSource {
    async fn fetch(&self) -> Result<SecretString, SecretError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(SecretString::new(self.token.clone()))
    }
}

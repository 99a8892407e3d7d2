use super::{NotifyProvider, ProviderError, ProviderResponse};
use crate::config::LineConfig;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct LineNotifyProvider {
    config: LineConfig,
    client: Client,
}

impl LineNotifyProvider {
    pub fn new(config: LineConfig) -> Result<Self, ProviderError> {
        // The timeout covers the whole request, connect included.
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                ProviderError::Connection(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl NotifyProvider for LineNotifyProvider {
    async fn send(
        &self,
        token: &SecretString,
        message: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(token.expose_secret())
            .form(&[("message", message)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(format!(
                        "LINE Notify did not answer within {} ms",
                        self.config.timeout_ms
                    ))
                } else {
                    ProviderError::Connection(format!("Failed to connect to LINE Notify: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::SendFailed(format!(
                "LINE Notify returned error status {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            ProviderError::MalformedResponse(format!(
                "Failed to parse LINE Notify response: {}",
                e
            ))
        })?;

        tracing::info!(
            status = status.as_u16(),
            "Notification sent via LINE Notify"
        );

        Ok(ProviderResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Mock notify provider for testing and disabled environments.
pub struct MockNotifyProvider {
    enabled: bool,
    send_count: AtomicU64,
}

impl MockNotifyProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            send_count: AtomicU64::new(0),
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotifyProvider for MockNotifyProvider {
    async fn send(
        &self,
        _token: &SecretString,
        message: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotEnabled(
                "Mock notify provider is not enabled".to_string(),
            ));
        }

        self.send_count.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            message = %message,
            "[MOCK] Notification would be sent"
        );

        Ok(ProviderResponse {
            status: 200,
            body: serde_json::json!({ "status": 200, "message": "ok" }),
        })
    }
}

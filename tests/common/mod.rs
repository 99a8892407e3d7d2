use std::sync::Arc;

use async_trait::async_trait;
use line_notify::config::{LineConfig, NotifyConfig, SsmConfig};
use line_notify::services::{
    LineNotifyProvider, MockTokenSource, NotifyProvider, SecretError, TokenSource,
};
use line_notify::startup::AppState;
use secrecy::SecretString;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-line-token";

pub struct TestApp {
    pub state: AppState,
    pub server: MockServer,
}

impl TestApp {
    /// State wired to a local mock LINE endpoint and a fixed token.
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;
        let config = test_config(&format!("{}/api/notify", server.uri()));

        let notifier: Arc<dyn NotifyProvider> = Arc::new(
            LineNotifyProvider::new(config.line.clone()).expect("Failed to build LINE provider"),
        );
        let state = AppState {
            config,
            tokens: Arc::new(MockTokenSource::new(TEST_TOKEN)),
            notifier,
        };

        TestApp { state, server }
    }
}

pub fn test_config(endpoint: &str) -> NotifyConfig {
    NotifyConfig {
        ssm: SsmConfig {
            token_parameter: "/CatSensor/LineNotifyToken".to_string(),
        },
        line: LineConfig {
            endpoint: endpoint.to_string(),
            timeout_ms: 1000,
            pet_name: "モチ".to_string(),
            enabled: true,
        },
    }
}

/// Token source that always fails, for the no-send-on-secret-failure path.
pub struct FailingTokenSource;

#[async_trait]
impl TokenSource for FailingTokenSource {
    async fn fetch(&self) -> Result<SecretString, SecretError> {
        Err(SecretError::Missing("/CatSensor/LineNotifyToken".to_string()))
    }
}

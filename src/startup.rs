//! Application startup: AWS client and provider wiring.
//!
//! State is built once per process and reused across warm invocations;
//! each invocation is otherwise independent and shares nothing mutable.

use std::sync::Arc;

use crate::config::NotifyConfig;
use crate::error::HandlerError;
use crate::services::{
    LineNotifyProvider, MockNotifyProvider, NotifyProvider, SsmTokenSource, TokenSource,
};

/// Shared application state.
pub struct AppState {
    pub config: NotifyConfig,
    pub tokens: Arc<dyn TokenSource>,
    pub notifier: Arc<dyn NotifyProvider>,
}

impl AppState {
    /// Build the application state with the given configuration.
    pub async fn build(config: NotifyConfig) -> Result<Self, HandlerError> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let tokens: Arc<dyn TokenSource> = Arc::new(SsmTokenSource::new(
            &sdk_config,
            config.ssm.token_parameter.clone(),
        ));

        let notifier: Arc<dyn NotifyProvider> = if config.line.enabled {
            tracing::info!("LINE Notify provider initialized");
            Arc::new(LineNotifyProvider::new(config.line.clone())?)
        } else {
            tracing::info!("LINE Notify provider disabled, using mock provider");
            Arc::new(MockNotifyProvider::new(true))
        };

        Ok(Self {
            config,
            tokens,
            notifier,
        })
    }
}

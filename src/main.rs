use lambda_runtime::{service_fn, LambdaEvent};
use line_notify::config::NotifyConfig;
use line_notify::handler;
use line_notify::observability::init_tracing;
use line_notify::startup::AppState;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    init_tracing("info");

    let config = NotifyConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let state = AppState::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application state: {}", e);
        e
    })?;
    let state_ref = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::handle(event, state_ref).await
    }))
    .await
}

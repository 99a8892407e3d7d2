use lambda_runtime::LambdaEvent;
use serde_json::Value;

use crate::error::HandlerError;
use crate::models::ScaleEvent;
use crate::startup::AppState;

/// Single invocation: log the event, fetch the token, pick the message,
/// post it, log the remote response.
///
/// The token is fetched before the event is parsed, so a secret-store
/// failure aborts the invocation without an outbound request.
pub async fn handle(
    event: LambdaEvent<Value>,
    state: &AppState,
) -> Result<(), lambda_runtime::Error> {
    let payload = event.payload;
    tracing::info!(event = %payload, "Received scale event");

    let token = state.tokens.fetch().await.map_err(HandlerError::from)?;

    let scale_event = ScaleEvent::from_value(&payload).map_err(HandlerError::MalformedEvent)?;
    let message = scale_event.message(&state.config.line.pet_name);

    let response = state
        .notifier
        .send(&token, &message)
        .await
        .map_err(HandlerError::from)?;

    tracing::info!(
        status = response.status,
        body = %response.body,
        "LINE Notify response"
    );

    Ok(())
}

use serde::Deserialize;
use serde_json::{Number, Value};

/// Connection states emitted by the IoT lifecycle feed.
pub const STATE_CONNECTED: &str = "connected";
pub const STATE_DISCONNECTED: &str = "disconnected";

const POWER_ON_MESSAGE: &str = "体重計の電源が入りました";
const POWER_OFF_MESSAGE: &str = "体重計の電源が切れました";

/// Inbound event: either a connectivity transition or a weight reading.
///
/// The discriminator wins: a record carrying `eventType` is a connection
/// event even when other fields are present.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScaleEvent {
    Connection {
        #[serde(rename = "eventType")]
        event_type: String,
    },
    Weight {
        // raw JSON number, so the reading renders exactly as sent
        weight: Number,
    },
}

impl ScaleEvent {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    /// Builds the notification text for this event.
    ///
    /// Any connection state other than `connected` maps to the power-off
    /// message; unrecognized states are logged, not rejected.
    pub fn message(&self, pet_name: &str) -> String {
        match self {
            ScaleEvent::Connection { event_type } => {
                if event_type == STATE_CONNECTED {
                    POWER_ON_MESSAGE.to_string()
                } else {
                    if event_type != STATE_DISCONNECTED {
                        tracing::warn!(
                            event_type = %event_type,
                            "Unrecognized connection state, treating as powered off"
                        );
                    }
                    POWER_OFF_MESSAGE.to_string()
                }
            }
            ScaleEvent::Weight { weight } => {
                format!("{}の体重は {} g です。", pet_name, weight)
            }
        }
    }
}

use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::HandlerError;

pub const DEFAULT_NOTIFY_ENDPOINT: &str = "https://notify-api.line.me/api/notify";

#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    pub ssm: SsmConfig,
    pub line: LineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SsmConfig {
    /// Parameter Store path of the LINE Notify token.
    pub token_parameter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub pet_name: String,
    pub enabled: bool,
}

impl LineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl NotifyConfig {
    pub fn load() -> Result<Self, HandlerError> {
        Ok(NotifyConfig {
            ssm: SsmConfig {
                token_parameter: get_env("SSM_LINE_TOKEN", None)?,
            },
            line: LineConfig {
                endpoint: get_env("LINE_NOTIFY_ENDPOINT", Some(DEFAULT_NOTIFY_ENDPOINT))?,
                timeout_ms: get_env("LINE_NOTIFY_TIMEOUT_MS", Some("1000"))?
                    .parse()
                    .unwrap_or(1000),
                pet_name: get_env("PET_NAME", Some("モチ"))?,
                enabled: env::var("LINE_NOTIFY_ENABLED")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, HandlerError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(HandlerError::Config(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

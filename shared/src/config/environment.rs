//! Environment detection and logging configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Application environment. `devCode` in `startPhoneLogin` is only ever
/// populated when this is not `Production` (spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Read from `NOSPOILERS_ENV`, defaulting to development.
    pub fn from_env() -> Self {
        env::var("NOSPOILERS_ENV")
            .ok()
            .and_then(|v| match v.to_lowercase().as_str() {
                "production" | "prod" => Some(Environment::Production),
                "staging" => Some(Environment::Staging),
                "development" | "dev" => Some(Environment::Development),
                _ => None,
            })
            .unwrap_or(Environment::Development)
    }

    pub fn config_file_stem(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

/// Logging configuration, consumed by `tracing-subscriber`'s `EnvFilter`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

//! Configuration module, organized the way the teacher splits config by
//! business area: environment, server, transport policy, TTL policy.

pub mod environment;
pub mod policy;
pub mod server;
pub mod transport;

pub use environment::{Environment, LoggingConfig};
pub use policy::PolicyConfig;
pub use server::ServerConfig;
pub use transport::AuthTransportConfig;

use serde::{Deserialize, Serialize};

/// Complete application configuration combining all sub-configurations.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub transport: AuthTransportConfig,
    pub policy: PolicyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build configuration from `NOSPOILERS_`-prefixed environment variables,
    /// falling back to the documented defaults for anything unset — the
    /// same manual env-var loading the teacher's `Environment::from_env`
    /// uses rather than a config-file builder.
    pub fn load() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            transport: AuthTransportConfig::from_env(),
            policy: PolicyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

//! Configuration for the authentication service.

use ns_shared::config::{AuthTransportConfig, Environment, PolicyConfig};

#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub transport: AuthTransportConfig,
    pub policy: PolicyConfig,
    pub environment: Environment,
    /// HMAC secret for signing access tokens. Must be overridden via
    /// `NOSPOILERS_JWT_SECRET` outside development.
    pub jwt_secret: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            transport: AuthTransportConfig::default(),
            policy: PolicyConfig::default(),
            environment: Environment::default(),
            jwt_secret: std::env::var("NOSPOILERS_JWT_SECRET")
                .unwrap_or_else(|_| "dev-insecure-jwt-secret".to_string()),
        }
    }
}

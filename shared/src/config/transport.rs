//! Auth transport policy (spec §6): the contract required at `AuthService`
//! construction. Validation (`apiBaseUrl` must be `https://`,
//! `enforceSecureStorage` must be `true`) happens in `core`, which can
//! produce a `DomainError::InsecureTransport`; this crate only carries the
//! data shape so both `core` and `api` can share it.

use serde::{Deserialize, Serialize};

use crate::types::Platform;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthTransportConfig {
    pub api_base_url: String,
    pub cookie_name: String,
    pub platform: Platform,
    pub enforce_secure_storage: bool,
}

impl Default for AuthTransportConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.nospoilers.example".to_string(),
            cookie_name: "ns_refresh".to_string(),
            platform: Platform::Web,
            enforce_secure_storage: true,
        }
    }
}

impl AuthTransportConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("NOSPOILERS_API_BASE_URL")
                .unwrap_or(default.api_base_url),
            cookie_name: std::env::var("NOSPOILERS_COOKIE_NAME").unwrap_or(default.cookie_name),
            platform: default.platform,
            enforce_secure_storage: default.enforce_secure_storage,
        }
    }
}

//! Shared HTTP error envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable, generic message (never leaks which credential was wrong)
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes shared between `DomainError` variants and API responses.
///
/// These mirror the stable error-kind taxonomy in spec §7 one-to-one so
/// clients can pattern-match on `error` without parsing `message`.
pub mod error_codes {
    pub const INVALID_PHONE: &str = "INVALID_PHONE";
    pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
    pub const INVALID_USERNAME: &str = "INVALID_USERNAME";
    pub const INVALID_AVATAR: &str = "INVALID_AVATAR";
    pub const EMPTY_DISPLAY_NAME: &str = "EMPTY_DISPLAY_NAME";

    pub const INVALID_CHALLENGE: &str = "INVALID_CHALLENGE";
    pub const EXPIRED: &str = "EXPIRED";
    pub const CODE_MISMATCH: &str = "CODE_MISMATCH";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const UNKNOWN_USER: &str = "UNKNOWN_USER";

    pub const USERNAME_TAKEN: &str = "USERNAME_TAKEN";
    pub const USERNAME_RESERVED: &str = "USERNAME_RESERVED";

    pub const UPLOAD_EXPIRED: &str = "UPLOAD_EXPIRED";
    pub const UPLOAD_MIME_MISMATCH: &str = "UPLOAD_MIME_MISMATCH";
    pub const UNKNOWN_UPLOAD: &str = "UNKNOWN_UPLOAD";

    pub const MISSING_REFRESH: &str = "MISSING_REFRESH";
    pub const REFRESH_EXPIRED: &str = "REFRESH_EXPIRED";

    pub const RATE_LIMITED: &str = "RATE_LIMITED";
    pub const INSECURE_TRANSPORT: &str = "INSECURE_TRANSPORT";
    pub const CRYPTO_UNAVAILABLE: &str = "CRYPTO_UNAVAILABLE";

    pub const UNKNOWN_MEDIA: &str = "UNKNOWN_MEDIA";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_SELECTION: &str = "UNKNOWN_SELECTION";
    pub const INVALID_POST_REFERENCE: &str = "INVALID_POST_REFERENCE";

    pub const UNKNOWN_TOKEN: &str = "UNKNOWN_TOKEN";
    pub const ALREADY_ROLLED_BACK: &str = "ALREADY_ROLLED_BACK";
    pub const ROLLBACK_EXPIRED: &str = "ROLLBACK_EXPIRED";
    pub const STALE: &str = "STALE";

    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Result type with `ErrorResponse` as the error for API-facing code.
pub type ApiResult<T> = Result<T, ErrorResponse>;

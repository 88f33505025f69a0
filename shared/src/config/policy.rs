//! Every wall-clock bound and counting limit named in spec §3/§4/§5,
//! collected into one config struct so none of it is a magic number buried
//! in a service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// OTP challenge lifetime (spec §3 `PhoneChallenge.expiresAtMs`).
    #[serde(default = "default_sms_code_ttl_ms")]
    pub sms_code_ttl_ms: i64,

    /// Access token lifetime, returned as `expiresInMs` in the session payload.
    #[serde(default = "default_access_token_ttl_ms")]
    pub access_token_ttl_ms: i64,

    /// Refresh token lifetime (spec §3 `RefreshTokenRecord.expiresAtMs`).
    #[serde(default = "default_refresh_token_ttl_ms")]
    pub refresh_token_ttl_ms: i64,

    /// Username reservation TTL — fixed at 5 minutes by spec §3.
    #[serde(default = "default_username_reservation_ttl_ms")]
    pub username_reservation_ttl_ms: i64,

    /// Avatar upload plan TTL — fixed at 10 minutes by spec §3.
    #[serde(default = "default_avatar_upload_ttl_ms")]
    pub avatar_upload_ttl_ms: i64,

    /// Rollback window — fixed at 2 minutes by spec §4.6.
    #[serde(default = "default_rollback_window_ms")]
    pub rollback_window_ms: i64,

    /// Rate limiter sliding window — fixed at 60s by spec §4.3.
    #[serde(default = "default_rate_limit_window_ms")]
    pub rate_limit_window_ms: i64,

    /// Rate limiter block duration once exceeded — fixed at 5 minutes by spec §4.3.
    #[serde(default = "default_rate_limit_block_ms")]
    pub rate_limit_block_ms: i64,

    /// Max OTP sends per phone per window.
    #[serde(default = "default_otp_send_limit")]
    pub otp_send_limit: u32,

    /// Max OTP verifications per challenge per window.
    #[serde(default = "default_otp_verify_limit")]
    pub otp_verify_limit: u32,

    /// Max login attempts (OAuth or email) per key per window.
    #[serde(default = "default_login_limit")]
    pub login_limit: u32,

    /// Suspicion score at which an audit event is tagged `suspicious=true`.
    #[serde(default = "default_suspicion_threshold")]
    pub suspicion_threshold: u32,

    /// Audit log ring capacity — fixed at 1000 by spec §4.4.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            sms_code_ttl_ms: default_sms_code_ttl_ms(),
            access_token_ttl_ms: default_access_token_ttl_ms(),
            refresh_token_ttl_ms: default_refresh_token_ttl_ms(),
            username_reservation_ttl_ms: default_username_reservation_ttl_ms(),
            avatar_upload_ttl_ms: default_avatar_upload_ttl_ms(),
            rollback_window_ms: default_rollback_window_ms(),
            rate_limit_window_ms: default_rate_limit_window_ms(),
            rate_limit_block_ms: default_rate_limit_block_ms(),
            otp_send_limit: default_otp_send_limit(),
            otp_verify_limit: default_otp_verify_limit(),
            login_limit: default_login_limit(),
            suspicion_threshold: default_suspicion_threshold(),
            audit_capacity: default_audit_capacity(),
        }
    }
}

fn default_sms_code_ttl_ms() -> i64 {
    5 * 60 * 1000
}
fn default_access_token_ttl_ms() -> i64 {
    15 * 60 * 1000
}
fn default_refresh_token_ttl_ms() -> i64 {
    30 * 24 * 60 * 60 * 1000
}
fn default_username_reservation_ttl_ms() -> i64 {
    5 * 60 * 1000
}
fn default_avatar_upload_ttl_ms() -> i64 {
    10 * 60 * 1000
}
fn default_rollback_window_ms() -> i64 {
    2 * 60 * 1000
}
fn default_rate_limit_window_ms() -> i64 {
    60 * 1000
}
fn default_rate_limit_block_ms() -> i64 {
    5 * 60 * 1000
}
fn default_otp_send_limit() -> u32 {
    3
}
fn default_otp_verify_limit() -> u32 {
    8
}
fn default_login_limit() -> u32 {
    10
}
fn default_suspicion_threshold() -> u32 {
    3
}
fn default_audit_capacity() -> usize {
    1000
}

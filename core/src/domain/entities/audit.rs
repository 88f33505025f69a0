//! `AuditEvent` (spec §4.4): structured record written by the auth service
//! on every sensitive operation, independent of `tracing` log output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    OtpSend,
    OtpVerify,
    EmailLogin,
    OauthLogin,
    SessionRefresh,
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub action: AuditAction,
    pub status: AuditStatus,
    pub user_id: Option<Uuid>,
    /// An opaque reference to the caller when no `user_id` is known yet
    /// (e.g. a phone number hash, or a rate-limit key).
    pub actor_ref: Option<String>,
    pub metadata: HashMap<String, String>,
    /// Set once the suspicion score for the relevant key reaches the
    /// configured threshold (spec §4.3).
    pub suspicious: bool,
    pub timestamp: DateTime<Utc>,
}

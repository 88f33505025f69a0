//! Response shapes for the auth service (spec §6).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::entities::{Identity, User};

/// `{challengeId, expiresAt, redactedPhone, devCode}` (spec §4.5
/// `startPhoneLogin`). `dev_code` is populated only outside production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLoginChallenge {
    pub challenge_id: String,
    pub expires_at: DateTime<Utc>,
    pub redacted_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_code: Option<String>,
}

/// Returned by every login path (`verifyPhoneCode`, `loginWithOAuth`,
/// `loginWithEmailPassword`) once an identity has been resolved or created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderLoginResult {
    pub user: User,
    pub identity: Identity,
    pub session: SessionPair,
    /// True when a new user was created, a new identity was appended, or a
    /// missing contact field (`email`/`primaryPhone`) was backfilled
    /// (spec §4.5 `upsertProviderIdentity`).
    pub linked: bool,
}

/// `{accessToken, refreshToken, tokenType: "Bearer", expiresInMs}` (spec §6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in_ms: i64,
}

impl SessionPair {
    pub fn new(access_token: String, refresh_token: String, expires_in_ms: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernameUnavailableReason {
    Invalid,
    Taken,
    Reserved,
}

/// `{requested, normalized, available, reason?, reservedUntil?}` (spec §4.5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameAvailability {
    pub requested: String,
    pub normalized: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UsernameUnavailableReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_until: Option<DateTime<Utc>>,
}

/// `{uploadId, objectKey, uploadUrl, expiresAt, requiredHeaders}` (spec §4.5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadPlan {
    pub upload_id: String,
    pub object_key: String,
    pub upload_url: String,
    pub expires_at: DateTime<Utc>,
    pub required_headers: std::collections::HashMap<String, String>,
}

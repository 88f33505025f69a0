//! `RefreshTokenRecord` (spec §3): single-use, consumed and rotated on refresh.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    pub refresh_token: String,
    pub user_id: Uuid,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
}

impl RefreshTokenRecord {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }
}

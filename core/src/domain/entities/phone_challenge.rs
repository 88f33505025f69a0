//! `PhoneChallenge` (spec §3): created by OTP send, destroyed on successful
//! verify or expiry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneChallenge {
    pub challenge_id: String,
    pub phone: String,
    /// `H(code ∥ salt)` — hex-encoded SHA-256.
    pub code_hash: String,
    pub expires_at_ms: i64,
}

impl PhoneChallenge {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }
}

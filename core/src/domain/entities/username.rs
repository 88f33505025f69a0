//! `UsernameReservation` (spec §3): a short-lived exclusive hold on a
//! normalized username, TTL 5 minutes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameReservation {
    pub normalized: String,
    pub user_id: Uuid,
    pub expires_at_ms: i64,
}

impl UsernameReservation {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }
}

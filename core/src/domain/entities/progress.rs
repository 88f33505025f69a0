//! `UserProgress` (spec §3): `version` gives a per-`(user, group, mediaItem)`
//! total order (spec §5).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: Uuid,
    pub group_id: String,
    pub media_item_id: Uuid,
    pub highest_unit_order: i64,
    pub highest_unit_id: Option<Uuid>,
    pub version: u64,
    pub updated_at: DateTime<Utc>,
}

impl UserProgress {
    /// A fresh, never-read progress record (spec §4.6
    /// "Load or lazily create a zero-progress record for the user").
    pub fn zero(user_id: Uuid, group_id: String, media_item_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            group_id,
            media_item_id,
            highest_unit_order: 0,
            highest_unit_id: None,
            version: 0,
            updated_at: now,
        }
    }
}

//! `GroupMediaSelection` (spec §3): at most one active selection per group.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMediaSelection {
    pub group_id: String,
    pub media_item_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

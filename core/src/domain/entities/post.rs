//! `Post` (spec §3): `requiredUnit` gates `body` visibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub group_id: String,
    pub media_item_id: Uuid,
    pub author_id: Uuid,
    pub preview_text: String,
    pub body: String,
    pub required_unit_id: Uuid,
    pub created_at: DateTime<Utc>,
}

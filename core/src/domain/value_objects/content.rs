//! Response shapes for the content service (spec §4.6).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single post as rendered for one viewer, gated by their progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub preview_text: String,
    /// Present only when `unlocked` (spec §4.6).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub unlocked: bool,
    pub required_unit_id: Uuid,
    pub unit_reference: String,
    /// Enabled iff the post is currently locked (spec §4.6).
    pub mark_as_read_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub group_id: String,
    pub media_item_id: Uuid,
    pub highest_unit_order: i64,
    pub posts: Vec<FeedPost>,
}

/// Result of `markAsRead` (spec §4.6). An idempotent no-op call returns an
/// empty `token` and `expiresAt = now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkProgressResult {
    pub version: u64,
    pub highest_unit_order: i64,
    /// Newly unlocked post IDs; empty on the idempotent no-op path.
    pub unlocked_post_ids: Vec<Uuid>,
    pub rollback_token: String,
    pub rollback_expires_at: DateTime<Utc>,
}

/// Result of `rollbackProgress` (spec §4.6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackResult {
    pub version: u64,
    pub highest_unit_order: i64,
    /// Post IDs that became locked again as a result of the rollback.
    pub relocked_post_ids: Vec<Uuid>,
}

//! `ProgressAuditEvent` (spec §3): immutable record of each progress
//! transition, with flat ID cross-links rather than pointers (spec §9).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressAction {
    MarkRead,
    Rollback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressAuditEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub group_id: String,
    pub media_item_id: Uuid,
    pub action: ProgressAction,
    pub previous_unit_order: i64,
    pub previous_unit_id: Option<Uuid>,
    pub next_unit_order: i64,
    pub next_unit_id: Option<Uuid>,
    pub previous_version: u64,
    pub next_version: u64,
    /// Present only on forward (`MarkRead`) events: the one-shot handle
    /// that permits undoing this change within the rollback window.
    pub rollback_token: Option<String>,
    /// Set on a `MarkRead` event once it has been rolled back.
    pub rolled_back_by_audit_id: Option<Uuid>,
    /// Set on a `Rollback` event: the forward event it undid.
    pub rollback_of_audit_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

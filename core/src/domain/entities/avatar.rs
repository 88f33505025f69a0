//! `AvatarUpload` (spec §3): consumed on finalize, TTL 10 minutes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-supplied metadata describing the file the client intends to upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub bytes: u64,
    pub width: u32,
    pub height: u32,
}

/// Metadata the client reports back at finalize time, checked against the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarFinalizeMeta {
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUpload {
    pub upload_id: String,
    pub object_key: String,
    pub user_id: Uuid,
    pub expires_at_ms: i64,
    pub request: AvatarUploadRequest,
}

impl AvatarUpload {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }
}

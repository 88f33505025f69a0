use ns_core::domain::entities::MediaKind;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaItemRequest {
    pub kind: MediaKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaUnitRequest {
    pub media_item_id: Uuid,
    pub release_order: i64,
    #[serde(default)]
    pub chapter: Option<i64>,
    #[serde(default)]
    pub season: Option<i64>,
    #[serde(default)]
    pub episode: Option<i64>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectGroupMediaRequest {
    pub group_id: String,
    pub media_item_id: Uuid,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub group_id: String,
    pub media_item_id: Uuid,
    pub author_id: Uuid,
    pub preview_text: String,
    pub body: String,
    pub required_unit_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub group_id: String,
    pub media_item_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkProgressRequest {
    pub group_id: String,
    pub media_item_id: Uuid,
    pub unit_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackProgressRequest {
    pub rollback_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAuditQuery {
    pub group_id: String,
    pub media_item_id: Uuid,
}

//! Post repository trait (spec §3 `Post`).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Post;
use crate::errors::DomainError;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn save(&self, post: Post) -> Result<Post, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// All posts in a group/media pair, newest first (spec §4.6 feed order).
    async fn list_by_group_media(
        &self,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Vec<Post>, DomainError>;
}

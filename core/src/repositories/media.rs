//! Media item repository trait (spec §3 `MediaItem`).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::MediaItem;
use crate::errors::DomainError;

#[async_trait]
pub trait MediaItemRepository: Send + Sync {
    async fn save(&self, item: MediaItem) -> Result<MediaItem, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaItem>, DomainError>;
}

//! Media unit repository trait (spec §3 `MediaUnit`).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::MediaUnit;
use crate::errors::DomainError;

#[async_trait]
pub trait MediaUnitRepository: Send + Sync {
    async fn save(&self, unit: MediaUnit) -> Result<MediaUnit, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaUnit>, DomainError>;

    async fn list_by_media_item(&self, media_item_id: Uuid) -> Result<Vec<MediaUnit>, DomainError>;
}

//! User progress repository trait (spec §3, §4.6 `UserProgress`).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::UserProgress;
use crate::errors::DomainError;

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn find(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Option<UserProgress>, DomainError>;

    async fn save(&self, progress: UserProgress) -> Result<UserProgress, DomainError>;
}

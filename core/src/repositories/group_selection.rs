//! Group media selection repository trait (spec §3, §4.6 atomic
//! activate/deactivate within one group).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::GroupMediaSelection;
use crate::errors::DomainError;

#[async_trait]
pub trait GroupSelectionRepository: Send + Sync {
    async fn find_active(
        &self,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Option<GroupMediaSelection>, DomainError>;

    /// Insert `selection`; when `selection.is_active`, any other active
    /// selection in the same group is deactivated in the same call (spec
    /// §4.6: "must deactivate the previously active selection ... in one
    /// atomic update").
    async fn save(
        &self,
        selection: GroupMediaSelection,
    ) -> Result<GroupMediaSelection, DomainError>;
}

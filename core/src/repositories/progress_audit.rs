//! Progress audit trail repository trait (spec §4.6, §9: flat ID
//! cross-links between forward/rollback events, resolved through this map).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::ProgressAuditEvent;
use crate::errors::DomainError;

#[async_trait]
pub trait ProgressAuditRepository: Send + Sync {
    async fn append(&self, event: ProgressAuditEvent) -> Result<(), DomainError>;

    async fn update(&self, event: ProgressAuditEvent) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProgressAuditEvent>, DomainError>;

    /// Finds the forward event this rollback token was issued for, if any
    /// and if it still belongs to `user_id`.
    async fn find_by_rollback_token(
        &self,
        user_id: Uuid,
        rollback_token: &str,
    ) -> Result<Option<ProgressAuditEvent>, DomainError>;

    /// Ascending by `created_at` (spec §4.6 `getProgressAuditTrail`).
    async fn list(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Vec<ProgressAuditEvent>, DomainError>;
}

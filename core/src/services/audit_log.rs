//! Audit log collaborator trait (spec §4.4).

use async_trait::async_trait;

use crate::domain::entities::AuditEvent;
use crate::errors::DomainError;

/// A bounded ring of structured audit events, independent of `tracing`
/// output. Capacity and eviction policy are an implementation detail of the
/// backing store (spec: capacity 1000, drop oldest on overflow).
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn record(&self, event: AuditEvent) -> Result<(), DomainError>;

    /// Most recent events first, oldest last, capped at `limit`.
    async fn recent(&self, limit: usize) -> Result<Vec<AuditEvent>, DomainError>;
}

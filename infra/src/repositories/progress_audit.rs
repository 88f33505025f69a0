//! `ProgressAuditRepository` over the encrypted KV store (spec §4.6, §6
//! `content:progressAudit`).

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::ProgressAuditEvent;
use ns_core::errors::DomainError;
use ns_core::repositories::ProgressAuditRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "content:progressAudit:";

fn key(id: Uuid) -> String {
    format!("{PREFIX}{id}")
}

pub struct KvProgressAuditRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvProgressAuditRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }

    async fn all(&self) -> Result<Vec<ProgressAuditEvent>, DomainError> {
        let events: Vec<(String, ProgressAuditEvent)> = self.store.scan_prefix_json(PREFIX).await?;
        Ok(events.into_iter().map(|(_, event)| event).collect())
    }
}

#[async_trait]
impl ProgressAuditRepository for KvProgressAuditRepository {
    async fn append(&self, event: ProgressAuditEvent) -> Result<(), DomainError> {
        self.store.put_json(&key(event.id), &event).await
    }

    async fn update(&self, event: ProgressAuditEvent) -> Result<(), DomainError> {
        self.store.put_json(&key(event.id), &event).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProgressAuditEvent>, DomainError> {
        self.store.get_json(&key(id)).await
    }

    async fn find_by_rollback_token(
        &self,
        user_id: Uuid,
        rollback_token: &str,
    ) -> Result<Option<ProgressAuditEvent>, DomainError> {
        Ok(self.all().await?.into_iter().find(|event| {
            event.user_id == user_id && event.rollback_token.as_deref() == Some(rollback_token)
        }))
    }

    async fn list(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Vec<ProgressAuditEvent>, DomainError> {
        let mut events: Vec<ProgressAuditEvent> = self
            .all()
            .await?
            .into_iter()
            .filter(|event| {
                event.user_id == user_id
                    && event.group_id == group_id
                    && event.media_item_id == media_item_id
            })
            .collect();
        events.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvBackend;
    use chrono::{Duration, Utc};
    use ns_core::domain::entities::ProgressAction;

    fn event(
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
        created_at: chrono::DateTime<Utc>,
        rollback_token: Option<&str>,
    ) -> ProgressAuditEvent {
        ProgressAuditEvent {
            id: Uuid::new_v4(),
            user_id,
            group_id: group_id.to_string(),
            media_item_id,
            action: ProgressAction::MarkRead,
            previous_unit_order: 0,
            previous_unit_id: None,
            next_unit_order: 1,
            next_unit_id: Some(Uuid::new_v4()),
            previous_version: 0,
            next_version: 1,
            rollback_token: rollback_token.map(|t| t.to_string()),
            rolled_back_by_audit_id: None,
            rollback_of_audit_id: None,
            created_at,
        }
    }

    #[tokio::test]
    async fn list_is_ascending_by_created_at_and_scoped_to_the_triple() {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        let repo = KvProgressAuditRepository::new(store);

        let user_id = Uuid::new_v4();
        let media_item_id = Uuid::new_v4();
        let now = Utc::now();
        let first = event(user_id, "group-1", media_item_id, now - Duration::seconds(5), None);
        let second = event(user_id, "group-1", media_item_id, now, None);
        repo.append(second.clone()).await.unwrap();
        repo.append(first.clone()).await.unwrap();
        repo.append(event(Uuid::new_v4(), "group-1", media_item_id, now, None))
            .await
            .unwrap();

        let trail = repo.list(user_id, "group-1", media_item_id).await.unwrap();
        assert_eq!(trail, vec![first, second]);
    }

    #[tokio::test]
    async fn find_by_rollback_token_is_scoped_to_the_owning_user() {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        let repo = KvProgressAuditRepository::new(store);

        let user_id = Uuid::new_v4();
        let media_item_id = Uuid::new_v4();
        let forward = event(user_id, "group-1", media_item_id, Utc::now(), Some("tok-1"));
        repo.append(forward.clone()).await.unwrap();

        assert_eq!(
            repo.find_by_rollback_token(user_id, "tok-1").await.unwrap(),
            Some(forward)
        );
        assert_eq!(
            repo.find_by_rollback_token(Uuid::new_v4(), "tok-1").await.unwrap(),
            None
        );
    }
}

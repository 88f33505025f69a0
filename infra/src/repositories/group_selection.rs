//! `GroupSelectionRepository` over the encrypted KV store (spec §3, §4.6,
//! §6 `content:selections`). One record per `(group_id, media_item_id)`.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::GroupMediaSelection;
use ns_core::errors::DomainError;
use ns_core::repositories::GroupSelectionRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "content:selections:";

fn key(group_id: &str, media_item_id: Uuid) -> String {
    format!("{PREFIX}{group_id}:{media_item_id}")
}

fn group_prefix(group_id: &str) -> String {
    format!("{PREFIX}{group_id}:")
}

pub struct KvGroupSelectionRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvGroupSelectionRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GroupSelectionRepository for KvGroupSelectionRepository {
    async fn find_active(
        &self,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Option<GroupMediaSelection>, DomainError> {
        Ok(self
            .store
            .get_json::<GroupMediaSelection>(&key(group_id, media_item_id))
            .await?
            .filter(|selection| selection.is_active))
    }

    /// Deactivates every other active selection in the same group before
    /// writing the new one (spec §4.6: one atomic-looking update, coarse
    /// locking upstream makes this call effectively atomic).
    async fn save(
        &self,
        selection: GroupMediaSelection,
    ) -> Result<GroupMediaSelection, DomainError> {
        if selection.is_active {
            let siblings: Vec<(String, GroupMediaSelection)> = self
                .store
                .scan_prefix_json(&group_prefix(&selection.group_id))
                .await?;
            for (sibling_key, mut sibling) in siblings {
                if sibling.media_item_id != selection.media_item_id && sibling.is_active {
                    sibling.is_active = false;
                    self.store.put_json(&sibling_key, &sibling).await?;
                }
            }
        }
        self.store
            .put_json(&key(&selection.group_id, selection.media_item_id), &selection)
            .await?;
        Ok(selection)
    }
}

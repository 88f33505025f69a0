//! `ProgressRepository` over the encrypted KV store (spec §6
//! `content:progress`). One record per `(user_id, group_id, media_item_id)`.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::UserProgress;
use ns_core::errors::DomainError;
use ns_core::repositories::ProgressRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "content:progress:";

fn key(user_id: Uuid, group_id: &str, media_item_id: Uuid) -> String {
    format!("{PREFIX}{user_id}:{group_id}:{media_item_id}")
}

pub struct KvProgressRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvProgressRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProgressRepository for KvProgressRepository {
    async fn find(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Option<UserProgress>, DomainError> {
        self.store.get_json(&key(user_id, group_id, media_item_id)).await
    }

    async fn save(&self, progress: UserProgress) -> Result<UserProgress, DomainError> {
        self.store
            .put_json(
                &key(progress.user_id, &progress.group_id, progress.media_item_id),
                &progress,
            )
            .await?;
        Ok(progress)
    }
}

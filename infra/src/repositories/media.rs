//! `MediaItemRepository` over the encrypted KV store (spec §6
//! `content:mediaItems`).

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::MediaItem;
use ns_core::errors::DomainError;
use ns_core::repositories::MediaItemRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "content:mediaItems:";

fn key(id: Uuid) -> String {
    format!("{PREFIX}{id}")
}

pub struct KvMediaItemRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvMediaItemRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MediaItemRepository for KvMediaItemRepository {
    async fn save(&self, item: MediaItem) -> Result<MediaItem, DomainError> {
        self.store.put_json(&key(item.id), &item).await?;
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaItem>, DomainError> {
        self.store.get_json(&key(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvBackend;
    use chrono::Utc;
    use ns_core::domain::entities::MediaKind;

    #[tokio::test]
    async fn saved_item_is_found_by_id() {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        let repo = KvMediaItemRepository::new(store);

        let now = Utc::now();
        let item = MediaItem {
            id: Uuid::new_v4(),
            kind: MediaKind::Book,
            title: "The Hollow Tide".to_string(),
            description: None,
            author: Some("R. Voss".to_string()),
            metadata: None,
            created_at: now,
            updated_at: now,
        };
        let id = item.id;
        repo.save(item.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(item));
    }
}

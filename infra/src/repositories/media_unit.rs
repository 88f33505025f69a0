//! `MediaUnitRepository` over the encrypted KV store (spec §6
//! `content:mediaUnits`).

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::MediaUnit;
use ns_core::errors::DomainError;
use ns_core::repositories::MediaUnitRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "content:mediaUnits:";

fn key(id: Uuid) -> String {
    format!("{PREFIX}{id}")
}

pub struct KvMediaUnitRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvMediaUnitRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MediaUnitRepository for KvMediaUnitRepository {
    async fn save(&self, unit: MediaUnit) -> Result<MediaUnit, DomainError> {
        self.store.put_json(&key(unit.id), &unit).await?;
        Ok(unit)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaUnit>, DomainError> {
        self.store.get_json(&key(id)).await
    }

    async fn list_by_media_item(&self, media_item_id: Uuid) -> Result<Vec<MediaUnit>, DomainError> {
        let units: Vec<(String, MediaUnit)> = self.store.scan_prefix_json(PREFIX).await?;
        Ok(units
            .into_iter()
            .map(|(_, unit)| unit)
            .filter(|unit| unit.media_item_id == media_item_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvBackend;

    fn unit(media_item_id: Uuid, release_order: i64) -> MediaUnit {
        MediaUnit {
            id: Uuid::new_v4(),
            media_item_id,
            release_order,
            chapter: Some(release_order),
            season: None,
            episode: None,
            label: None,
        }
    }

    #[tokio::test]
    async fn lists_only_units_for_the_requested_media_item() {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        let repo = KvMediaUnitRepository::new(store);

        let book_a = Uuid::new_v4();
        let book_b = Uuid::new_v4();
        repo.save(unit(book_a, 1)).await.unwrap();
        repo.save(unit(book_a, 2)).await.unwrap();
        repo.save(unit(book_b, 1)).await.unwrap();

        let units = repo.list_by_media_item(book_a).await.unwrap();
        assert_eq!(units.len(), 2);
    }
}

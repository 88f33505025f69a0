//! `RefreshTokenRepository` over the encrypted KV store (spec §6
//! `auth:refreshTokens`).

use std::sync::Arc;

use async_trait::async_trait;

use ns_core::domain::entities::RefreshTokenRecord;
use ns_core::errors::DomainError;
use ns_core::repositories::RefreshTokenRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "auth:refreshTokens:";

fn key(refresh_token: &str) -> String {
    format!("{PREFIX}{refresh_token}")
}

pub struct KvRefreshTokenRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvRefreshTokenRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RefreshTokenRepository for KvRefreshTokenRepository {
    async fn save(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        self.store
            .put_json(&key(&record.refresh_token), &record)
            .await
    }

    async fn find(&self, refresh_token: &str) -> Result<Option<RefreshTokenRecord>, DomainError> {
        self.store.get_json(&key(refresh_token)).await
    }

    async fn delete(&self, refresh_token: &str) -> Result<(), DomainError> {
        self.store.delete(&key(refresh_token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvBackend;
    use uuid::Uuid;

    fn repo() -> KvRefreshTokenRepository {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        KvRefreshTokenRepository::new(store)
    }

    #[tokio::test]
    async fn single_use_token_is_deleted_after_consumption() {
        let repo = repo();
        let record = RefreshTokenRecord {
            refresh_token: "rt-1".to_string(),
            user_id: Uuid::new_v4(),
            issued_at_ms: 0,
            expires_at_ms: 1000,
        };
        repo.save(record.clone()).await.unwrap();
        assert_eq!(repo.find("rt-1").await.unwrap(), Some(record));

        repo.delete("rt-1").await.unwrap();
        assert_eq!(repo.find("rt-1").await.unwrap(), None);
    }
}

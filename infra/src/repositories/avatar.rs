//! `AvatarUploadRepository` over the encrypted KV store (spec §6
//! `auth:avatar:uploads`).

use std::sync::Arc;

use async_trait::async_trait;

use ns_core::domain::entities::AvatarUpload;
use ns_core::errors::DomainError;
use ns_core::repositories::AvatarUploadRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "auth:avatar:uploads:";

fn key(upload_id: &str) -> String {
    format!("{PREFIX}{upload_id}")
}

pub struct KvAvatarUploadRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvAvatarUploadRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AvatarUploadRepository for KvAvatarUploadRepository {
    async fn save(&self, upload: AvatarUpload) -> Result<(), DomainError> {
        self.store.put_json(&key(&upload.upload_id), &upload).await
    }

    async fn find(&self, upload_id: &str) -> Result<Option<AvatarUpload>, DomainError> {
        self.store.get_json(&key(upload_id)).await
    }

    async fn delete(&self, upload_id: &str) -> Result<(), DomainError> {
        self.store.delete(&key(upload_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvBackend;
    use ns_core::domain::entities::AvatarUploadRequest;
    use uuid::Uuid;

    fn repo() -> KvAvatarUploadRepository {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        KvAvatarUploadRepository::new(store)
    }

    #[tokio::test]
    async fn save_then_find_then_delete() {
        let repo = repo();
        let upload = AvatarUpload {
            upload_id: "up-1".to_string(),
            object_key: "avatars/up-1".to_string(),
            user_id: Uuid::new_v4(),
            expires_at_ms: 1000,
            request: AvatarUploadRequest {
                file_name: "me.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: 2048,
                width: 512,
                height: 512,
            },
        };
        repo.save(upload.clone()).await.unwrap();
        assert_eq!(repo.find("up-1").await.unwrap(), Some(upload));

        repo.delete("up-1").await.unwrap();
        assert_eq!(repo.find("up-1").await.unwrap(), None);
    }
}

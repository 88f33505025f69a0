//! Secure token store (spec §4.2): per-user slot holding that user's
//! current refresh token.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::errors::DomainResult;
use ns_core::services::SecureTokenStore;

use crate::kv::EncryptedKvStore;

fn slot_key(user_id: Uuid) -> String {
    format!("auth:secureSlot:{user_id}")
}

/// Backs each user's refresh-token slot with the encrypted KV store, so the
/// value at rest is ciphertext like everything else the auth service
/// persists (spec §4.2 requires the platform-appropriate secure storage;
/// the encrypted adapter is the server-side analogue of that guarantee).
/// Keyed by user id so one process can safely hold many callers' slots at
/// once (spec §5 concurrency).
pub struct KvSecureTokenStore {
    store: Arc<EncryptedKvStore>,
}

impl KvSecureTokenStore {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SecureTokenStore for KvSecureTokenStore {
    async fn set(&self, user_id: Uuid, refresh_token: &str) -> DomainResult<()> {
        self.store
            .put_json(&slot_key(user_id), &refresh_token.to_string())
            .await
    }

    async fn get(&self, user_id: Uuid) -> DomainResult<Option<String>> {
        self.store.get_json(&slot_key(user_id)).await
    }

    async fn clear(&self, user_id: Uuid) -> DomainResult<()> {
        self.store.delete(&slot_key(user_id)).await
    }
}

//! `UserRepository` over the encrypted KV store (spec §6 `auth:users`).
//!
//! The backend has no secondary index, so the three lookup-by-claim methods
//! scan the `auth:users:` prefix and filter in memory. Fine for the process-
//! local store this crate ships; a real deployment would add dedicated
//! index entries the way `UsernameRepository` already does for usernames.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::{IdentityProvider, User};
use ns_core::errors::DomainError;
use ns_core::repositories::UserRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "auth:users:";

fn key(id: Uuid) -> String {
    format!("{PREFIX}{id}")
}

pub struct KvUserRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvUserRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }

    async fn find_matching(
        &self,
        predicate: impl Fn(&User) -> bool,
    ) -> Result<Option<User>, DomainError> {
        let users: Vec<(String, User)> = self.store.scan_prefix_json(PREFIX).await?;
        Ok(users
            .into_iter()
            .map(|(_, user)| user)
            .find(|user| predicate(user)))
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.store.get_json(&key(id)).await
    }

    async fn find_by_identity(
        &self,
        provider: IdentityProvider,
        subject: &str,
    ) -> Result<Option<User>, DomainError> {
        self.find_matching(|user| user.has_identity(provider, subject))
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_matching(|user| user.email.as_deref() == Some(email))
            .await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        self.find_matching(|user| user.primary_phone.as_deref() == Some(phone))
            .await
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        self.store.put_json(&key(user.id), &user).await?;
        Ok(user)
    }
}

//! `PhoneChallengeRepository` over the encrypted KV store (spec §6
//! `auth:phone:challenges`).

use std::sync::Arc;

use async_trait::async_trait;

use ns_core::domain::entities::PhoneChallenge;
use ns_core::errors::DomainError;
use ns_core::repositories::PhoneChallengeRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "auth:phone:challenges:";

fn key(challenge_id: &str) -> String {
    format!("{PREFIX}{challenge_id}")
}

pub struct KvPhoneChallengeRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvPhoneChallengeRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PhoneChallengeRepository for KvPhoneChallengeRepository {
    async fn save(&self, challenge: PhoneChallenge) -> Result<(), DomainError> {
        self.store
            .put_json(&key(&challenge.challenge_id), &challenge)
            .await
    }

    async fn find(&self, challenge_id: &str) -> Result<Option<PhoneChallenge>, DomainError> {
        self.store.get_json(&key(challenge_id)).await
    }

    async fn delete(&self, challenge_id: &str) -> Result<(), DomainError> {
        self.store.delete(&key(challenge_id)).await
    }
}

//! `UsernameRepository` over the encrypted KV store (spec §4.5, §6
//! `auth:username:index`, `auth:username:reservations`).

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::UsernameReservation;
use ns_core::errors::DomainError;
use ns_core::repositories::UsernameRepository;
use ns_shared::time::Clock;

use crate::kv::EncryptedKvStore;

const INDEX_PREFIX: &str = "auth:username:index:";
const RESERVATION_PREFIX: &str = "auth:username:reservations:";

fn index_key(normalized: &str) -> String {
    format!("{INDEX_PREFIX}{normalized}")
}

fn reservation_key(normalized: &str) -> String {
    format!("{RESERVATION_PREFIX}{normalized}")
}

pub struct KvUsernameRepository {
    store: Arc<EncryptedKvStore>,
    clock: Arc<dyn Clock>,
}

impl KvUsernameRepository {
    pub fn new(store: Arc<EncryptedKvStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl UsernameRepository for KvUsernameRepository {
    async fn find_owner(&self, normalized: &str) -> Result<Option<Uuid>, DomainError> {
        self.store.get_json(&index_key(normalized)).await
    }

    async fn commit(
        &self,
        normalized: &str,
        user_id: Uuid,
        previous: Option<&str>,
    ) -> Result<(), DomainError> {
        if let Some(previous) = previous {
            if previous != normalized {
                self.store.delete(&index_key(previous)).await?;
            }
        }
        self.store.put_json(&index_key(normalized), &user_id).await?;
        self.release_reservation(normalized).await
    }

    /// Reservations older than their TTL are swept lazily on every read
    /// (spec §4.5): an expired reservation is deleted and reported as
    /// `None` rather than returned stale.
    async fn find_reservation(
        &self,
        normalized: &str,
    ) -> Result<Option<UsernameReservation>, DomainError> {
        let key = reservation_key(normalized);
        match self.store.get_json::<UsernameReservation>(&key).await? {
            None => Ok(None),
            Some(reservation) => {
                if reservation.is_expired(self.clock.now_ms()) {
                    self.store.delete(&key).await?;
                    Ok(None)
                } else {
                    Ok(Some(reservation))
                }
            }
        }
    }

    async fn save_reservation(
        &self,
        reservation: UsernameReservation,
    ) -> Result<(), DomainError> {
        self.store
            .put_json(&reservation_key(&reservation.normalized), &reservation)
            .await
    }

    async fn release_reservation(&self, normalized: &str) -> Result<(), DomainError> {
        self.store.delete(&reservation_key(normalized)).await
    }
}

//! Username index and reservation repository trait (spec §4.5, §6
//! `auth:username:index`, `auth:username:reservations`).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::UsernameReservation;
use crate::errors::DomainError;

#[async_trait]
pub trait UsernameRepository: Send + Sync {
    /// The user that currently owns `normalized` in the committed index, if any.
    async fn find_owner(&self, normalized: &str) -> Result<Option<Uuid>, DomainError>;

    /// Commit `normalized` to `user_id` in the index, releasing whatever the
    /// caller previously held (if `previous` is `Some`) in the same call.
    async fn commit(
        &self,
        normalized: &str,
        user_id: Uuid,
        previous: Option<&str>,
    ) -> Result<(), DomainError>;

    async fn find_reservation(
        &self,
        normalized: &str,
    ) -> Result<Option<UsernameReservation>, DomainError>;

    async fn save_reservation(
        &self,
        reservation: UsernameReservation,
    ) -> Result<(), DomainError>;

    async fn release_reservation(&self, normalized: &str) -> Result<(), DomainError>;
}

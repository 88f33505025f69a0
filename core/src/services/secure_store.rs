//! Secure token store collaborator trait (spec §4.2): a slot for the
//! caller's current refresh token, scoped per user so one session can never
//! read or clear another's (spec §5 concurrency).

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

#[async_trait]
pub trait SecureTokenStore: Send + Sync {
    async fn set(&self, user_id: Uuid, refresh_token: &str) -> Result<(), DomainError>;

    async fn get(&self, user_id: Uuid) -> Result<Option<String>, DomainError>;

    async fn clear(&self, user_id: Uuid) -> Result<(), DomainError>;
}

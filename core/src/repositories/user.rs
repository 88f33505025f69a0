//! User repository trait (spec §3, §6 `auth:users`).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{IdentityProvider, User};
use crate::errors::DomainError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    async fn find_by_identity(
        &self,
        provider: IdentityProvider,
        subject: &str,
    ) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Insert or overwrite a user keyed by `id`.
    async fn save(&self, user: User) -> Result<User, DomainError>;
}

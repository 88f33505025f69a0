//! Refresh token repository trait (spec §6 `auth:refreshTokens`).

use async_trait::async_trait;

use crate::domain::entities::RefreshTokenRecord;
use crate::errors::DomainError;

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn save(&self, record: RefreshTokenRecord) -> Result<(), DomainError>;

    async fn find(&self, refresh_token: &str) -> Result<Option<RefreshTokenRecord>, DomainError>;

    async fn delete(&self, refresh_token: &str) -> Result<(), DomainError>;
}

//! Phone OTP challenge repository trait (spec §6 `auth:phone:challenges`).

use async_trait::async_trait;

use crate::domain::entities::PhoneChallenge;
use crate::errors::DomainError;

#[async_trait]
pub trait PhoneChallengeRepository: Send + Sync {
    async fn save(&self, challenge: PhoneChallenge) -> Result<(), DomainError>;

    async fn find(&self, challenge_id: &str) -> Result<Option<PhoneChallenge>, DomainError>;

    async fn delete(&self, challenge_id: &str) -> Result<(), DomainError>;
}

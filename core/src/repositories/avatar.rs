//! Avatar upload plan repository trait (spec §6 `auth:avatar:uploads`).

use async_trait::async_trait;

use crate::domain::entities::AvatarUpload;
use crate::errors::DomainError;

#[async_trait]
pub trait AvatarUploadRepository: Send + Sync {
    async fn save(&self, upload: AvatarUpload) -> Result<(), DomainError>;

    async fn find(&self, upload_id: &str) -> Result<Option<AvatarUpload>, DomainError>;

    async fn delete(&self, upload_id: &str) -> Result<(), DomainError>;
}

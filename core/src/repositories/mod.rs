//! Repository trait definitions for data access abstraction. Implementations
//! live in the `infra` crate, backed by the encrypted KV adapter (spec §6).

pub mod avatar;
pub mod group_selection;
pub mod media;
pub mod media_unit;
pub mod phone_challenge;
pub mod post;
pub mod progress;
pub mod progress_audit;
pub mod refresh_token;
pub mod user;
pub mod username;

pub use avatar::AvatarUploadRepository;
pub use group_selection::GroupSelectionRepository;
pub use media::MediaItemRepository;
pub use media_unit::MediaUnitRepository;
pub use phone_challenge::PhoneChallengeRepository;
pub use post::PostRepository;
pub use progress::ProgressRepository;
pub use progress_audit::ProgressAuditRepository;
pub use refresh_token::RefreshTokenRepository;
pub use user::UserRepository;
pub use username::UsernameRepository;

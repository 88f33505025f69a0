//! KV-backed implementations of every `ns_core::repositories` trait (spec
//! §6): one encrypted entry (or entry family) per entity, under the stable
//! prefixes the spec assigns each one.

mod avatar;
mod group_selection;
mod media;
mod media_unit;
mod phone_challenge;
mod post;
mod progress;
mod progress_audit;
mod refresh_token;
mod user;
mod username;

pub use avatar::KvAvatarUploadRepository;
pub use group_selection::KvGroupSelectionRepository;
pub use media::KvMediaItemRepository;
pub use media_unit::KvMediaUnitRepository;
pub use phone_challenge::KvPhoneChallengeRepository;
pub use post::KvPostRepository;
pub use progress::KvProgressRepository;
pub use progress_audit::KvProgressAuditRepository;
pub use refresh_token::KvRefreshTokenRepository;
pub use user::KvUserRepository;
pub use username::KvUsernameRepository;

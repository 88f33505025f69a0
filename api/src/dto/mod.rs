//! Request bodies, plus the handful of response DTOs that must not
//! serialize a domain entity verbatim (`AuthUser`, `AuthSessionResponse`).
//! Everything else reuses the domain value objects (`PhoneLoginChallenge`,
//! `SessionPair`, `FeedResponse`, ...) directly — they already serialize
//! the way the HTTP surface wants (spec §6).

pub mod auth;
pub mod content;

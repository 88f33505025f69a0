//! # Infrastructure Layer
//!
//! In-process implementations of every contract `ns_core` defines: the
//! encrypted KV store (spec §4.1), repositories built on top of it (spec
//! §6), the sliding-window rate limiter and suspicion tracker (spec §4.3),
//! the bounded audit ring (spec §4.4), the secure refresh-token slot (spec
//! §4.2), and the real `Clock`/`IdProvider` (spec §2). Nothing here reaches
//! outside the process: there is no database, no cache server, and no real
//! SMS/email delivery (Non-goals, spec §1) — nospoilers persists everything
//! through one encrypted key/value boundary. `start_phone_login` returns the
//! OTP on `PhoneLoginChallenge.dev_code` outside production instead of
//! dialing a carrier.

pub mod audit_log;
pub mod clock;
pub mod kv;
pub mod rate_limiter;
pub mod repositories;
pub mod secure_store;

pub use audit_log::BoundedAuditLog;
pub use clock::{SystemClock, UuidProvider};
pub use kv::{EncryptedKvStore, InMemoryKvBackend, KvBackend};
pub use rate_limiter::{InMemoryRateLimiter, InMemorySuspicionTracker};
pub use secure_store::KvSecureTokenStore;

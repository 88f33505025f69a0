//! Rate limiting and suspicion-scoring collaborator traits (spec §4.3).
//! Implementations live in `infra`, backed by in-memory sliding-window
//! counters.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Sliding fixed-window limiter keyed by an arbitrary string (e.g.
/// `"otp_send:<phone>"`). `check` both tests and increments the bucket for
/// `key` in one call, failing with `DomainError::Defense(RateLimited)` once
/// `max_requests` is exceeded within the current window, or while a prior
/// block is still in effect.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn check(&self, key: &str, max_requests: u32) -> Result<(), DomainError>;
}

/// Tracks a rolling suspicion score per key, plus the `reason` of the most
/// recent denial and when it was observed — the full `{key, reason, score,
/// lastObservedAt}` record spec §4.3 calls for. Every denial or mismatch
/// the caller observes should be recorded; the auth service consults
/// `score` to decide whether to tag an audit event `suspicious=true`
/// (spec §4.3). Scores are never decayed.
#[async_trait]
pub trait SuspicionTracker: Send + Sync {
    async fn record_denial(&self, key: &str, reason: &str) -> Result<u32, DomainError>;

    async fn score(&self, key: &str) -> Result<u32, DomainError>;
}

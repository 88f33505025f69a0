//! Sliding-window rate limiter and suspicion tracker (spec §4.3).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use ns_core::errors::{DefenseError, DomainError};
use ns_core::services::{RateLimiter, SuspicionTracker};
use ns_shared::time::Clock;

struct Bucket {
    count: u32,
    window_started_at_ms: i64,
    blocked_until_ms: Option<i64>,
}

/// Process-local sliding fixed-window limiter (spec §4.3): 60s windows, a
/// 5-minute block once `max_requests` is exceeded.
pub struct InMemoryRateLimiter {
    buckets: Mutex<HashMap<String, Bucket>>,
    clock: Arc<dyn Clock>,
    window_ms: i64,
    block_ms: i64,
}

impl InMemoryRateLimiter {
    pub fn new(clock: Arc<dyn Clock>, window_ms: i64, block_ms: i64) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            clock,
            window_ms,
            block_ms,
        }
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: &str, max_requests: u32) -> Result<(), DomainError> {
        let now_ms = self.clock.now_ms();
        let mut buckets = self.buckets.lock().unwrap();
        let bucket = buckets.entry(key.to_string()).or_insert(Bucket {
            count: 0,
            window_started_at_ms: now_ms,
            blocked_until_ms: None,
        });

        if let Some(blocked_until) = bucket.blocked_until_ms {
            if blocked_until > now_ms {
                return Err(DefenseError::RateLimited.into());
            }
            bucket.blocked_until_ms = None;
        }

        if now_ms - bucket.window_started_at_ms > self.window_ms {
            bucket.window_started_at_ms = now_ms;
            bucket.count = 0;
        }

        bucket.count += 1;
        if bucket.count > max_requests {
            bucket.blocked_until_ms = Some(now_ms + self.block_ms);
            return Err(DefenseError::RateLimited.into());
        }

        Ok(())
    }
}

struct SuspicionRecord {
    reason: String,
    score: u32,
    last_observed_at: DateTime<Utc>,
}

/// Tracks a rolling, never-decayed suspicion score per key (spec §4.3, spec
/// §9 open question: decay is left to future implementers).
#[derive(Default)]
pub struct InMemorySuspicionTracker {
    records: Mutex<HashMap<String, SuspicionRecord>>,
}

impl InMemorySuspicionTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SuspicionTracker for InMemorySuspicionTracker {
    async fn record_denial(&self, key: &str, reason: &str) -> Result<u32, DomainError> {
        let mut records = self.records.lock().unwrap();
        let record = records.entry(key.to_string()).or_insert(SuspicionRecord {
            reason: reason.to_string(),
            score: 0,
            last_observed_at: Utc::now(),
        });
        record.score += 1;
        record.reason = reason.to_string();
        record.last_observed_at = Utc::now();
        Ok(record.score)
    }

    async fn score(&self, key: &str) -> Result<u32, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(key)
            .map(|r| r.score)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_shared::time::fakes::FixedClock;
    use chrono::Utc;

    #[tokio::test]
    async fn fourth_call_in_window_is_rate_limited() {
        let clock = Arc::new(FixedClock::new(Utc::now()));
        let limiter = InMemoryRateLimiter::new(clock, 60_000, 5 * 60_000);

        for _ in 0..3 {
            limiter.check("otp_send:+15551234567", 3).await.unwrap();
        }
        let err = limiter.check("otp_send:+15551234567", 3).await.unwrap_err();
        assert!(matches!(err, DomainError::Defense(DefenseError::RateLimited)));
    }

    #[tokio::test]
    async fn block_lifts_once_the_window_clears() {
        let clock = Arc::new(FixedClock::new(Utc::now()));
        let limiter = InMemoryRateLimiter::new(clock.clone(), 60_000, 5 * 60_000);

        for _ in 0..4 {
            let _ = limiter.check("login:user@example.com", 3).await;
        }
        clock.advance_ms(5 * 60_000 + 1);
        limiter.check("login:user@example.com", 3).await.unwrap();
    }

    #[tokio::test]
    async fn suspicion_score_increments_and_never_resets() {
        let tracker = InMemorySuspicionTracker::new();
        assert_eq!(
            tracker
                .record_denial("otp_verify:abc", "code_mismatch")
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            tracker
                .record_denial("otp_verify:abc", "code_mismatch")
                .await
                .unwrap(),
            2
        );
        assert_eq!(tracker.score("otp_verify:abc").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn suspicion_record_keeps_the_latest_reason() {
        let tracker = InMemorySuspicionTracker::new();
        tracker
            .record_denial("login:email:user@example.com", "invalid_credentials")
            .await
            .unwrap();
        let records = tracker.records.lock().unwrap();
        let record = records.get("login:email:user@example.com").unwrap();
        assert_eq!(record.reason, "invalid_credentials");
        assert_eq!(record.score, 1);
    }
}

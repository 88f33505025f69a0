//! The injected time/ID provider (spec §2 "Time/ID provider").
//!
//! Every TTL-bounded record (OTP challenges, username reservations, avatar
//! upload plans, rollback windows, rate-limit blocks) and every opaque
//! identifier (challenge IDs, upload IDs, rollback tokens) is produced
//! through these two contracts rather than by calling `Utc::now()` or
//! `Uuid::new_v4()` directly, so tests can control both.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A source of wall-clock time, injected so services are deterministic under test.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;

    /// Current time in milliseconds since the Unix epoch, matching the
    /// `nowMs`-flavored arithmetic in spec §4.3/§4.5/§4.6.
    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// A source of fresh identifiers and opaque tokens.
pub trait IdProvider: Send + Sync {
    /// A fresh UUID, used for entity primary keys.
    fn new_id(&self) -> Uuid;

    /// A fresh opaque token suitable for challenge IDs, upload IDs, and
    /// rollback tokens: URL-safe, not guessable, not a UUID (callers must
    /// not assume token shape).
    fn new_token(&self) -> String;
}

#[cfg(any(test, feature = "test-util"))]
pub mod fakes {
    use super::*;
    use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

    /// A clock that starts at a fixed instant and only advances when told to.
    pub struct FixedClock {
        millis: AtomicI64,
    }

    impl FixedClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                millis: AtomicI64::new(start.timestamp_millis()),
            }
        }

        pub fn advance_ms(&self, delta: i64) {
            self.millis.fetch_add(delta, Ordering::SeqCst);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
                .expect("fake clock millis always valid")
        }
    }

    /// A deterministic, monotonically increasing ID provider for tests.
    pub struct SequentialIds {
        counter: AtomicU64,
    }

    impl SequentialIds {
        pub fn new() -> Self {
            Self {
                counter: AtomicU64::new(0),
            }
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdProvider for SequentialIds {
        fn new_id(&self) -> Uuid {
            let n = self.counter.fetch_add(1, Ordering::SeqCst);
            Uuid::from_u128(n as u128)
        }

        fn new_token(&self) -> String {
            let n = self.counter.fetch_add(1, Ordering::SeqCst);
            format!("test-token-{n}")
        }
    }
}

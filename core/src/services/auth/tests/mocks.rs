//! In-memory mock implementations for testing the authentication service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::{
    AuditEvent, AvatarUpload, IdentityProvider, PhoneChallenge, RefreshTokenRecord, User,
    UsernameReservation,
};
use crate::errors::DomainError;
use crate::repositories::{
    AvatarUploadRepository, PhoneChallengeRepository, RefreshTokenRepository, UserRepository,
    UsernameRepository,
};
use crate::services::{AuditLog, RateLimiter, SecureTokenStore, SuspicionTracker};

#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_identity(
        &self,
        provider: IdentityProvider,
        subject: &str,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.has_identity(provider, subject))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.primary_phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MockPhoneChallengeRepository {
    challenges: Mutex<HashMap<String, PhoneChallenge>>,
}

#[async_trait]
impl PhoneChallengeRepository for MockPhoneChallengeRepository {
    async fn save(&self, challenge: PhoneChallenge) -> Result<(), DomainError> {
        self.challenges
            .lock()
            .unwrap()
            .insert(challenge.challenge_id.clone(), challenge);
        Ok(())
    }

    async fn find(&self, challenge_id: &str) -> Result<Option<PhoneChallenge>, DomainError> {
        Ok(self.challenges.lock().unwrap().get(challenge_id).cloned())
    }

    async fn delete(&self, challenge_id: &str) -> Result<(), DomainError> {
        self.challenges.lock().unwrap().remove(challenge_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockRefreshTokenRepository {
    tokens: Mutex<HashMap<String, RefreshTokenRecord>>,
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn save(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        self.tokens
            .lock()
            .unwrap()
            .insert(record.refresh_token.clone(), record);
        Ok(())
    }

    async fn find(&self, refresh_token: &str) -> Result<Option<RefreshTokenRecord>, DomainError> {
        Ok(self.tokens.lock().unwrap().get(refresh_token).cloned())
    }

    async fn delete(&self, refresh_token: &str) -> Result<(), DomainError> {
        self.tokens.lock().unwrap().remove(refresh_token);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockUsernameRepository {
    index: Mutex<HashMap<String, Uuid>>,
    reservations: Mutex<HashMap<String, UsernameReservation>>,
}

#[async_trait]
impl UsernameRepository for MockUsernameRepository {
    async fn find_owner(&self, normalized: &str) -> Result<Option<Uuid>, DomainError> {
        Ok(self.index.lock().unwrap().get(normalized).copied())
    }

    async fn commit(
        &self,
        normalized: &str,
        user_id: Uuid,
        previous: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut index = self.index.lock().unwrap();
        if let Some(prev) = previous {
            index.remove(prev);
        }
        index.insert(normalized.to_string(), user_id);
        Ok(())
    }

    async fn find_reservation(
        &self,
        normalized: &str,
    ) -> Result<Option<UsernameReservation>, DomainError> {
        Ok(self.reservations.lock().unwrap().get(normalized).cloned())
    }

    async fn save_reservation(&self, reservation: UsernameReservation) -> Result<(), DomainError> {
        self.reservations
            .lock()
            .unwrap()
            .insert(reservation.normalized.clone(), reservation);
        Ok(())
    }

    async fn release_reservation(&self, normalized: &str) -> Result<(), DomainError> {
        self.reservations.lock().unwrap().remove(normalized);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockAvatarUploadRepository {
    uploads: Mutex<HashMap<String, AvatarUpload>>,
}

#[async_trait]
impl AvatarUploadRepository for MockAvatarUploadRepository {
    async fn save(&self, upload: AvatarUpload) -> Result<(), DomainError> {
        self.uploads
            .lock()
            .unwrap()
            .insert(upload.upload_id.clone(), upload);
        Ok(())
    }

    async fn find(&self, upload_id: &str) -> Result<Option<AvatarUpload>, DomainError> {
        Ok(self.uploads.lock().unwrap().get(upload_id).cloned())
    }

    async fn delete(&self, upload_id: &str) -> Result<(), DomainError> {
        self.uploads.lock().unwrap().remove(upload_id);
        Ok(())
    }
}

struct Bucket {
    count: u32,
    window_started_at_ms: i64,
    blocked_until_ms: Option<i64>,
}

/// A rate limiter driven by an explicit clock so tests can advance time
/// deterministically, mirroring the sliding-window policy in spec §4.3.
pub struct MockRateLimiter {
    buckets: Mutex<HashMap<String, Bucket>>,
    clock: std::sync::Arc<dyn ns_shared::time::Clock>,
    window_ms: i64,
    block_ms: i64,
}

impl MockRateLimiter {
    pub fn new(clock: std::sync::Arc<dyn ns_shared::time::Clock>) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            clock,
            window_ms: 60_000,
            block_ms: 5 * 60_000,
        }
    }
}

#[async_trait]
impl RateLimiter for MockRateLimiter {
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
                return Err(crate::errors::DefenseError::RateLimited.into());
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
            return Err(crate::errors::DefenseError::RateLimited.into());
        }

        Ok(())
    }
}

struct MockSuspicionRecord {
    #[allow(dead_code)]
    reason: String,
    score: u32,
    #[allow(dead_code)]
    last_observed_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MockSuspicionTracker {
    records: Mutex<HashMap<String, MockSuspicionRecord>>,
}

#[async_trait]
impl SuspicionTracker for MockSuspicionTracker {
    async fn record_denial(&self, key: &str, reason: &str) -> Result<u32, DomainError> {
        let mut records = self.records.lock().unwrap();
        let record = records.entry(key.to_string()).or_insert(MockSuspicionRecord {
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

#[derive(Default)]
pub struct MockAuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl AuditLog for MockAuditLog {
    async fn record(&self, event: AuditEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AuditEvent>, DomainError> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().rev().take(limit).cloned().collect())
    }
}

#[derive(Default)]
pub struct MockSecureTokenStore {
    slots: Mutex<HashMap<Uuid, String>>,
}

#[async_trait]
impl SecureTokenStore for MockSecureTokenStore {
    async fn set(&self, user_id: Uuid, refresh_token: &str) -> Result<(), DomainError> {
        self.slots
            .lock()
            .unwrap()
            .insert(user_id, refresh_token.to_string());
        Ok(())
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<String>, DomainError> {
        Ok(self.slots.lock().unwrap().get(&user_id).cloned())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), DomainError> {
        self.slots.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

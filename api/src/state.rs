//! Composition root: wires the encrypted KV store, every repository, and
//! both domain services into the `Arc`s handlers share.

use std::sync::Arc;

use ns_core::errors::DomainResult;
use ns_core::services::{AuthService, AuthServiceConfig, ContentService};
use ns_infra::kv::EncryptedKvStore;
use ns_infra::repositories::{
    KvAvatarUploadRepository, KvGroupSelectionRepository, KvMediaItemRepository,
    KvMediaUnitRepository, KvPhoneChallengeRepository, KvPostRepository, KvProgressAuditRepository,
    KvProgressRepository, KvRefreshTokenRepository, KvUserRepository, KvUsernameRepository,
};
use ns_infra::{
    BoundedAuditLog, InMemoryKvBackend, InMemoryRateLimiter, InMemorySuspicionTracker,
    KvSecureTokenStore, SystemClock, UuidProvider,
};
use ns_shared::config::AppConfig;
use ns_shared::time::{Clock, IdProvider};

pub struct AppState {
    pub auth: Arc<AuthService>,
    pub content: Arc<ContentService>,
}

impl AppState {
    /// Builds every collaborator from `config` and wires them into the two
    /// services. The KV store's encryption key comes from
    /// `NOSPOILERS_KV_SECRET`, falling back to an insecure development
    /// default the same way `AuthServiceConfig`'s JWT secret does.
    pub fn bootstrap(config: AppConfig) -> DomainResult<Self> {
        let kv_secret = std::env::var("NOSPOILERS_KV_SECRET")
            .unwrap_or_else(|_| "dev-insecure-kv-secret".to_string());
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new(&kv_secret, backend)?);

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let ids: Arc<dyn IdProvider> = Arc::new(UuidProvider);

        let users = Arc::new(KvUserRepository::new(store.clone()));
        let phone_challenges = Arc::new(KvPhoneChallengeRepository::new(store.clone()));
        let refresh_tokens = Arc::new(KvRefreshTokenRepository::new(store.clone()));
        let usernames = Arc::new(KvUsernameRepository::new(store.clone(), clock.clone()));
        let avatars = Arc::new(KvAvatarUploadRepository::new(store.clone()));

        let rate_limiter = Arc::new(InMemoryRateLimiter::new(
            clock.clone(),
            config.policy.rate_limit_window_ms,
            config.policy.rate_limit_block_ms,
        ));
        let suspicion = Arc::new(InMemorySuspicionTracker::new());
        let audit_log = Arc::new(BoundedAuditLog::new(config.policy.audit_capacity));
        let secure_store = Arc::new(KvSecureTokenStore::new(store.clone()));

        let auth_config = AuthServiceConfig {
            transport: config.transport.clone(),
            policy: config.policy.clone(),
            environment: config.environment,
            jwt_secret: std::env::var("NOSPOILERS_JWT_SECRET")
                .unwrap_or_else(|_| "dev-insecure-jwt-secret".to_string()),
        };

        let auth = Arc::new(AuthService::new(
            users,
            phone_challenges,
            refresh_tokens,
            usernames,
            avatars,
            rate_limiter,
            suspicion,
            audit_log,
            secure_store,
            clock.clone(),
            ids.clone(),
            auth_config,
        )?);

        let media_items = Arc::new(KvMediaItemRepository::new(store.clone()));
        let media_units = Arc::new(KvMediaUnitRepository::new(store.clone()));
        let selections = Arc::new(KvGroupSelectionRepository::new(store.clone()));
        let posts = Arc::new(KvPostRepository::new(store.clone()));
        let progress = Arc::new(KvProgressRepository::new(store.clone()));
        let progress_audit = Arc::new(KvProgressAuditRepository::new(store));

        let content = Arc::new(ContentService::new(
            media_items,
            media_units,
            selections,
            posts,
            progress,
            progress_audit,
            clock,
            ids,
            config.policy,
        ));

        Ok(Self { auth, content })
    }
}

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use ns_shared::config::{AuthTransportConfig, PolicyConfig};
use ns_shared::time::fakes::{FixedClock, SequentialIds};

use crate::errors::{AuthError, DefenseError, DomainError, UsernameError};
use crate::services::auth::{AuthService, AuthServiceConfig};

use super::mocks::{
    MockAuditLog, MockAvatarUploadRepository, MockPhoneChallengeRepository,
    MockRateLimiter, MockRefreshTokenRepository, MockSecureTokenStore, MockSuspicionTracker,
    MockUserRepository, MockUsernameRepository,
};

fn build_service(clock: Arc<FixedClock>) -> AuthService {
    let rate_limiter = Arc::new(MockRateLimiter::new(clock.clone()));
    AuthService::new(
        Arc::new(MockUserRepository::default()),
        Arc::new(MockPhoneChallengeRepository::default()),
        Arc::new(MockRefreshTokenRepository::default()),
        Arc::new(MockUsernameRepository::default()),
        Arc::new(MockAvatarUploadRepository::default()),
        rate_limiter,
        Arc::new(MockSuspicionTracker::default()),
        Arc::new(MockAuditLog::default()),
        Arc::new(MockSecureTokenStore::default()),
        clock,
        Arc::new(SequentialIds::new()),
        AuthServiceConfig {
            transport: AuthTransportConfig::default(),
            policy: PolicyConfig::default(),
            environment: ns_shared::config::Environment::Development,
            jwt_secret: "test-secret".to_string(),
        },
    )
    .expect("valid transport config")
}

#[tokio::test]
async fn construction_rejects_insecure_transport() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let result = AuthService::new(
        Arc::new(MockUserRepository::default()),
        Arc::new(MockPhoneChallengeRepository::default()),
        Arc::new(MockRefreshTokenRepository::default()),
        Arc::new(MockUsernameRepository::default()),
        Arc::new(MockAvatarUploadRepository::default()),
        Arc::new(MockRateLimiter::new(clock.clone())),
        Arc::new(MockSuspicionTracker::default()),
        Arc::new(MockAuditLog::default()),
        Arc::new(MockSecureTokenStore::default()),
        clock,
        Arc::new(SequentialIds::new()),
        AuthServiceConfig {
            transport: AuthTransportConfig {
                api_base_url: "http://insecure.example".to_string(),
                ..AuthTransportConfig::default()
            },
            policy: PolicyConfig::default(),
            environment: ns_shared::config::Environment::Development,
            jwt_secret: "test-secret".to_string(),
        },
    );

    assert!(matches!(
        result,
        Err(DomainError::Defense(DefenseError::InsecureTransport))
    ));
}

#[tokio::test]
async fn otp_happy_path_returns_phone_identity_and_session() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock);

    let challenge = service
        .start_phone_login("+1 (555) 123-4567")
        .await
        .expect("challenge issued");
    let code = challenge.dev_code.clone().expect("dev code present in development");

    let result = service
        .verify_phone_code(&challenge.challenge_id, &code)
        .await
        .expect("verification succeeds");

    assert_eq!(result.user.identities.len(), 1);
    assert!(!result.session.refresh_token.is_empty());
    assert_eq!(result.session.token_type, "Bearer");
}

#[tokio::test]
async fn wrong_code_fails_code_mismatch_and_never_matches() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock);

    let challenge = service.start_phone_login("+15551234567").await.unwrap();

    for _ in 0..5 {
        let err = service
            .verify_phone_code(&challenge.challenge_id, "000000")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::CodeMismatch)));
    }
}

#[tokio::test]
async fn fourth_otp_send_in_window_is_rate_limited() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock);

    for _ in 0..3 {
        service.start_phone_login("+15559876543").await.unwrap();
    }
    let err = service.start_phone_login("+15559876543").await.unwrap_err();
    assert!(matches!(err, DomainError::Defense(DefenseError::RateLimited)));
}

async fn login_new_user(service: &AuthService, phone: &str) -> Uuid {
    let challenge = service.start_phone_login(phone).await.unwrap();
    let code = challenge.dev_code.unwrap();
    service
        .verify_phone_code(&challenge.challenge_id, &code)
        .await
        .unwrap()
        .user
        .id
}

#[tokio::test]
async fn username_reservation_blocks_others_until_it_expires() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock.clone());

    let user_a = login_new_user(&service, "+15551110000").await;
    let user_b = login_new_user(&service, "+15552220000").await;

    let reserved = service.reserve_username("ada", user_a).await.unwrap();
    assert!(!reserved.available);

    let availability_for_b = service.check_username_availability("ada").await.unwrap();
    assert!(!availability_for_b.available);

    clock.advance_ms(5 * 60 * 1000 + 1);

    let availability_after_expiry = service.check_username_availability("ada").await.unwrap();
    assert!(availability_after_expiry.available);

    // Now B can actually take it.
    let committed = service
        .update_profile(user_b, None, Some("ada".to_string()), None)
        .await
        .unwrap();
    assert_eq!(committed.username_normalized.as_deref(), Some("ada"));
}

#[tokio::test]
async fn get_profile_returns_the_logged_in_user() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock);

    let user_id = login_new_user(&service, "+15556667777").await;
    let profile = service.get_profile(user_id).await.unwrap();
    assert_eq!(profile.id, user_id);

    let err = service.get_profile(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UnknownUser)));
}

#[tokio::test]
async fn logout_only_clears_the_acting_users_own_session() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock);

    let challenge_a = service.start_phone_login("+15551230000").await.unwrap();
    let code_a = challenge_a.dev_code.clone().unwrap();
    let login_a = service
        .verify_phone_code(&challenge_a.challenge_id, &code_a)
        .await
        .unwrap();

    let challenge_b = service.start_phone_login("+15554560000").await.unwrap();
    let code_b = challenge_b.dev_code.clone().unwrap();
    let login_b = service
        .verify_phone_code(&challenge_b.challenge_id, &code_b)
        .await
        .unwrap();

    service.logout(login_a.user.id).await.unwrap();

    // B's refresh token must still be live: logout is scoped to the caller,
    // not to whichever session happened to log in most recently.
    service
        .refresh_session(Some(login_b.session.refresh_token.clone()))
        .await
        .expect("user B's session survives user A's logout");
}

#[tokio::test]
async fn taken_username_cannot_be_reserved_by_another_user() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = build_service(clock);

    let owner = login_new_user(&service, "+15553330000").await;
    let challenger = login_new_user(&service, "+15554440000").await;

    service
        .update_profile(owner, None, Some("ada".to_string()), None)
        .await
        .unwrap();

    let err = service
        .reserve_username("ada", challenger)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Username(UsernameError::UsernameTaken)
    ));
}

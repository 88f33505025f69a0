//! Main authentication service implementation (spec §4.5).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::DateTime;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use ns_shared::time::{Clock, IdProvider};
use ns_shared::types::ThemePreference;
use ns_shared::utils::{display_name, email, phone, username};

use crate::domain::entities::{
    AuditAction, AuditEvent, AuditStatus, AvatarFinalizeMeta, AvatarUpload, AvatarUploadRequest,
    Identity, IdentityProvider, PhoneChallenge, RefreshTokenRecord, User, UsernameReservation,
};
use crate::domain::value_objects::{
    AvatarUploadPlan, PhoneLoginChallenge, ProviderLoginResult, SessionPair,
    UsernameAvailability, UsernameUnavailableReason,
};
use crate::errors::{
    AuthError, AvatarError, DefenseError, DomainError, DomainResult, InputError, SessionError,
    UsernameError,
};
use crate::repositories::{
    AvatarUploadRepository, PhoneChallengeRepository, RefreshTokenRepository, UserRepository,
    UsernameRepository,
};
use crate::services::{AuditLog, RateLimiter, SecureTokenStore, SuspicionTracker};

use super::config::AuthServiceConfig;

const OTP_SALT: &str = "nospoilers-otp-v1";
const PASSWORD_SALT: &str = "nospoilers-password-v1";
const AVATAR_MAX_BYTES: u64 = 5 * 1024 * 1024;
const AVATAR_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// Authentication service for managing the complete identity lifecycle:
/// OTP, OAuth, email/password login, account linking, sessions, usernames,
/// and avatar uploads.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    phone_challenges: Arc<dyn PhoneChallengeRepository>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    usernames: Arc<dyn UsernameRepository>,
    avatars: Arc<dyn AvatarUploadRepository>,
    rate_limiter: Arc<dyn RateLimiter>,
    suspicion: Arc<dyn SuspicionTracker>,
    audit_log: Arc<dyn AuditLog>,
    secure_store: Arc<dyn SecureTokenStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdProvider>,
    config: AuthServiceConfig,
    /// Coarse per-service lock covering every read-modify-write across the
    /// users/username/reservation/refresh-token maps (spec §5).
    state_lock: tokio::sync::Mutex<()>,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        phone_challenges: Arc<dyn PhoneChallengeRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        usernames: Arc<dyn UsernameRepository>,
        avatars: Arc<dyn AvatarUploadRepository>,
        rate_limiter: Arc<dyn RateLimiter>,
        suspicion: Arc<dyn SuspicionTracker>,
        audit_log: Arc<dyn AuditLog>,
        secure_store: Arc<dyn SecureTokenStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdProvider>,
        config: AuthServiceConfig,
    ) -> DomainResult<Self> {
        if !config.transport.api_base_url.starts_with("https://") {
            return Err(DefenseError::InsecureTransport.into());
        }
        if !config.transport.enforce_secure_storage {
            return Err(DefenseError::InsecureTransport.into());
        }

        Ok(Self {
            users,
            phone_challenges,
            refresh_tokens,
            usernames,
            avatars,
            rate_limiter,
            suspicion,
            audit_log,
            secure_store,
            clock,
            ids,
            config,
            state_lock: tokio::sync::Mutex::new(()),
        })
    }

    pub async fn start_phone_login(&self, phone_raw: &str) -> DomainResult<PhoneLoginChallenge> {
        let normalized = phone::normalize(phone_raw);
        if !phone::is_valid(&normalized) {
            return Err(InputError::InvalidPhone.into());
        }

        let key = format!("otp_send:{normalized}");
        self.guard_rate_limit(&key, self.config.policy.otp_send_limit, AuditAction::OtpSend)
            .await?;

        let code: u32 = rand::thread_rng().gen_range(0..1_000_000);
        let code_str = format!("{code:06}");
        let code_hash = Self::hash_with_salt(&code_str, OTP_SALT);

        let now_ms = self.clock.now_ms();
        let challenge_id = self.ids.new_id().to_string();
        let expires_at_ms = now_ms + self.config.policy.sms_code_ttl_ms;

        self.phone_challenges
            .save(PhoneChallenge {
                challenge_id: challenge_id.clone(),
                phone: normalized.clone(),
                code_hash,
                expires_at_ms,
            })
            .await?;

        let redacted_phone = phone::redact(&normalized);

        self.record_audit(
            AuditAction::OtpSend,
            AuditStatus::Success,
            None,
            Some(redacted_phone.clone()),
            HashMap::new(),
        )
        .await?;

        Ok(PhoneLoginChallenge {
            challenge_id,
            expires_at: Self::ms_to_datetime(expires_at_ms),
            redacted_phone,
            dev_code: if self.config.environment.is_production() {
                None
            } else {
                Some(code_str)
            },
        })
    }

    pub async fn verify_phone_code(
        &self,
        challenge_id: &str,
        code: &str,
    ) -> DomainResult<ProviderLoginResult> {
        let key = format!("otp_verify:{challenge_id}");
        self.guard_rate_limit(&key, self.config.policy.otp_verify_limit, AuditAction::OtpVerify)
            .await?;

        let _guard = self.state_lock.lock().await;

        let challenge = match self.phone_challenges.find(challenge_id).await? {
            Some(c) => c,
            None => {
                self.fail_login(&key, "unknown_challenge", AuditAction::OtpVerify, None, None)
                    .await?;
                return Err(AuthError::InvalidChallenge.into());
            }
        };

        let now_ms = self.clock.now_ms();
        if challenge.is_expired(now_ms) {
            self.phone_challenges.delete(challenge_id).await?;
            self.fail_login(
                &key,
                "challenge_expired",
                AuditAction::OtpVerify,
                None,
                Some(phone::redact(&challenge.phone)),
            )
            .await?;
            return Err(AuthError::Expired.into());
        }

        let code_hash = Self::hash_with_salt(code, OTP_SALT);
        if !constant_time_eq::constant_time_eq(code_hash.as_bytes(), challenge.code_hash.as_bytes())
        {
            self.fail_login(
                &key,
                "code_mismatch",
                AuditAction::OtpVerify,
                None,
                Some(phone::redact(&challenge.phone)),
            )
            .await?;
            return Err(AuthError::CodeMismatch.into());
        }

        self.phone_challenges.delete(challenge_id).await?;

        let (user, identity, linked) = self
            .upsert_provider_identity(
                IdentityProvider::Phone,
                &challenge.phone,
                true,
                None,
                Some(&challenge.phone),
            )
            .await?;

        let session = self.issue_session(user.id).await?;

        self.record_audit(
            AuditAction::OtpVerify,
            AuditStatus::Success,
            Some(user.id),
            Some(phone::redact(&challenge.phone)),
            HashMap::new(),
        )
        .await?;

        Ok(ProviderLoginResult {
            user,
            identity,
            session,
            linked,
        })
    }

    pub async fn login_with_oauth(
        &self,
        provider: IdentityProvider,
        subject: &str,
        email_hint: Option<&str>,
    ) -> DomainResult<ProviderLoginResult> {
        let subject_normalized = subject.trim().to_lowercase();
        if subject_normalized.is_empty() {
            return Err(AuthError::InvalidCredentials.into());
        }

        let key = format!("login:oauth:{subject_normalized}");
        self.guard_rate_limit(&key, self.config.policy.login_limit, AuditAction::OauthLogin)
            .await?;

        let _guard = self.state_lock.lock().await;

        let (user, identity, linked) = self
            .upsert_provider_identity(provider, &subject_normalized, true, email_hint, None)
            .await?;

        let session = self.issue_session(user.id).await?;

        self.record_audit(
            AuditAction::OauthLogin,
            AuditStatus::Success,
            Some(user.id),
            Some(subject_normalized),
            HashMap::new(),
        )
        .await?;

        Ok(ProviderLoginResult {
            user,
            identity,
            session,
            linked,
        })
    }

    pub async fn login_with_email_password(
        &self,
        email_raw: &str,
        password: &str,
    ) -> DomainResult<ProviderLoginResult> {
        let normalized_email = email::normalize(email_raw);
        if !email::is_valid(&normalized_email) {
            return Err(InputError::InvalidEmail.into());
        }

        let key = format!("login:email:{normalized_email}");
        self.guard_rate_limit(&key, self.config.policy.login_limit, AuditAction::EmailLogin)
            .await?;

        let _guard = self.state_lock.lock().await;

        let password_hash = Self::hash_with_salt(password, PASSWORD_SALT);

        let mut user = match self.users.find_by_email(&normalized_email).await? {
            Some(existing) => {
                let matches = existing
                    .password_hash
                    .as_deref()
                    .map(|stored| {
                        constant_time_eq::constant_time_eq(
                            stored.as_bytes(),
                            password_hash.as_bytes(),
                        )
                    })
                    .unwrap_or(false);
                if !matches {
                    self.fail_login(
                        &key,
                        "invalid_credentials",
                        AuditAction::EmailLogin,
                        Some(existing.id),
                        Some(normalized_email.clone()),
                    )
                    .await?;
                    return Err(AuthError::InvalidCredentials.into());
                }
                existing
            }
            None => {
                let mut created = User::new(self.ids.new_id(), self.clock.now());
                created.email = Some(normalized_email.clone());
                created.password_hash = Some(password_hash);
                created
            }
        };

        let linked = !user.has_identity(IdentityProvider::Email, &normalized_email);
        user.upsert_identity(IdentityProvider::Email, &normalized_email, true);
        user.updated_at = self.clock.now();
        let user = self.users.save(user).await?;

        let identity = user
            .identities
            .iter()
            .find(|i| i.provider == IdentityProvider::Email && i.subject == normalized_email)
            .cloned()
            .expect("identity was just upserted");

        let session = self.issue_session(user.id).await?;

        self.record_audit(
            AuditAction::EmailLogin,
            AuditStatus::Success,
            Some(user.id),
            Some(normalized_email),
            HashMap::new(),
        )
        .await?;

        Ok(ProviderLoginResult {
            user,
            identity,
            session,
            linked,
        })
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        display_name_raw: Option<String>,
        username_raw: Option<String>,
        theme_preference: Option<ThemePreference>,
    ) -> DomainResult<User> {
        let _guard = self.state_lock.lock().await;

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        if let Some(raw) = display_name_raw {
            let sanitized = display_name::sanitize(&raw);
            if sanitized.is_empty() {
                return Err(InputError::EmptyDisplayName.into());
            }
            user.display_name = Some(sanitized);
        }

        if let Some(raw) = username_raw {
            let normalized = username::normalize(&raw);
            if !username::is_valid(&normalized) {
                return Err(InputError::InvalidUsername.into());
            }

            let now_ms = self.clock.now_ms();
            if let Some(owner) = self.usernames.find_owner(&normalized).await? {
                if owner != user_id {
                    return Err(UsernameError::UsernameTaken.into());
                }
            }
            if let Some(reservation) = self.usernames.find_reservation(&normalized).await? {
                if !reservation.is_expired(now_ms) && reservation.user_id != user_id {
                    return Err(UsernameError::UsernameReserved.into());
                }
            }

            let previous = user.username_normalized.clone();
            self.usernames
                .commit(&normalized, user_id, previous.as_deref())
                .await?;
            self.usernames.release_reservation(&normalized).await?;

            user.username = Some(raw);
            user.username_normalized = Some(normalized);
        }

        if let Some(theme) = theme_preference {
            user.preferences.theme_preference = theme;
        }

        user.updated_at = self.clock.now();
        self.users.save(user).await
    }

    pub async fn check_username_availability(
        &self,
        requested: &str,
    ) -> DomainResult<UsernameAvailability> {
        let normalized = username::normalize(requested);

        if !username::is_valid(&normalized) {
            return Ok(UsernameAvailability {
                requested: requested.to_string(),
                normalized,
                available: false,
                reason: Some(UsernameUnavailableReason::Invalid),
                reserved_until: None,
            });
        }

        if self.usernames.find_owner(&normalized).await?.is_some() {
            return Ok(UsernameAvailability {
                requested: requested.to_string(),
                normalized,
                available: false,
                reason: Some(UsernameUnavailableReason::Taken),
                reserved_until: None,
            });
        }

        let now_ms = self.clock.now_ms();
        if let Some(reservation) = self.usernames.find_reservation(&normalized).await? {
            if reservation.is_expired(now_ms) {
                self.usernames.release_reservation(&normalized).await?;
            } else {
                return Ok(UsernameAvailability {
                    requested: requested.to_string(),
                    normalized,
                    available: false,
                    reason: Some(UsernameUnavailableReason::Reserved),
                    reserved_until: Some(Self::ms_to_datetime(reservation.expires_at_ms)),
                });
            }
        }

        Ok(UsernameAvailability {
            requested: requested.to_string(),
            normalized,
            available: true,
            reason: None,
            reserved_until: None,
        })
    }

    pub async fn reserve_username(
        &self,
        requested: &str,
        user_id: Uuid,
    ) -> DomainResult<UsernameAvailability> {
        let _guard = self.state_lock.lock().await;

        let availability = self.check_username_availability(requested).await?;
        if !availability.available {
            return match availability.reason {
                Some(UsernameUnavailableReason::Invalid) => Err(InputError::InvalidUsername.into()),
                Some(UsernameUnavailableReason::Taken) => Err(UsernameError::UsernameTaken.into()),
                _ => Err(UsernameError::UsernameReserved.into()),
            };
        }

        let now_ms = self.clock.now_ms();
        let expires_at_ms = now_ms + self.config.policy.username_reservation_ttl_ms;
        self.usernames
            .save_reservation(UsernameReservation {
                normalized: availability.normalized.clone(),
                user_id,
                expires_at_ms,
            })
            .await?;

        Ok(UsernameAvailability {
            requested: requested.to_string(),
            normalized: availability.normalized,
            available: false,
            reason: Some(UsernameUnavailableReason::Reserved),
            reserved_until: Some(Self::ms_to_datetime(expires_at_ms)),
        })
    }

    pub async fn create_avatar_upload_plan(
        &self,
        user_id: Uuid,
        request: AvatarUploadRequest,
    ) -> DomainResult<AvatarUploadPlan> {
        if !AVATAR_CONTENT_TYPES.contains(&request.content_type.as_str()) {
            return Err(InputError::InvalidAvatar.into());
        }
        if request.width < 128 || request.height < 128 {
            return Err(InputError::InvalidAvatar.into());
        }
        if request.bytes == 0 || request.bytes > AVATAR_MAX_BYTES {
            return Err(InputError::InvalidAvatar.into());
        }

        let upload_id = self.ids.new_token();
        let sanitized_name = Self::sanitize_file_name(&request.file_name);
        let object_key = format!("avatars/{user_id}/{upload_id}-{sanitized_name}");
        let now_ms = self.clock.now_ms();
        let expires_at_ms = now_ms + self.config.policy.avatar_upload_ttl_ms;

        let mut required_headers = HashMap::new();
        required_headers.insert("Content-Type".to_string(), request.content_type.clone());

        self.avatars
            .save(AvatarUpload {
                upload_id: upload_id.clone(),
                object_key: object_key.clone(),
                user_id,
                expires_at_ms,
                request,
            })
            .await?;

        Ok(AvatarUploadPlan {
            upload_id,
            object_key: object_key.clone(),
            upload_url: format!("{}/uploads/{}", self.config.transport.api_base_url, object_key),
            expires_at: Self::ms_to_datetime(expires_at_ms),
            required_headers,
        })
    }

    pub async fn finalize_avatar_upload(
        &self,
        user_id: Uuid,
        upload_id: &str,
        meta: AvatarFinalizeMeta,
    ) -> DomainResult<User> {
        let _guard = self.state_lock.lock().await;

        let upload = self
            .avatars
            .find(upload_id)
            .await?
            .filter(|u| u.user_id == user_id)
            .ok_or(AvatarError::UnknownUpload)?;

        let now_ms = self.clock.now_ms();
        if upload.is_expired(now_ms) {
            return Err(AvatarError::UploadExpired.into());
        }
        if meta.content_type != upload.request.content_type {
            return Err(AvatarError::UploadMimeMismatch.into());
        }

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;
        user.avatar_url = Some(format!(
            "{}/uploads/{}",
            self.config.transport.api_base_url, upload.object_key
        ));
        user.updated_at = self.clock.now();

        self.avatars.delete(upload_id).await?;
        self.users.save(user).await
    }

    pub async fn refresh_session(&self, refresh_token: Option<String>) -> DomainResult<SessionPair> {
        let _guard = self.state_lock.lock().await;

        let token = refresh_token.ok_or(SessionError::MissingRefresh)?;

        let record = self
            .refresh_tokens
            .find(&token)
            .await?
            .ok_or(SessionError::MissingRefresh)?;

        let now_ms = self.clock.now_ms();
        if record.is_expired(now_ms) {
            self.refresh_tokens.delete(&token).await?;
            return Err(SessionError::RefreshExpired.into());
        }

        self.refresh_tokens.delete(&token).await?;
        let session = self.issue_session(record.user_id).await?;

        self.record_audit(
            AuditAction::SessionRefresh,
            AuditStatus::Success,
            Some(record.user_id),
            None,
            HashMap::new(),
        )
        .await?;

        Ok(session)
    }

    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        let _guard = self.state_lock.lock().await;

        if let Some(token) = self.secure_store.get(user_id).await? {
            self.refresh_tokens.delete(&token).await?;
        }
        self.secure_store.clear(user_id).await?;

        self.record_audit(
            AuditAction::Logout,
            AuditStatus::Success,
            Some(user_id),
            None,
            HashMap::new(),
        )
        .await?;

        Ok(())
    }

    /// Fetches the current user record for a session subject (`GET /auth/me`
    /// in the HTTP surface). Not named as an operation in spec §4.5, but
    /// every caller of `verifyPhoneCode`/`loginWith*` needs a way to refetch
    /// the user after the initial login response.
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UnknownUser.into())
    }

    /// Decodes an access token issued by `issue_session`, returning the
    /// subject user id. Used by the HTTP layer to authenticate requests.
    pub fn validate_access_token(&self, token: &str) -> DomainResult<Uuid> {
        let data = jsonwebtoken::decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AuthError::InvalidCredentials)?;
        Ok(data.claims.sub)
    }

    // -- internal helpers -------------------------------------------------

    async fn issue_session(&self, user_id: Uuid) -> DomainResult<SessionPair> {
        let now_ms = self.clock.now_ms();
        let claims = AccessClaims {
            sub: user_id,
            iat: now_ms / 1000,
            exp: (now_ms + self.config.policy.access_token_ttl_ms) / 1000,
        };
        let access_token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| DomainError::Internal(format!("failed to sign access token: {e}")))?;

        let refresh_token = self.ids.new_token();
        self.refresh_tokens
            .save(RefreshTokenRecord {
                refresh_token: refresh_token.clone(),
                user_id,
                issued_at_ms: now_ms,
                expires_at_ms: now_ms + self.config.policy.refresh_token_ttl_ms,
            })
            .await?;
        self.secure_store.set(user_id, &refresh_token).await?;

        Ok(SessionPair::new(
            access_token,
            refresh_token,
            self.config.policy.access_token_ttl_ms,
        ))
    }

    /// Deterministic merge order for account linking (spec §4.5
    /// `upsertProviderIdentity`): match by identity, then email hint, then
    /// phone hint, else create. Assumes the caller holds `state_lock`.
    async fn upsert_provider_identity(
        &self,
        provider: IdentityProvider,
        subject: &str,
        verified: bool,
        email_hint: Option<&str>,
        phone_hint: Option<&str>,
    ) -> DomainResult<(User, Identity, bool)> {
        let now = self.clock.now();

        let mut linked;
        let mut user = if let Some(existing) = self.users.find_by_identity(provider, subject).await? {
            linked = false;
            existing
        } else if let Some(existing) = match email_hint {
            Some(email) => self.users.find_by_email(email).await?,
            None => None,
        } {
            linked = true;
            existing
        } else if let Some(existing) = match phone_hint {
            Some(phone) => self.users.find_by_phone(phone).await?,
            None => None,
        } {
            linked = true;
            existing
        } else {
            linked = true;
            User::new(self.ids.new_id(), now)
        };

        if !user.has_identity(provider, subject) {
            user.upsert_identity(provider, subject, verified);
            linked = true;
        }
        if let Some(email) = email_hint {
            if user.email.is_none() {
                user.email = Some(email.to_string());
                linked = true;
            }
        }
        if let Some(phone) = phone_hint {
            if user.primary_phone.is_none() {
                user.primary_phone = Some(phone.to_string());
                linked = true;
            }
        }
        user.updated_at = now;

        let user = self.users.save(user).await?;
        let identity = user
            .identities
            .iter()
            .find(|i| i.provider == provider && i.subject == subject)
            .cloned()
            .expect("identity was just upserted");

        Ok((user, identity, linked))
    }

    async fn guard_rate_limit(&self, key: &str, limit: u32, action: AuditAction) -> DomainResult<()> {
        if let Err(err) = self.rate_limiter.check(key, limit).await {
            self.fail_login(key, "rate_limit_exceeded", action, None, Some(key.to_string()))
                .await?;
            return Err(err);
        }
        Ok(())
    }

    async fn fail_login(
        &self,
        suspicion_key: &str,
        reason: &str,
        action: AuditAction,
        user_id: Option<Uuid>,
        actor_ref: Option<String>,
    ) -> DomainResult<()> {
        let score = self.suspicion.record_denial(suspicion_key, reason).await?;
        let suspicious = score >= self.config.policy.suspicion_threshold;
        self.record_audit_suspicious(action, AuditStatus::Failure, user_id, actor_ref, HashMap::new(), suspicious)
            .await
    }

    async fn record_audit(
        &self,
        action: AuditAction,
        status: AuditStatus,
        user_id: Option<Uuid>,
        actor_ref: Option<String>,
        metadata: HashMap<String, String>,
    ) -> DomainResult<()> {
        self.record_audit_suspicious(action, status, user_id, actor_ref, metadata, false)
            .await
    }

    async fn record_audit_suspicious(
        &self,
        action: AuditAction,
        status: AuditStatus,
        user_id: Option<Uuid>,
        actor_ref: Option<String>,
        metadata: HashMap<String, String>,
        suspicious: bool,
    ) -> DomainResult<()> {
        let event = AuditEvent {
            id: self.ids.new_id(),
            action,
            status,
            user_id,
            actor_ref,
            metadata,
            suspicious,
            timestamp: self.clock.now(),
        };
        self.audit_log.record(event).await
    }

    fn hash_with_salt(value: &str, salt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        hasher.update(salt.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn sanitize_file_name(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-' || *c == '_')
            .take(80)
            .collect()
    }

    fn ms_to_datetime(ms: i64) -> DateTime<chrono::Utc> {
        DateTime::from_timestamp_millis(ms).unwrap_or_else(|| chrono::Utc::now())
    }
}

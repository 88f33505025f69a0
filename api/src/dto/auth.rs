use chrono::{DateTime, Utc};
use ns_core::domain::entities::user::UserPreferences;
use ns_core::domain::entities::{AvatarFinalizeMeta, AvatarUploadRequest, Identity, IdentityProvider, User};
use ns_core::domain::value_objects::{ProviderLoginResult, SessionPair};
use ns_shared::types::ThemePreference;
use ns_shared::utils::display_name;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response-only view of [`User`]: every auth/profile handler serializes
/// this instead of the domain entity so `password_hash` never reaches the
/// client, and `display_name` is HTML-entity-encoded on the way out
/// (spec §3, §6).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub primary_phone: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub username: Option<String>,
    pub username_normalized: Option<String>,
    pub identities: Vec<Identity>,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            primary_phone: user.primary_phone,
            display_name: user
                .display_name
                .as_deref()
                .map(display_name::encode_for_output),
            avatar_url: user.avatar_url,
            username: user.username,
            username_normalized: user.username_normalized,
            identities: user.identities,
            preferences: user.preferences,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Wire shape for every login path (`verifyPhoneCode`, `loginWithOAuth`,
/// `loginWithEmailPassword`): identical to [`ProviderLoginResult`] except
/// `user` is the redacted [`AuthUser`] view.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSessionResponse {
    pub user: AuthUser,
    pub identity: Identity,
    pub session: SessionPair,
    pub linked: bool,
}

impl From<ProviderLoginResult> for AuthSessionResponse {
    fn from(result: ProviderLoginResult) -> Self {
        Self {
            user: result.user.into(),
            identity: result.identity,
            session: result.session,
            linked: result.linked,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPhoneLoginRequest {
    pub phone: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPhoneCodeRequest {
    pub challenge_id: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthLoginRequest {
    pub provider: IdentityProvider,
    pub subject: String,
    #[serde(default)]
    pub email_hint: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub theme_preference: Option<ThemePreference>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameAvailabilityQuery {
    pub username: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveUsernameRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAvatarUploadPlanRequest {
    #[serde(flatten)]
    pub request: AvatarUploadRequest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeAvatarUploadRequest {
    #[serde(flatten)]
    pub meta: AvatarFinalizeMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSessionRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

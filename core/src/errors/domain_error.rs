//! Domain error types for the auth and content services (spec §7).

use thiserror::Error;

use ns_shared::errors::error_codes;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid phone number")]
    InvalidPhone,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid username")]
    InvalidUsername,

    #[error("invalid avatar upload request")]
    InvalidAvatar,

    #[error("display name cannot be empty")]
    EmptyDisplayName,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid or unknown challenge")]
    InvalidChallenge,

    #[error("expired")]
    Expired,

    #[error("incorrect one-time code")]
    CodeMismatch,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("unknown user")]
    UnknownUser,
}

#[derive(Error, Debug)]
pub enum UsernameError {
    #[error("username is already taken")]
    UsernameTaken,

    #[error("username is currently reserved")]
    UsernameReserved,
}

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("upload plan has expired")]
    UploadExpired,

    #[error("finalize content type does not match the planned upload")]
    UploadMimeMismatch,

    #[error("unknown upload")]
    UnknownUpload,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no refresh token supplied")]
    MissingRefresh,

    #[error("refresh token has expired")]
    RefreshExpired,
}

#[derive(Error, Debug)]
pub enum DefenseError {
    #[error("rate limited, try again later")]
    RateLimited,

    #[error("transport policy requires https and secure storage")]
    InsecureTransport,

    #[error("cryptographic backend unavailable")]
    CryptoUnavailable,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("unknown media item")]
    UnknownMedia,

    #[error("unknown media unit")]
    UnknownUnit,

    #[error("unknown group media selection")]
    UnknownSelection,

    #[error("post references a unit that does not belong to its media item")]
    InvalidPostReference,
}

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("unknown rollback token")]
    UnknownToken,

    #[error("this mark has already been rolled back")]
    AlreadyRolledBack,

    #[error("rollback window has expired")]
    RollbackExpired,

    #[error("progress has advanced since the mark being rolled back")]
    Stale,
}

/// The composed, stable error taxonomy callers pattern-match on (spec §7).
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Username(#[from] UsernameError),

    #[error(transparent)]
    Avatar(#[from] AvatarError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Defense(#[from] DefenseError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// The stable, client-facing code (spec §7) — never changes across
    /// releases, unlike `Display`, which is for logs only.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Input(e) => match e {
                InputError::InvalidPhone => error_codes::INVALID_PHONE,
                InputError::InvalidEmail => error_codes::INVALID_EMAIL,
                InputError::InvalidUsername => error_codes::INVALID_USERNAME,
                InputError::InvalidAvatar => error_codes::INVALID_AVATAR,
                InputError::EmptyDisplayName => error_codes::EMPTY_DISPLAY_NAME,
            },
            DomainError::Auth(e) => match e {
                AuthError::InvalidChallenge => error_codes::INVALID_CHALLENGE,
                AuthError::Expired => error_codes::EXPIRED,
                AuthError::CodeMismatch => error_codes::CODE_MISMATCH,
                AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
                AuthError::UnknownUser => error_codes::UNKNOWN_USER,
            },
            DomainError::Username(e) => match e {
                UsernameError::UsernameTaken => error_codes::USERNAME_TAKEN,
                UsernameError::UsernameReserved => error_codes::USERNAME_RESERVED,
            },
            DomainError::Avatar(e) => match e {
                AvatarError::UploadExpired => error_codes::UPLOAD_EXPIRED,
                AvatarError::UploadMimeMismatch => error_codes::UPLOAD_MIME_MISMATCH,
                AvatarError::UnknownUpload => error_codes::UNKNOWN_UPLOAD,
            },
            DomainError::Session(e) => match e {
                SessionError::MissingRefresh => error_codes::MISSING_REFRESH,
                SessionError::RefreshExpired => error_codes::REFRESH_EXPIRED,
            },
            DomainError::Defense(e) => match e {
                DefenseError::RateLimited => error_codes::RATE_LIMITED,
                DefenseError::InsecureTransport => error_codes::INSECURE_TRANSPORT,
                DefenseError::CryptoUnavailable => error_codes::CRYPTO_UNAVAILABLE,
            },
            DomainError::Content(e) => match e {
                ContentError::UnknownMedia => error_codes::UNKNOWN_MEDIA,
                ContentError::UnknownUnit => error_codes::UNKNOWN_UNIT,
                ContentError::UnknownSelection => error_codes::UNKNOWN_SELECTION,
                ContentError::InvalidPostReference => error_codes::INVALID_POST_REFERENCE,
            },
            DomainError::Progress(e) => match e {
                ProgressError::UnknownToken => error_codes::UNKNOWN_TOKEN,
                ProgressError::AlreadyRolledBack => error_codes::ALREADY_ROLLED_BACK,
                ProgressError::RollbackExpired => error_codes::ROLLBACK_EXPIRED,
                ProgressError::Stale => error_codes::STALE,
            },
            DomainError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }

    /// The generic, user-visible message for login-path failures (spec §7
    /// policy: never reveal which credential was wrong). The OTP path and
    /// the email/password path get distinct generic strings so neither
    /// leaks which path the caller was on. Everywhere else `Display` is
    /// specific enough to show directly.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Auth(AuthError::CodeMismatch)
            | DomainError::Auth(AuthError::InvalidChallenge) => {
                "Incorrect one-time code.".to_string()
            }
            DomainError::Auth(AuthError::InvalidCredentials)
            | DomainError::Auth(AuthError::UnknownUser) => {
                "Invalid email or password.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_stable_per_variant() {
        let err: DomainError = AuthError::CodeMismatch.into();
        assert_eq!(err.code(), "CODE_MISMATCH");
    }

    #[test]
    fn login_failures_dont_leak_specifics_in_user_message() {
        let err: DomainError = AuthError::UnknownUser.into();
        assert_eq!(err.user_message(), "Invalid email or password.");
    }

    #[test]
    fn otp_failures_get_a_distinct_generic_message() {
        let mismatch: DomainError = AuthError::CodeMismatch.into();
        assert_eq!(mismatch.user_message(), "Incorrect one-time code.");

        let invalid_challenge: DomainError = AuthError::InvalidChallenge.into();
        assert_eq!(invalid_challenge.user_message(), "Incorrect one-time code.");
    }

    #[test]
    fn non_login_errors_surface_their_display() {
        let err: DomainError = ContentError::UnknownMedia.into();
        assert_eq!(err.user_message(), "unknown media item");
    }
}

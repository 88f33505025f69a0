//! The `DomainError` taxonomy (spec §7): every failure mode is a distinct
//! tagged variant, grouped by concern, composed into one top-level enum.
//! Callers match on variants; they never parse strings.

mod domain_error;

pub use domain_error::{
    AuthError, AvatarError, ContentError, DefenseError, DomainError, InputError, ProgressError,
    SessionError, UsernameError,
};

pub type DomainResult<T> = Result<T, DomainError>;

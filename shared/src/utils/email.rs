//! Email normalization and validation (spec §3 `User.email` invariant).

use once_cell::sync::Lazy;
use regex::Regex;

/// A basic RFC-ish email pattern, deliberately permissive: the invariant is
/// "matches a basic RFC-ish regex", not full RFC 5322 conformance.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid"));

/// Lowercase and trim, per spec §3 ("email lowercased ... when set").
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

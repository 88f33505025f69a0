//! Username normalization and validation (spec §4.5 `updateProfile`).

use once_cell::sync::Lazy;
use regex::Regex;

/// `^[a-z0-9](?:[a-z0-9_]{1,28}[a-z0-9])?$` — 1 char, or 3-30 chars bookended
/// by alphanumerics with underscores allowed in the middle.
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9_]{1,28}[a-z0-9])?$").expect("static regex is valid")
});

/// Trim and lowercase, producing the lookup form (`usernameNormalized`).
pub fn normalize(username: &str) -> String {
    username.trim().to_lowercase()
}

pub fn is_valid(normalized: &str) -> bool {
    USERNAME_REGEX.is_match(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_character() {
        assert!(is_valid("a"));
    }

    #[test]
    fn accepts_underscored_middle() {
        assert!(is_valid("ada_lovelace"));
    }

    #[test]
    fn rejects_leading_underscore() {
        assert!(!is_valid("_ada"));
    }

    #[test]
    fn rejects_trailing_underscore() {
        assert!(!is_valid("ada_"));
    }

    #[test]
    fn rejects_uppercase() {
        assert!(!is_valid("Ada"));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize("  Ada  "), "ada");
    }
}

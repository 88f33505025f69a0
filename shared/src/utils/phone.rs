//! Phone number normalization (spec §4.5 `startPhoneLogin`).

/// Strip everything but digits and a leading `+`, per spec §4.5.
pub fn normalize(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// A normalized phone number is valid when it has at least 7 digits.
pub fn is_valid(phone: &str) -> bool {
    let normalized = normalize(phone);
    let digit_count = normalized.chars().filter(|c| c.is_ascii_digit()).count();
    digit_count >= 7
}

/// Mask all but the last 4 characters of a normalized phone number, e.g.
/// `+15551234567` -> `********4567`.
pub fn redact(phone: &str) -> String {
    let normalized = normalize(phone);
    let len = normalized.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let visible_start = len - 4;
    normalized
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible_start { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_punctuation_out() {
        assert_eq!(normalize("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn requires_at_least_seven_digits() {
        assert!(is_valid("+15551234567"));
        assert!(!is_valid("12345"));
    }

    #[test]
    fn redacts_all_but_last_four() {
        assert_eq!(redact("+15551234567"), "********4567");
    }

    #[test]
    fn redacts_short_numbers_entirely() {
        assert_eq!(redact("123"), "***");
    }
}

//! Email syntax validation.
//!
//! Purely syntactic: no DNS lookup, no deliverability check. The input is
//! folded to lowercase before matching, so the predicate is case-insensitive.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain` where the local part is dot-separated runs of unquoted
/// characters or a double-quoted string, and the domain is a bracketed
/// dotted numeric literal or dot-separated labels ending in a >=2 letter
/// alphabetic label. Octets of the numeric literal are 1-3 digits with no
/// range check.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*|".+")@(\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|([a-z0-9-]+\.)+[a-z]{2,})$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Classify `value` as a syntactically valid email address.
///
/// Deterministic, pure, and total: always returns a boolean, never errors.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(&value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(is_valid_email("test@gmail.com"));
    }

    #[test]
    fn accepts_dotted_local_part() {
        assert!(is_valid_email("first.last@example.org"));
    }

    #[test]
    fn accepts_plus_and_dash() {
        assert!(is_valid_email("user+tag@my-host.example.com"));
    }

    #[test]
    fn accepts_quoted_local_part() {
        assert!(is_valid_email("\"much.more unusual\"@example.com"));
    }

    #[test]
    fn accepts_bracketed_numeric_domain() {
        assert!(is_valid_email("user@[192.168.0.1]"));
    }

    #[test]
    fn is_case_insensitive() {
        assert!(is_valid_email("TeSt@ExAmPlE.CoM"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("notValid"));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn rejects_consecutive_dots_in_local_part() {
        assert!(!is_valid_email("a..b@example.com"));
    }

    #[test]
    fn rejects_leading_dot_in_local_part() {
        assert!(!is_valid_email(".a@example.com"));
    }

    #[test]
    fn rejects_single_letter_top_level_label() {
        assert!(!is_valid_email("a@example.c"));
    }

    #[test]
    fn rejects_numeric_top_level_label() {
        assert!(!is_valid_email("a@example.123"));
    }

    #[test]
    fn rejects_whitespace_in_local_part() {
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn rejects_missing_domain_dot() {
        assert!(!is_valid_email("a@example"));
    }

    #[test]
    fn rejects_incomplete_bracket_literal() {
        assert!(!is_valid_email("a@[192.168.0]"));
    }

    #[test]
    fn rejects_trailing_domain_dot() {
        assert!(!is_valid_email("a@example.com."));
    }
}

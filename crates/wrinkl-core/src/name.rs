//! Feature name handling.
//!
//! A user types a free-form feature name ("User Authentication"); ledgers are
//! stored under a canonical id derived from it ("user-authentication").
//! [`validate`] gates creation on the raw name, [`normalize`] derives the id.

use thiserror::Error;

/// Longest raw feature name accepted by [`validate`], in characters.
pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Feature name is required")]
    Empty,

    #[error("Feature name must be {MAX_NAME_LEN} characters or less")]
    TooLong,

    #[error("Feature name can only contain letters, numbers, spaces, hyphens, and underscores")]
    InvalidCharacter,
}

/// Check a raw feature name before it is normalized.
///
/// The length limit applies to the raw string, not the normalized id.
pub fn validate(raw: &str) -> Option<NameError> {
    if raw.trim().is_empty() {
        return Some(NameError::Empty);
    }
    if raw.chars().count() > MAX_NAME_LEN {
        return Some(NameError::TooLong);
    }
    if !raw.chars().all(is_allowed_raw_char) {
        return Some(NameError::InvalidCharacter);
    }
    None
}

fn is_allowed_raw_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '-' || c == '_'
}

/// Derive the canonical ledger id for a raw feature name.
///
/// Lowercases ASCII, trims, turns each whitespace run into one hyphen, then
/// drops everything outside `[a-z0-9-]`. Underscores and punctuation are
/// deleted rather than hyphenated, so `My_Feature` becomes `myfeature`.
///
/// The result may be empty (`"@@@"`); storing callers must reject that.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_ascii_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if is_canonical_char(c) {
            out.push(c);
        }
    }
    out
}

fn is_canonical_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_examples() {
        assert_eq!(normalize("My_Feature-Name"), "myfeature-name");
        assert_eq!(normalize("  multi   word  name "), "multi-word-name");
        assert_eq!(normalize("User Authentication"), "user-authentication");
        assert_eq!(normalize("My_Feature-Name!"), "myfeature-name");
        assert_eq!(normalize("Valid Name-1"), "valid-name-1");
    }

    #[test]
    fn normalize_can_be_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("@@@"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_drops_non_ascii() {
        assert_eq!(normalize("Café Menu"), "caf-menu");
        assert_eq!(normalize("ÜBER"), "ber");
    }

    #[test]
    fn normalize_collapses_mixed_whitespace() {
        assert_eq!(normalize("a\t\n b"), "a-b");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            "My_Feature-Name",
            "  multi   word  name ",
            "Café -- Menu",
            "tabs\tand\nnewlines",
            "@@@",
            "a - b",
            "",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn normalize_output_is_canonical() {
        for raw in ["Hello World!", " X_Y Z ", "ÅÄÖ 123", "a\u{00a0}b", "--Keep--"] {
            let id = normalize(raw);
            assert!(
                id.chars().all(is_canonical_char),
                "unexpected character in {id:?} from {raw:?}"
            );
        }
    }

    #[test]
    fn validate_accepts_plain_names() {
        for raw in ["Valid Name-1", "user_auth", "a", &"a".repeat(MAX_NAME_LEN)] {
            assert_eq!(validate(raw), None, "expected valid: {raw}");
        }
    }

    #[test]
    fn validate_rejects_empty() {
        assert_eq!(validate(""), Some(NameError::Empty));
        assert_eq!(validate("   "), Some(NameError::Empty));
    }

    #[test]
    fn validate_rejects_long_names() {
        assert_eq!(validate(&"a".repeat(51)), Some(NameError::TooLong));
        assert_eq!(validate(&"a".repeat(60)), Some(NameError::TooLong));
    }

    #[test]
    fn validate_rejects_invalid_characters() {
        for raw in ["feature@name#invalid", "My_Feature-Name!", "café", "a.b"] {
            assert_eq!(validate(raw), Some(NameError::InvalidCharacter), "{raw}");
        }
    }
}

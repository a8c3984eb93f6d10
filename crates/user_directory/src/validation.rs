//! Input validation and normalization for user payloads.
//!
//! Pure functions from raw field values to normalized values or a
//! [`DirectoryError::Validation`]. Structural length checks run before the
//! content rules for each field.

use email_address::EmailAddress;
use sha2::{Digest, Sha256};

use crate::{DirectoryError, DirectoryResult};

/// Minimum name length, counted on the raw value.
pub const NAME_MIN: usize = 2;
/// Maximum name length, counted on the raw value.
pub const NAME_MAX: usize = 50;
/// Minimum password length.
pub const PASSWORD_MIN: usize = 8;
/// Maximum password length.
pub const PASSWORD_MAX: usize = 100;

/// Characters accepted as the password special-character class.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Validates and normalizes a display name.
///
/// The raw value must be 2-50 characters. After trimming, the name must be
/// non-empty and contain only ASCII letters and spaces. The returned value
/// is title-cased and is what gets stored and compared.
pub fn normalize_name(raw: &str) -> DirectoryResult<String> {
    let length = raw.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return Err(DirectoryError::validation(
            "name",
            format!("must be {NAME_MIN}-{NAME_MAX} characters"),
        ));
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::validation("name", "must not be empty"));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ')
    {
        return Err(DirectoryError::validation(
            "name",
            "may only contain letters and spaces",
        ));
    }

    Ok(title_case(trimmed))
}

/// Checks a password against the length and character-class rules.
///
/// Rules are checked in order and the first failure is returned: length
/// 8-100, then at least one uppercase letter, one lowercase letter, one
/// digit, and one special character.
pub fn validate_password(raw: &str) -> DirectoryResult<()> {
    let length = raw.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
        return Err(DirectoryError::validation(
            "password",
            format!("must be {PASSWORD_MIN}-{PASSWORD_MAX} characters"),
        ));
    }
    if !raw.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(DirectoryError::validation(
            "password",
            "must contain at least one uppercase letter",
        ));
    }
    if !raw.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(DirectoryError::validation(
            "password",
            "must contain at least one lowercase letter",
        ));
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(DirectoryError::validation(
            "password",
            "must contain at least one digit",
        ));
    }
    if !raw.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(DirectoryError::validation(
            "password",
            "must contain at least one special character",
        ));
    }
    Ok(())
}

/// Checks email address syntax. The value is not normalized; case is
/// preserved as submitted.
pub fn validate_email(raw: &str) -> DirectoryResult<()> {
    if !EmailAddress::is_valid(raw) {
        return Err(DirectoryError::validation(
            "email",
            "is not a valid email address",
        ));
    }
    Ok(())
}

/// Hashes a password as hex-encoded unsalted SHA-256.
pub fn hash_password(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

/// Uppercases the first letter of each space-separated word and lowercases
/// the rest, preserving interior spacing.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c == ' ' {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.push(c.to_ascii_uppercase());
            at_word_start = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_and_title_cased() {
        assert_eq!(normalize_name("john doe").unwrap(), "John Doe");
        assert_eq!(normalize_name("  ada LOVELACE  ").unwrap(), "Ada Lovelace");
        assert_eq!(normalize_name("bob").unwrap(), "Bob");
    }

    #[test]
    fn test_name_preserves_interior_spacing() {
        assert_eq!(normalize_name("mary  ann").unwrap(), "Mary  Ann");
    }

    #[test]
    fn test_name_rejects_digits_and_punctuation() {
        assert!(normalize_name("j0hn").is_err());
        assert!(normalize_name("john!").is_err());
        assert!(normalize_name("john-doe").is_err());
    }

    #[test]
    fn test_name_rejects_non_ascii_letters() {
        assert!(normalize_name("jörg").is_err());
    }

    #[test]
    fn test_name_length_is_checked_on_the_raw_value() {
        assert!(normalize_name("j").is_err());
        assert!(normalize_name(&"a".repeat(51)).is_err());
        assert!(normalize_name(&"a".repeat(50)).is_ok());
        // Two spaces pass the structural check but trim to empty.
        let err = normalize_name("  ").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::validation("name", "must not be empty")
        );
    }

    #[test]
    fn test_password_accepts_all_rules_met() {
        assert!(validate_password("Passw0rd!").is_ok());
    }

    #[test]
    fn test_password_rules_fail_with_distinct_messages() {
        let cases = [
            ("Pa1!", "must be 8-100 characters"),
            ("passw0rd!", "must contain at least one uppercase letter"),
            ("PASSW0RD!", "must contain at least one lowercase letter"),
            ("Password!", "must contain at least one digit"),
            ("Passw0rdX", "must contain at least one special character"),
        ];
        for (password, expected) in cases {
            let err = validate_password(password).unwrap_err();
            assert_eq!(
                err,
                DirectoryError::validation("password", expected),
                "password {password:?}"
            );
        }
    }

    #[test]
    fn test_password_length_is_checked_first() {
        // Too short and missing every class: the length rule wins.
        let err = validate_password("a").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::validation("password", "must be 8-100 characters")
        );
    }

    #[test]
    fn test_email_syntax() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@domain@twice").is_err());
    }

    #[test]
    fn test_hash_password_is_deterministic_hex_sha256() {
        // SHA-256 of "abc".
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hash_password("Passw0rd!"), hash_password("Passw0rd!"));
    }
}

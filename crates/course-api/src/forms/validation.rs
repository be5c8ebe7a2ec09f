//! Pure per-field rules shared by the enrollment and contact forms. Each
//! rule either returns the normalized value or a [`FieldError`] naming the
//! offending field, so callers can collect every failure in one pass.

use crate::catalog::CourseLevel;

/// One rejected form field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

const NAME_FORBIDDEN: [char; 4] = ['<', '>', '"', '\''];

/// Enrollment name: 2..=100 characters, no markup-significant characters.
pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        return Err(FieldError::new("name", "Name must be at least 2 characters"));
    }
    if raw.chars().count() > 100 {
        return Err(FieldError::new(
            "name",
            "Name must be less than 100 characters",
        ));
    }
    if raw.chars().any(|c| NAME_FORBIDDEN.contains(&c)) {
        return Err(FieldError::new("name", "Name contains invalid characters"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_country(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        return Err(FieldError::new(
            "country",
            "Country must be at least 2 characters",
        ));
    }
    if raw.chars().count() > 50 {
        return Err(FieldError::new(
            "country",
            "Country must be less than 50 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// International dial format: after stripping whitespace, hyphens, and
/// parentheses, an optional leading `+`, a first digit of 1-9, and 7 to 15
/// digits in total.
pub fn validate_phone_number(raw: &str) -> Result<String, FieldError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect();

    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    let valid = digits.len() >= 7
        && digits.len() <= 15
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0');

    if valid {
        Ok(cleaned)
    } else {
        Err(FieldError::new("phone_number", "Invalid phone number format"))
    }
}

/// Case-sensitive match against the advertised experience tiers.
pub fn validate_experience_level(raw: &str) -> Result<CourseLevel, FieldError> {
    CourseLevel::parse(raw).ok_or_else(|| {
        FieldError::new(
            "experience_level",
            "Experience level must be one of: Beginner, Intermediate, Advanced",
        )
    })
}

pub fn validate_contact_name(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        return Err(FieldError::new("name", "Name must be at least 2 characters"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_message(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 10 {
        return Err(FieldError::new(
            "message",
            "Message must be at least 10 characters",
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_client_name(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("client_name", "Client name must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Syntactic email check: exactly one `@`, a non-empty local part, and a
/// dotted domain with non-empty labels. Deliverability is out of scope.
pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    let invalid = || FieldError::new("email", "Invalid email address");

    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    if !domain.contains('.') || domain.split('.').any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(validate_name("  John Doe  ").unwrap(), "John Doe");
        assert!(validate_name("J").is_err());
        assert!(validate_name(" ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
        assert_eq!(validate_name(&"x".repeat(100)).unwrap(), "x".repeat(100));
    }

    #[test]
    fn name_rejects_markup_characters() {
        for bad in ["<script>", "a>b", "O\"Hara", "O'Hara"] {
            let err = validate_name(bad).unwrap_err();
            assert_eq!(err.field, "name");
        }
    }

    #[test]
    fn country_bounds_apply() {
        assert_eq!(validate_country(" United States ").unwrap(), "United States");
        assert!(validate_country("U").is_err());
        assert!(validate_country(&"c".repeat(51)).is_err());
    }

    #[test]
    fn phone_number_strips_separators() {
        assert_eq!(
            validate_phone_number("+1 (234) 567-890").unwrap(),
            "+1234567890"
        );
        assert_eq!(validate_phone_number("1234567").unwrap(), "1234567");
    }

    #[test]
    fn phone_number_rejects_bad_shapes() {
        for bad in ["123", "0123456789", "+0123456", "1234567890123456", "12a4567", ""] {
            assert!(validate_phone_number(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn experience_level_is_case_sensitive() {
        assert_eq!(
            validate_experience_level("Intermediate").unwrap(),
            CourseLevel::Intermediate
        );
        assert!(validate_experience_level("intermediate").is_err());
        assert!(validate_experience_level("Expert").is_err());
    }

    #[test]
    fn message_requires_ten_characters_after_trim() {
        assert_eq!(
            validate_message("  I would like a syllabus.  ").unwrap(),
            "I would like a syllabus."
        );
        assert!(validate_message("Short").is_err());
        assert!(validate_message("123456789 ").is_err());
    }

    #[test]
    fn client_name_must_be_non_empty() {
        assert_eq!(validate_client_name(" probe ").unwrap(), "probe");
        assert!(validate_client_name("   ").is_err());
    }

    #[test]
    fn email_accepts_common_addresses() {
        for good in [
            "john.doe@example.com",
            "a@b.co",
            "first+tag@sub.domain.org",
        ] {
            assert_eq!(validate_email(good).unwrap(), good);
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "invalid-email",
            "@example.com",
            "user@",
            "user@nodot",
            "user@.com",
            "user@domain.",
            "two@@example.com",
            "spaced user@example.com",
            "",
        ] {
            assert!(validate_email(bad).is_err(), "accepted {bad:?}");
        }
    }
}

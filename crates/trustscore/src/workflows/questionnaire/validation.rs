use super::domain::{ProfileField, ProfileInput};

const PHONE_MIN_DIGITS: usize = 8;
const PHONE_MAX_DIGITS: usize = 15;

/// True iff the trimmed input is 8 to 15 ASCII digits and nothing else.
pub fn is_valid_phone(raw: &str) -> bool {
    let digits = raw.trim();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A field has a value iff its trimmed text is non-empty.
pub fn has_value(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// Loose address check: one `@`, a local part, and a dotted domain.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !domain.ends_with('.'),
        None => false,
    }
}

/// Inline status shown while the phone number is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneStatus {
    Valid,
    Invalid,
}

impl PhoneStatus {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Valid => "Valid phone number",
            Self::Invalid => "Invalid (8-15 digits required)",
        }
    }
}

pub fn phone_status(raw: &str) -> Option<PhoneStatus> {
    if !has_value(raw) {
        return None;
    }
    Some(if is_valid_phone(raw) {
        PhoneStatus::Valid
    } else {
        PhoneStatus::Invalid
    })
}

/// Field-level failure that blocks advancing the wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Missing(ProfileField),
    #[error("{} is not a valid email address", .0.label())]
    MalformedEmail(ProfileField),
}

impl ValidationError {
    pub fn field(&self) -> ProfileField {
        match self {
            Self::Missing(field) | Self::MalformedEmail(field) => *field,
        }
    }
}

/// Checks the required fields in order and reports the first failure.
pub fn require_fields(
    profile: &ProfileInput,
    fields: &[ProfileField],
) -> Result<(), ValidationError> {
    for &field in fields {
        let value = field.value(profile);
        if !has_value(value) {
            return Err(ValidationError::Missing(field));
        }
        if field == ProfileField::Email && !is_valid_email(value) {
            return Err(ValidationError::MalformedEmail(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_eight_to_fifteen_digits() {
        assert!(!is_valid_phone("1234567"));
        assert!(is_valid_phone("12345678"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("123456789012345a"));
    }

    #[test]
    fn phone_rejects_separators_and_plus_but_trims() {
        assert!(!is_valid_phone("+15551234567"));
        assert!(!is_valid_phone("555-123-4567"));
        assert!(!is_valid_phone("555 1234567"));
        assert!(is_valid_phone("  5551234567 \n"));
        assert!(!is_valid_phone("５５５１２３４５６７"));
    }

    #[test]
    fn presence_ignores_whitespace() {
        assert!(!has_value(""));
        assert!(!has_value("   \t"));
        assert!(has_value(" x "));
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email(" ab@x.co "));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice@@example.com"));
        assert!(!is_valid_email("al ice@example.com"));
        assert!(!is_valid_email("alice@example."));
    }

    #[test]
    fn phone_status_is_silent_for_empty_input() {
        assert_eq!(phone_status("  "), None);
        assert_eq!(phone_status("12345678"), Some(PhoneStatus::Valid));
        assert_eq!(phone_status("1234"), Some(PhoneStatus::Invalid));
    }

    #[test]
    fn require_fields_reports_first_missing_field() {
        let profile = ProfileInput {
            name: "Ada".to_string(),
            email: "not-an-address".to_string(),
            ..ProfileInput::default()
        };

        let err = require_fields(
            &profile,
            &[ProfileField::Name, ProfileField::Email, ProfileField::Phone],
        )
        .expect_err("email is malformed");
        assert_eq!(err, ValidationError::MalformedEmail(ProfileField::Email));

        let err = require_fields(&profile, &[ProfileField::Phone]).expect_err("phone missing");
        assert_eq!(err.field(), ProfileField::Phone);
        assert_eq!(err.to_string(), "Phone is required");
    }
}

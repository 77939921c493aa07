//! Email address validator.

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::Validator;
use regex::Regex;
use std::sync::LazyLock;

// Pragmatic email pattern: a local part, a single `@`, and a dotted domain
// with an alphabetic top-level label of at least two characters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*\.[a-zA-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string value is a well-formed email address.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("apply@example.com").is_ok());
/// assert!(validator.validate("bad-email").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidEmail)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("test@example.com")]
	#[case("user.name+tag@example.co.uk")]
	#[case("first_last@sub.domain.org")]
	#[case("a@b.io")]
	#[case("digits123@example.com")]
	fn test_email_validator_valid(#[case] email: &str) {
		let validator = EmailValidator::new();
		assert!(
			validator.validate(email).is_ok(),
			"Expected '{email}' to be a valid email"
		);
	}

	#[rstest]
	#[case("")]
	#[case("bad-email")]
	#[case("invalid@")]
	#[case("@example.com")]
	#[case("two@@example.com")]
	#[case("user@example")]
	#[case("user@-example.com")]
	#[case("user@example.c")]
	#[case("spaced user@example.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		let validator = EmailValidator::new();
		assert_eq!(
			validator.validate(email),
			Err(ValidationError::InvalidEmail),
			"Expected '{email}' to be an invalid email"
		);
	}
}

//! URL validator.

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::Validator;
use regex::Regex;
use std::sync::LazyLock;

// HTTP/HTTPS URL pattern: http or https scheme, valid domain labels (no
// leading/trailing hyphens), optional port, path, query string, and fragment.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^https?://[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?(/[^\s?#]*)?(\?[^\s#]*)?(#[^\s]*)?$",
	)
	.expect("URL_REGEX: invalid regex pattern")
});

/// Validates that a string value is a well-formed HTTP or HTTPS URL.
///
/// Company websites and `website_to_apply` links are stored as free text, so
/// this is the only guard between an admin typo and a dead link on the site.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{UrlValidator, Validator};
///
/// let validator = UrlValidator::new();
/// assert!(validator.validate("https://example.com/jobs").is_ok());
/// assert!(validator.validate("ftp://example.com").is_err());
/// assert!(validator.validate("not-a-url").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlValidator;

impl UrlValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for UrlValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if URL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidUrl)
		}
	}
}

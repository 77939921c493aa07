//! String validators.

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::Validator;

/// Rejects values that are empty or whitespace-only after trimming.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{NonBlankValidator, Validator};
///
/// let validator = NonBlankValidator::new();
/// assert!(validator.validate("Engineering").is_ok());
/// assert!(validator.validate("   ").is_err());
/// assert!(validator.validate("").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NonBlankValidator;

impl NonBlankValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for NonBlankValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.trim().is_empty() {
			Err(ValidationError::Blank)
		} else {
			Ok(())
		}
	}
}

/// Rejects values containing any whitespace character.
///
/// Used for the `username` column, which doubles as a login identifier.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{NoWhitespaceValidator, Validator};
///
/// let validator = NoWhitespaceValidator::new();
/// assert!(validator.validate("john_smith").is_ok());
/// assert!(validator.validate("john smith").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoWhitespaceValidator;

impl NoWhitespaceValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for NoWhitespaceValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.chars().any(char::is_whitespace) {
			Err(ValidationError::ContainsWhitespace)
		} else {
			Ok(())
		}
	}
}

/// Minimum length validator. Lengths are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{MinLengthValidator, Validator};
///
/// let validator = MinLengthValidator::new(8);
/// assert!(validator.validate("hunter2hunter2").is_ok());
/// assert!(validator.validate("hunter2").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Validator<str> for MinLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length >= self.min {
			Ok(())
		} else {
			Err(ValidationError::TooShort {
				length,
				min: self.min,
			})
		}
	}
}

/// Maximum length validator. Lengths are counted in characters, not bytes,
/// matching how the storage layer sizes its text columns.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{MaxLengthValidator, Validator};
///
/// let validator = MaxLengthValidator::new(5);
/// assert!(validator.validate("short").is_ok());
/// assert!(validator.validate("too long").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
	max: usize,
}

impl MaxLengthValidator {
	pub fn new(max: usize) -> Self {
		Self { max }
	}
}

impl Validator<str> for MaxLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length <= self.max {
			Ok(())
		} else {
			Err(ValidationError::TooLong {
				length,
				max: self.max,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_non_blank_validator_valid() {
		let validator = NonBlankValidator::new();
		assert!(validator.validate("name").is_ok());
		assert!(validator.validate("  padded  ").is_ok());
	}

	#[test]
	fn test_non_blank_validator_invalid() {
		let validator = NonBlankValidator::new();
		assert_eq!(validator.validate(""), Err(ValidationError::Blank));
		assert_eq!(validator.validate("   "), Err(ValidationError::Blank));
		assert_eq!(validator.validate("\t\n"), Err(ValidationError::Blank));
	}

	#[test]
	fn test_no_whitespace_validator() {
		let validator = NoWhitespaceValidator::new();
		assert!(validator.validate("jsmith").is_ok());
		assert!(validator.validate("j.smith-42").is_ok());
		assert_eq!(
			validator.validate("john smith"),
			Err(ValidationError::ContainsWhitespace)
		);
		assert_eq!(
			validator.validate("tab\there"),
			Err(ValidationError::ContainsWhitespace)
		);
	}

	#[test]
	fn test_min_length_validator_boundaries() {
		let validator = MinLengthValidator::new(8);
		assert!(validator.validate("12345678").is_ok());
		let result = validator.validate("1234567");
		assert_eq!(result, Err(ValidationError::TooShort { length: 7, min: 8 }));
	}

	#[test]
	fn test_min_length_counts_characters_not_bytes() {
		// Three characters, nine bytes.
		let validator = MinLengthValidator::new(4);
		assert_eq!(
			validator.validate("日本語"),
			Err(ValidationError::TooShort { length: 3, min: 4 })
		);
	}

	#[test]
	fn test_max_length_validator_boundaries() {
		let validator = MaxLengthValidator::new(10);
		assert!(validator.validate("1234567890").is_ok());
		assert!(validator.validate("").is_ok());
		assert_eq!(
			validator.validate("12345678901"),
			Err(ValidationError::TooLong { length: 11, max: 10 })
		);
	}
}

//! Numeric validators.

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::Validator;
use std::fmt::Display;

/// Minimum value validator.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{MinValueValidator, Validator};
///
/// let validator = MinValueValidator::new(0.0);
/// assert!(validator.validate(&4500.0).is_ok());
/// assert!(validator.validate(&-1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinValueValidator<T> {
	min: T,
}

impl<T> MinValueValidator<T> {
	pub fn new(min: T) -> Self {
		Self { min }
	}
}

impl<T: PartialOrd + Display> Validator<T> for MinValueValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value >= &self.min {
			Ok(())
		} else {
			Err(ValidationError::TooSmall {
				value: value.to_string(),
				min: self.min.to_string(),
			})
		}
	}
}

/// Strictly-positive validator for integer quantities.
///
/// Zero is rejected: a job listing with no openings at all should be closed,
/// not published with `total_vacancy = 0`.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{PositiveValidator, Validator};
///
/// let validator = PositiveValidator::new();
/// assert!(validator.validate(&1).is_ok());
/// assert!(validator.validate(&0).is_err());
/// assert!(validator.validate(&-3).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PositiveValidator;

impl PositiveValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<i64> for PositiveValidator {
	fn validate(&self, value: &i64) -> ValidationResult<()> {
		if *value > 0 {
			Ok(())
		} else {
			Err(ValidationError::NotPositive)
		}
	}
}

/// Boolean-as-integer flag validator: the value must be exactly 0 or 1.
///
/// The legacy schema stores its boolean columns (`is_closed`, `is_approved`,
/// `is_superuser`, `is_staff`, `is_active`) as integers.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{FlagValidator, Validator};
///
/// let validator = FlagValidator::new();
/// assert!(validator.validate(&0).is_ok());
/// assert!(validator.validate(&1).is_ok());
/// assert!(validator.validate(&2).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlagValidator;

impl FlagValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<i64> for FlagValidator {
	fn validate(&self, value: &i64) -> ValidationResult<()> {
		if matches!(*value, 0 | 1) {
			Ok(())
		} else {
			Err(ValidationError::NotAFlag)
		}
	}
}

/// Membership validator for small fixed integer choice sets.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::validators::{IntegerChoiceValidator, Validator};
///
/// let validator = IntegerChoiceValidator::new(&[0, 1, 2, 3, 4]);
/// assert!(validator.validate(&3).is_ok());
/// assert!(validator.validate(&9).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IntegerChoiceValidator {
	choices: &'static [i64],
}

impl IntegerChoiceValidator {
	pub fn new(choices: &'static [i64]) -> Self {
		Self { choices }
	}
}

impl Validator<i64> for IntegerChoiceValidator {
	fn validate(&self, value: &i64) -> ValidationResult<()> {
		if self.choices.contains(value) {
			Ok(())
		} else {
			let choices = self
				.choices
				.iter()
				.map(i64::to_string)
				.collect::<Vec<_>>()
				.join(", ");
			Err(ValidationError::InvalidChoice {
				value: *value,
				choices,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_min_value_validator_integers() {
		let validator = MinValueValidator::new(0);
		assert!(validator.validate(&0).is_ok());
		assert!(validator.validate(&100).is_ok());
		assert!(validator.validate(&-1).is_err());
	}

	#[test]
	fn test_min_value_validator_error_message() {
		let validator = MinValueValidator::new(0.0);
		match validator.validate(&-2.5) {
			Err(ValidationError::TooSmall { value, min }) => {
				assert_eq!(value, "-2.5");
				assert_eq!(min, "0");
			}
			other => panic!("Expected TooSmall error, got {other:?}"),
		}
	}

	#[test]
	fn test_positive_validator_rejects_zero() {
		let validator = PositiveValidator::new();
		assert!(validator.validate(&1).is_ok());
		assert_eq!(validator.validate(&0), Err(ValidationError::NotPositive));
		assert_eq!(validator.validate(&-5), Err(ValidationError::NotPositive));
	}

	#[test]
	fn test_flag_validator() {
		let validator = FlagValidator::new();
		assert!(validator.validate(&0).is_ok());
		assert!(validator.validate(&1).is_ok());
		assert_eq!(validator.validate(&2), Err(ValidationError::NotAFlag));
		assert_eq!(validator.validate(&-1), Err(ValidationError::NotAFlag));
	}

	#[test]
	fn test_integer_choice_validator_lists_choices() {
		let validator = IntegerChoiceValidator::new(&[0, 1, 2, 3, 4]);
		match validator.validate(&7) {
			Err(ValidationError::InvalidChoice { value, choices }) => {
				assert_eq!(value, 7);
				assert_eq!(choices, "0, 1, 2, 3, 4");
			}
			other => panic!("Expected InvalidChoice error, got {other:?}"),
		}
	}
}

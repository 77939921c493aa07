//! Date and timestamp ordering validators.

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::Validator;
use chrono::{DateTime, Utc};

/// Validates that a date or timestamp is not earlier than a reference value
/// taken from another field of the same record.
///
/// The reference field's name is carried so the failure message can point the
/// administrator at the pair of fields that disagree.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meuemprego_validation::validators::{NotBeforeValidator, Validator};
///
/// let published = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let due = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
///
/// let validator = NotBeforeValidator::new(published, "published_at");
/// assert!(validator.validate(&due).is_err());
/// assert!(validator.validate(&published).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct NotBeforeValidator<T> {
	reference: T,
	reference_field: &'static str,
}

impl<T> NotBeforeValidator<T> {
	pub fn new(reference: T, reference_field: &'static str) -> Self {
		Self {
			reference,
			reference_field,
		}
	}
}

impl<T: PartialOrd> Validator<T> for NotBeforeValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value >= &self.reference {
			Ok(())
		} else {
			Err(ValidationError::EarlierThan {
				reference: self.reference_field,
			})
		}
	}
}

/// Validates that a timestamp is not in the past.
///
/// The comparison point is supplied explicitly so the rest of the validator
/// stays pure: the caller reads the ambient clock exactly once per
/// validation pass.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use meuemprego_validation::validators::{NotPastValidator, Validator};
///
/// let now = Utc::now();
/// let validator = NotPastValidator::new(now);
/// assert!(validator.validate(&(now + Duration::hours(1))).is_ok());
/// assert!(validator.validate(&(now - Duration::hours(1))).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NotPastValidator {
	now: DateTime<Utc>,
}

impl NotPastValidator {
	pub fn new(now: DateTime<Utc>) -> Self {
		Self { now }
	}
}

impl Validator<DateTime<Utc>> for NotPastValidator {
	fn validate(&self, value: &DateTime<Utc>) -> ValidationResult<()> {
		if value >= &self.now {
			Ok(())
		} else {
			Err(ValidationError::InPast)
		}
	}
}

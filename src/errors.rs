//! Violation reporting and the single-check error type.
//!
//! Every rejected rule produces a [`Violation`], a field name paired with a
//! human-readable message. Validation is aggregating: all failing rules for a
//! record are collected into one ordered list via [`Violations`] and surfaced
//! together, never first-failure-only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result alias for individual field checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single failed check on a field value.
///
/// Individual validators return this; the entity layer renders it into a
/// [`Violation`] against the field being checked. The `Display` output is the
/// message shown to the administrator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("This field cannot be blank.")]
	Blank,
	#[error("This field must be specified.")]
	Required,
	#[error("This field must be 0 or 1.")]
	NotAFlag,
	#[error("Ensure this value has at least {min} characters (it has {length}).")]
	TooShort { length: usize, min: usize },
	#[error("Ensure this value has at most {max} characters (it has {length}).")]
	TooLong { length: usize, max: usize },
	#[error("Ensure this value is greater than or equal to {min} (it is {value}).")]
	TooSmall { value: String, min: String },
	#[error("Ensure this value is strictly positive.")]
	NotPositive,
	#[error("Value {value} is not one of the permitted choices ({choices}).")]
	InvalidChoice { value: i64, choices: String },
	#[error("This value must not contain whitespace.")]
	ContainsWhitespace,
	#[error("Enter a valid email address.")]
	InvalidEmail,
	#[error("Enter a valid URL.")]
	InvalidUrl,
	#[error("This date must not be earlier than {reference}.")]
	EarlierThan { reference: &'static str },
	#[error("This date must not be in the past.")]
	InPast,
	#[error("This field is not recognized for this entity.")]
	UnknownField,
	#[error("Expected a {expected} value.")]
	TypeMismatch { expected: &'static str },
}

/// A field-name/message pair describing why a candidate record was rejected.
///
/// This is the only error kind the validator surfaces to its caller. The
/// admin subsystem renders the pairs next to the offending form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
	pub field: String,
	pub message: String,
}

impl Violation {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.field, self.message)
	}
}

/// Ordered collector for the violations found in one validation pass.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::{ValidationError, Violations};
///
/// let mut errors = Violations::new();
/// errors.report("title", ValidationError::Blank);
/// assert_eq!(errors.len(), 1);
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Default)]
pub struct Violations {
	entries: Vec<Violation>,
}

impl Violations {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a failed check against `field`.
	pub fn report(&mut self, field: &str, error: ValidationError) {
		self.entries.push(Violation::new(field, error.to_string()));
	}

	/// Records the outcome of a single check, ignoring `Ok`.
	pub fn check(&mut self, field: &str, result: ValidationResult<()>) {
		if let Err(error) = result {
			self.report(field, error);
		}
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn entries(&self) -> &[Violation] {
		&self.entries
	}

	/// Success when nothing was reported, otherwise the full violation list.
	pub fn into_result(self) -> Result<(), Vec<Violation>> {
		if self.entries.is_empty() {
			Ok(())
		} else {
			Err(self.entries)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_collector_is_ok() {
		let errors = Violations::new();
		assert!(errors.is_empty());
		assert!(errors.into_result().is_ok());
	}

	#[test]
	fn test_report_preserves_order() {
		let mut errors = Violations::new();
		errors.report("title", ValidationError::Blank);
		errors.report("total_vacancy", ValidationError::NotPositive);

		let violations = errors.into_result().unwrap_err();
		assert_eq!(violations[0].field, "title");
		assert_eq!(violations[1].field, "total_vacancy");
	}

	#[test]
	fn test_check_ignores_ok() {
		let mut errors = Violations::new();
		errors.check("title", Ok(()));
		assert!(errors.is_empty());
	}

	#[test]
	fn test_violation_display() {
		let violation = Violation::new("password", ValidationError::TooShort { length: 5, min: 8 }.to_string());
		assert_eq!(
			violation.to_string(),
			"password: Ensure this value has at least 8 characters (it has 5)."
		);
	}

	#[test]
	fn test_violation_serializes_as_field_message_pair() {
		let violation = Violation::new("email", "Enter a valid email address.");
		let json = serde_json::to_value(&violation).unwrap();
		assert_eq!(json["field"], "email");
		assert_eq!(json["message"], "Enter a valid email address.");
	}
}

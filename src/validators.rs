//! Field validators.
//!
//! Small, pure predicate types composed per entity. Each validator checks one
//! property of one value and reports a structured [`ValidationError`]; the
//! entity rule sets decide which field the failure is attached to.

pub mod email;
pub mod numeric;
pub mod string;
pub mod temporal;
pub mod url;

pub use email::EmailValidator;
pub use numeric::{FlagValidator, IntegerChoiceValidator, MinValueValidator, PositiveValidator};
pub use string::{
	MaxLengthValidator, MinLengthValidator, NoWhitespaceValidator, NonBlankValidator,
};
pub use temporal::{NotBeforeValidator, NotPastValidator};
pub use url::UrlValidator;

use crate::errors::ValidationResult;

/// Trait for validators.
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::errors::ValidationError;
	use chrono::NaiveDate;

	// One smoke test per validator family; the detailed cases live in each
	// submodule.
	#[test]
	fn test_validator_trait_objects_cover_all_families() {
		assert!(NonBlankValidator::new().validate("hello").is_ok());
		assert!(NoWhitespaceValidator::new().validate("john_smith").is_ok());
		assert!(MinLengthValidator::new(8).validate("longenough").is_ok());
		assert!(MaxLengthValidator::new(10).validate("short").is_ok());
		assert!(MinValueValidator::new(0.0).validate(&10.5).is_ok());
		assert!(PositiveValidator::new().validate(&1).is_ok());
		assert!(FlagValidator::new().validate(&0).is_ok());
		assert!(IntegerChoiceValidator::new(&[0, 1, 2]).validate(&2).is_ok());
		assert!(EmailValidator::new().validate("test@example.com").is_ok());
		assert!(UrlValidator::new().validate("https://example.com").is_ok());

		let jan_5 = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
		let jan_10 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
		assert!(
			NotBeforeValidator::new(jan_5, "published_at")
				.validate(&jan_10)
				.is_ok()
		);
	}

	#[test]
	fn test_errors_are_structured() {
		let result = MinLengthValidator::new(8).validate("short");
		assert_eq!(
			result,
			Err(ValidationError::TooShort { length: 5, min: 8 })
		);
	}
}

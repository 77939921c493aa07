//! Property-style checks over the validation rules.

use chrono::{TimeZone, Utc};
use meuemprego_validation::{EntityKind, Record, validate_at};
use proptest::prelude::*;

fn violated_fields(result: Result<(), Vec<meuemprego_validation::Violation>>) -> Vec<String> {
	match result {
		Ok(()) => vec![],
		Err(violations) => violations.into_iter().map(|v| v.field).collect(),
	}
}

proptest! {
	/// A username containing whitespace always yields a username violation;
	/// one without never does.
	#[test]
	fn username_whitespace_is_always_flagged(
		left in "[a-z]{1,10}",
		right in "[a-z]{1,10}",
	) {
		let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
		let spaced = Record::new()
			.with("username", format!("{left} {right}"))
			.with("password", "long-enough-password");
		prop_assert!(
			violated_fields(validate_at(EntityKind::User, &spaced, now))
				.contains(&"username".to_string())
		);

		let joined = Record::new()
			.with("username", format!("{left}{right}"))
			.with("password", "long-enough-password");
		prop_assert!(
			!violated_fields(validate_at(EntityKind::User, &joined, now))
				.contains(&"username".to_string())
		);
	}

	/// Passwords shorter than eight characters are rejected, others accepted.
	#[test]
	fn password_length_threshold_is_exact(password in "[a-zA-Z0-9]{0,24}") {
		let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
		let record = Record::new()
			.with("username", "jsmith")
			.with("password", password.as_str());

		let flagged = violated_fields(validate_at(EntityKind::User, &record, now))
			.contains(&"password".to_string());
		prop_assert_eq!(flagged, password.chars().count() < 8);
	}

	/// `total_vacancy` is flagged exactly when it is zero or negative.
	#[test]
	fn total_vacancy_must_be_strictly_positive(total in -1000i64..1000) {
		let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
		let record = Record::new()
			.with("title", "Backend developer")
			.with("total_vacancy", total);

		let flagged = violated_fields(validate_at(EntityKind::Job, &record, now))
			.contains(&"total_vacancy".to_string());
		prop_assert_eq!(flagged, total <= 0);
	}

	/// With a pinned clock, validation is a pure function of its input.
	#[test]
	fn validation_is_deterministic(
		title in ".{0,20}",
		salary in -100.0f64..100_000.0,
		flag in -2i64..4,
	) {
		let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
		let record = Record::new()
			.with("title", title.as_str())
			.with("salary", salary)
			.with("is_closed", flag);

		let first = validate_at(EntityKind::Job, &record, now);
		let second = validate_at(EntityKind::Job, &record, now);
		prop_assert_eq!(first, second);
	}
}

//! Per-entity schemas and rule sets.
//!
//! Each submodule declares the static [`EntitySchema`](crate::schema::EntitySchema)
//! descriptors for a group of related tables and a `clean_*` function per
//! entity. A `clean_*` function evaluates every rule for its entity, each
//! rule guarded individually and never short-circuiting between rules, and
//! aggregates the failures into the shared [`Violations`] collector.
//!
//! The helpers below wrap the field validators with the record-access guards
//! the rules share: a rule only fires when the value it inspects is actually
//! present with the right type (the schema pass has already reported absent
//! requirements and type mismatches are reported there too).

pub(crate) mod accounts;
pub(crate) mod auth;
pub(crate) mod blog;
pub(crate) mod internal;
pub(crate) mod jobs;

use crate::errors::{ValidationError, Violations};
use crate::record::Record;
use crate::validators::{
	EmailValidator, FlagValidator, NoWhitespaceValidator, NonBlankValidator, NotBeforeValidator,
	UrlValidator, Validator,
};
use crate::value::Value;

/// Required text field: absent, null, or blank-after-trim is a violation.
pub(crate) fn require_non_blank(record: &Record, field: &'static str, errors: &mut Violations) {
	match record.text(field) {
		Some(value) => errors.check(field, NonBlankValidator::new().validate(value)),
		None => errors.report(field, ValidationError::Blank),
	}
}

/// Required reference field (foreign key): absent or null is a violation.
pub(crate) fn require_present(record: &Record, field: &'static str, errors: &mut Violations) {
	if record.get(field).is_none_or(Value::is_null) {
		errors.report(field, ValidationError::Required);
	}
}

/// Non-nullable boolean-as-integer flag: must be present and exactly 0 or 1.
pub(crate) fn require_flag(record: &Record, field: &'static str, errors: &mut Violations) {
	match record.integer(field) {
		Some(value) => errors.check(field, FlagValidator::new().validate(&value)),
		None => errors.report(field, ValidationError::NotAFlag),
	}
}

/// Nullable boolean-as-integer flag: when present, must be exactly 0 or 1.
pub(crate) fn optional_flag(record: &Record, field: &'static str, errors: &mut Violations) {
	if let Some(value) = record.integer(field) {
		errors.check(field, FlagValidator::new().validate(&value));
	}
}

/// Optional email field: when present and non-empty, must be well-formed.
pub(crate) fn optional_email(record: &Record, field: &'static str, errors: &mut Violations) {
	if let Some(value) = record.text(field)
		&& !value.is_empty()
	{
		errors.check(field, EmailValidator::new().validate(value));
	}
}

/// Optional URL field: when present and non-empty, must be well-formed.
pub(crate) fn optional_url(record: &Record, field: &'static str, errors: &mut Violations) {
	if let Some(value) = record.text(field)
		&& !value.is_empty()
	{
		errors.check(field, UrlValidator::new().validate(value));
	}
}

/// Timestamp-pair ordering: when both fields are present, `field` must not be
/// earlier than `reference`.
pub(crate) fn require_not_before(
	record: &Record,
	field: &'static str,
	reference: &'static str,
	errors: &mut Violations,
) {
	if let (Some(value), Some(reference_value)) =
		(record.date_time(field), record.date_time(reference))
	{
		errors.check(
			field,
			NotBeforeValidator::new(reference_value, reference).validate(&value),
		);
	}
}

//! Entity schema descriptors.
//!
//! Each entity kind carries a static [`EntitySchema`]: the storage table name
//! and the ordered list of column definitions. Table and column names match
//! the legacy relational schema exactly; they are the one wire format this
//! crate fixes, so the persistence layer can write accepted records without
//! any renaming.
//!
//! The schema also drives the first validation pass: unknown fields are
//! rejected outright (field allowlist), present values must match the declared
//! column type, and text values must fit the column width. Whether a field may
//! be absent or null is not a schema concern here; the per-entity rule sets
//! decide which fields they require.

use crate::errors::{ValidationError, Violations};
use crate::record::Record;
use crate::validators::{MaxLengthValidator, Validator};
use crate::value::Value;

/// Column type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
	Text,
	Integer,
	Decimal,
	DateTime,
	Date,
}

impl FieldType {
	pub fn name(self) -> &'static str {
		match self {
			FieldType::Text => "text",
			FieldType::Integer => "integer",
			FieldType::Decimal => "decimal",
			FieldType::DateTime => "timestamp",
			FieldType::Date => "date",
		}
	}

	/// Whether a (non-null) value is acceptable for a column of this type.
	/// Integers are acceptable for decimal columns; the admin layer submits
	/// whole-number salaries without a fraction part.
	pub fn matches(self, value: &Value) -> bool {
		match self {
			FieldType::Text => matches!(value, Value::Text(_)),
			FieldType::Integer => matches!(value, Value::Integer(_)),
			FieldType::Decimal => matches!(value, Value::Decimal(_) | Value::Integer(_)),
			FieldType::DateTime => matches!(value, Value::DateTime(_)),
			FieldType::Date => matches!(value, Value::Date(_)),
		}
	}
}

/// One column of an entity schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
	pub name: &'static str,
	pub field_type: FieldType,
	pub max_length: Option<usize>,
}

impl FieldDef {
	pub const fn new(name: &'static str, field_type: FieldType) -> Self {
		Self {
			name,
			field_type,
			max_length: None,
		}
	}

	/// Caps the character length of a text column.
	pub const fn with_max_length(mut self, limit: usize) -> Self {
		self.max_length = Some(limit);
		self
	}
}

/// Static descriptor of one entity kind: storage table plus ordered columns.
#[derive(Debug)]
pub struct EntitySchema {
	pub table: &'static str,
	pub fields: &'static [FieldDef],
}

impl EntitySchema {
	pub fn field(&self, name: &str) -> Option<&FieldDef> {
		self.fields.iter().find(|def| def.name == name)
	}

	/// Schema-conformance pass over a candidate record.
	///
	/// Reports fields the schema does not know about first, then walks the
	/// columns in schema order reporting type mismatches and over-long text.
	/// Absent and null fields are skipped; requiredness belongs to the
	/// per-entity rule sets.
	pub fn check(&self, record: &Record, errors: &mut Violations) {
		for name in record.field_names() {
			if self.field(name).is_none() {
				errors.report(name, ValidationError::UnknownField);
			}
		}

		for def in self.fields {
			let Some(value) = record.get(def.name) else {
				continue;
			};
			if value.is_null() {
				continue;
			}
			if !def.field_type.matches(value) {
				errors.report(
					def.name,
					ValidationError::TypeMismatch {
						expected: def.field_type.name(),
					},
				);
				continue;
			}
			if let (Some(limit), Some(text)) = (def.max_length, value.as_text()) {
				errors.check(def.name, MaxLengthValidator::new(limit).validate(text));
			}
		}
	}
}

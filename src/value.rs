//! Typed field values for candidate records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single typed field value inside a [`Record`](crate::Record).
///
/// The variants mirror the column types of the legacy storage schema: text,
/// integers (including the boolean-as-integer flags), decimals, timestamps,
/// and plain dates. `Null` stands for an explicitly empty nullable column.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::Value;
///
/// let title: Value = "Backend developer".into();
/// assert_eq!(title.as_text(), Some("Backend developer"));
/// assert!(Value::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
	Null,
	Text(String),
	Integer(i64),
	Decimal(f64),
	DateTime(DateTime<Utc>),
	Date(NaiveDate),
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(text) => Some(text),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Value::Integer(n) => Some(*n),
			_ => None,
		}
	}

	/// Numeric accessor for decimal columns. Integers widen to `f64`, since
	/// the admin layer submits whole-number salaries without a fraction part.
	pub fn as_decimal(&self) -> Option<f64> {
		match self {
			Value::Decimal(n) => Some(*n),
			Value::Integer(n) => Some(*n as f64),
			_ => None,
		}
	}

	pub fn as_date_time(&self) -> Option<DateTime<Utc>> {
		match self {
			Value::DateTime(ts) => Some(*ts),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<NaiveDate> {
		match self {
			Value::Date(date) => Some(*date),
			_ => None,
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Integer(value.into())
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Decimal(value)
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(value: DateTime<Utc>) -> Self {
		Value::DateTime(value)
	}
}

impl From<NaiveDate> for Value {
	fn from(value: NaiveDate) -> Self {
		Value::Date(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(inner) => inner.into(),
			None => Value::Null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_typed_accessors() {
		assert_eq!(Value::Text("abc".into()).as_text(), Some("abc"));
		assert_eq!(Value::Integer(3).as_integer(), Some(3));
		assert_eq!(Value::Decimal(1.5).as_decimal(), Some(1.5));
		assert_eq!(Value::Text("abc".into()).as_integer(), None);
		assert!(Value::Null.is_null());
	}

	#[test]
	fn test_integer_widens_to_decimal() {
		assert_eq!(Value::Integer(4500).as_decimal(), Some(4500.0));
	}

	#[test]
	fn test_from_option() {
		let absent: Option<i64> = None;
		assert_eq!(Value::from(absent), Value::Null);
		assert_eq!(Value::from(Some(7i64)), Value::Integer(7));
	}

	#[test]
	fn test_serde_round_trip_for_timestamps() {
		let ts = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
		let value = Value::DateTime(ts);
		let json = serde_json::to_string(&value).unwrap();
		let back: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(back, value);
	}
}

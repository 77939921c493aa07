//! Candidate records: the flat field-name → value mappings handed to the
//! validator by the admin layer just before persistence.

use crate::value::Value;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A not-yet-persisted entity instance, pending validation.
///
/// The record is a flat mapping from storage column names to typed values.
/// Validation never mutates it: the record is either written unchanged by the
/// caller or rejected outright.
///
/// Fields are kept in a sorted map so a record validates identically however
/// it was assembled.
///
/// # Examples
///
/// ```
/// use meuemprego_validation::Record;
///
/// let record = Record::new()
///     .with("name", "Engineering")
///     .with("icon", "gear");
/// assert_eq!(record.text("name"), Some("Engineering"));
/// assert_eq!(record.text("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
	fields: BTreeMap<String, Value>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insertion.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set(name, value);
		self
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.fields.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Text value of `name`, or `None` when absent, null, or not text.
	pub fn text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(Value::as_text)
	}

	pub fn integer(&self, name: &str) -> Option<i64> {
		self.get(name).and_then(Value::as_integer)
	}

	pub fn decimal(&self, name: &str) -> Option<f64> {
		self.get(name).and_then(Value::as_decimal)
	}

	pub fn date_time(&self, name: &str) -> Option<DateTime<Utc>> {
		self.get(name).and_then(Value::as_date_time)
	}

	pub fn date(&self, name: &str) -> Option<NaiveDate> {
		self.get(name).and_then(Value::as_date)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_builder_and_typed_getters() {
		let published = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
		let record = Record::new()
			.with("title", "Backend developer")
			.with("total_vacancy", 3i64)
			.with("salary", 4500.0)
			.with("published_at", published);

		assert_eq!(record.text("title"), Some("Backend developer"));
		assert_eq!(record.integer("total_vacancy"), Some(3));
		assert_eq!(record.decimal("salary"), Some(4500.0));
		assert_eq!(record.date_time("published_at"), Some(published));
	}

	#[test]
	fn test_null_and_mismatched_types_read_as_none() {
		let record = Record::new().with("icon", Value::Null).with("name", 7i64);
		assert_eq!(record.text("icon"), None);
		assert_eq!(record.text("name"), None);
		assert_eq!(record.integer("name"), Some(7));
	}

	#[test]
	fn test_set_overwrites() {
		let mut record = Record::new().with("name", "old");
		record.set("name", "new");
		assert_eq!(record.text("name"), Some("new"));
		assert_eq!(record.len(), 1);
	}

	#[test]
	fn test_serializes_as_plain_map() {
		let record = Record::new().with("name", "Engineering");
		let json = serde_json::to_value(&record).unwrap();
		assert_eq!(json["name"]["type"], "text");
		assert_eq!(json["name"]["value"], "Engineering");
	}
}

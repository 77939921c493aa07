//! Platform user accounts.

use crate::entities::{optional_email, require_non_blank};
use crate::errors::Violations;
use crate::record::Record;
use crate::registry::RuleContext;
use crate::schema::{EntitySchema, FieldDef, FieldType};
use crate::validators::{MinLengthValidator, NoWhitespaceValidator, Validator};

/// Minimum accepted password length, in characters.
const PASSWORD_MIN_LENGTH: usize = 8;

pub(crate) static USER: EntitySchema = EntitySchema {
	table: "users",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("username", FieldType::Text).with_max_length(255),
		FieldDef::new("password", FieldType::Text).with_max_length(255),
		FieldDef::new("email", FieldType::Text).with_max_length(255),
		FieldDef::new("full_name", FieldType::Text).with_max_length(255),
		FieldDef::new("created_at", FieldType::DateTime),
	],
};

pub(crate) fn clean_user(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "username", errors);
	if let Some(username) = record.text("username") {
		errors.check("username", NoWhitespaceValidator::new().validate(username));
	}

	// An absent password is simply too short; it gets the same message.
	let password = record.text("password").unwrap_or("");
	errors.check(
		"password",
		MinLengthValidator::new(PASSWORD_MIN_LENGTH).validate(password),
	);

	optional_email(record, "email", errors);
}

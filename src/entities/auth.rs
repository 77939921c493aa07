//! Authentication-subsystem entities: groups, permissions, staff users, and
//! the link tables joining them.
//!
//! The subsystem itself (login, permission checks) is out of scope; these rule
//! sets only guard the integrity of records edited through the admin screens.

use crate::entities::{optional_email, require_flag, require_non_blank, require_present};
use crate::errors::Violations;
use crate::record::Record;
use crate::registry::RuleContext;
use crate::schema::{EntitySchema, FieldDef, FieldType};

pub(crate) static AUTH_GROUP: EntitySchema = EntitySchema {
	table: "auth_group",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("name", FieldType::Text).with_max_length(150),
	],
};

pub(crate) fn clean_auth_group(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "name", errors);
}

pub(crate) static AUTH_PERMISSION: EntitySchema = EntitySchema {
	table: "auth_permission",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("name", FieldType::Text).with_max_length(255),
		FieldDef::new("content_type_id", FieldType::Integer),
		FieldDef::new("codename", FieldType::Text).with_max_length(100),
	],
};

pub(crate) fn clean_auth_permission(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "name", errors);
	require_non_blank(record, "codename", errors);
}

pub(crate) static AUTH_USER: EntitySchema = EntitySchema {
	table: "auth_user",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("password", FieldType::Text).with_max_length(128),
		FieldDef::new("last_login", FieldType::DateTime),
		FieldDef::new("is_superuser", FieldType::Integer),
		FieldDef::new("username", FieldType::Text).with_max_length(150),
		FieldDef::new("first_name", FieldType::Text).with_max_length(150),
		FieldDef::new("last_name", FieldType::Text).with_max_length(150),
		FieldDef::new("email", FieldType::Text).with_max_length(254),
		FieldDef::new("is_staff", FieldType::Integer),
		FieldDef::new("is_active", FieldType::Integer),
		FieldDef::new("date_joined", FieldType::DateTime),
	],
};

pub(crate) fn clean_auth_user(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	// These columns are not nullable, so an absent flag is as invalid as an
	// out-of-range one.
	require_flag(record, "is_superuser", errors);
	require_flag(record, "is_staff", errors);
	require_flag(record, "is_active", errors);
	optional_email(record, "email", errors);
}

pub(crate) static AUTH_GROUP_PERMISSION: EntitySchema = EntitySchema {
	table: "auth_group_permissions",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("group_id", FieldType::Integer),
		FieldDef::new("permission_id", FieldType::Integer),
	],
};

pub(crate) fn clean_auth_group_permission(
	record: &Record,
	_ctx: &RuleContext,
	errors: &mut Violations,
) {
	require_present(record, "group_id", errors);
	require_present(record, "permission_id", errors);
}

pub(crate) static AUTH_USER_GROUP: EntitySchema = EntitySchema {
	table: "auth_user_groups",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("user_id", FieldType::Integer),
		FieldDef::new("group_id", FieldType::Integer),
	],
};

pub(crate) fn clean_auth_user_group(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_present(record, "user_id", errors);
	require_present(record, "group_id", errors);
}

pub(crate) static AUTH_USER_PERMISSION: EntitySchema = EntitySchema {
	table: "auth_user_user_permissions",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("user_id", FieldType::Integer),
		FieldDef::new("permission_id", FieldType::Integer),
	],
};

pub(crate) fn clean_auth_user_permission(
	record: &Record,
	_ctx: &RuleContext,
	errors: &mut Violations,
) {
	require_present(record, "user_id", errors);
	require_present(record, "permission_id", errors);
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;

	fn clean(rules: fn(&Record, &RuleContext, &mut Violations), record: &Record) -> Violations {
		let ctx = RuleContext { now: Utc::now() };
		let mut errors = Violations::new();
		rules(record, &ctx, &mut errors);
		errors
	}

	#[test]
	fn test_group_name_must_not_be_blank() {
		let errors = clean(clean_auth_group, &Record::new().with("name", ""));
		assert_eq!(errors.entries()[0].field, "name");
	}

	#[test]
	fn test_permission_requires_name_and_codename() {
		let errors = clean(clean_auth_permission, &Record::new());
		let fields: Vec<_> = errors.entries().iter().map(|v| v.field.as_str()).collect();
		assert_eq!(fields, ["name", "codename"]);
	}

	#[test]
	fn test_staff_user_flags_are_mandatory() {
		let record = Record::new()
			.with("is_superuser", 0i64)
			.with("is_staff", 3i64);
		let errors = clean(clean_auth_user, &record);
		// is_staff out of range, is_active absent.
		let fields: Vec<_> = errors.entries().iter().map(|v| v.field.as_str()).collect();
		assert_eq!(fields, ["is_staff", "is_active"]);
	}

	#[test]
	fn test_link_tables_require_both_references() {
		let errors = clean(
			clean_auth_group_permission,
			&Record::new().with("group_id", 4i64),
		);
		assert_eq!(errors.entries()[0].field, "permission_id");

		let ok = Record::new().with("user_id", 1i64).with("permission_id", 2i64);
		assert!(clean(clean_auth_user_permission, &ok).is_empty());
	}
}

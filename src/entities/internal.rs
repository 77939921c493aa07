//! Framework bookkeeping entities: admin action log, content types, migration
//! log, and sessions.

use crate::entities::require_non_blank;
use crate::errors::Violations;
use crate::record::Record;
use crate::registry::RuleContext;
use crate::schema::{EntitySchema, FieldDef, FieldType};
use crate::validators::{IntegerChoiceValidator, NotPastValidator, Validator};

/// Valid admin log action flags: addition, change, deletion, and the two
/// legacy values the historic data still contains.
const ACTION_FLAGS: &[i64] = &[0, 1, 2, 3, 4];

pub(crate) static ADMIN_LOG_ENTRY: EntitySchema = EntitySchema {
	table: "django_admin_log",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("action_time", FieldType::DateTime),
		FieldDef::new("object_id", FieldType::Text),
		FieldDef::new("object_repr", FieldType::Text).with_max_length(200),
		FieldDef::new("action_flag", FieldType::Integer),
		FieldDef::new("change_message", FieldType::Text),
		FieldDef::new("content_type_id", FieldType::Integer),
		FieldDef::new("user_id", FieldType::Integer),
	],
};

pub(crate) fn clean_admin_log_entry(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	if let Some(action_flag) = record.integer("action_flag") {
		errors.check(
			"action_flag",
			IntegerChoiceValidator::new(ACTION_FLAGS).validate(&action_flag),
		);
	}
}

pub(crate) static CONTENT_TYPE: EntitySchema = EntitySchema {
	table: "django_content_type",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("app_label", FieldType::Text).with_max_length(100),
		FieldDef::new("model", FieldType::Text).with_max_length(100),
	],
};

pub(crate) fn clean_content_type(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "app_label", errors);
	require_non_blank(record, "model", errors);
}

pub(crate) static MIGRATION_LOG: EntitySchema = EntitySchema {
	table: "django_migrations",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("app", FieldType::Text).with_max_length(255),
		FieldDef::new("name", FieldType::Text).with_max_length(255),
		FieldDef::new("applied", FieldType::DateTime),
	],
};

pub(crate) fn clean_migration_log(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "app", errors);
	require_non_blank(record, "name", errors);
}

pub(crate) static SESSION: EntitySchema = EntitySchema {
	table: "django_session",
	fields: &[
		FieldDef::new("session_key", FieldType::Text).with_max_length(40),
		FieldDef::new("session_data", FieldType::Text),
		FieldDef::new("expire_date", FieldType::DateTime),
	],
};

/// The one clock-dependent rule in the crate: a session saved through the
/// admin must not already be expired at validation time.
pub(crate) fn clean_session(record: &Record, ctx: &RuleContext, errors: &mut Violations) {
	if let Some(expire_date) = record.date_time("expire_date") {
		errors.check(
			"expire_date",
			NotPastValidator::new(ctx.now).validate(&expire_date),
		);
	}
}

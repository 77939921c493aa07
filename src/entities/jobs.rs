//! Job-board entities: categories, companies, and job listings.

use crate::entities::{
	optional_email, optional_flag, optional_url, require_non_blank, require_not_before,
};
use crate::errors::Violations;
use crate::record::Record;
use crate::registry::RuleContext;
use crate::schema::{EntitySchema, FieldDef, FieldType};
use crate::validators::{MinValueValidator, NotBeforeValidator, PositiveValidator, Validator};

pub(crate) static CATEGORY: EntitySchema = EntitySchema {
	table: "categories",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("name", FieldType::Text).with_max_length(255),
		FieldDef::new("icon", FieldType::Text).with_max_length(255),
		FieldDef::new("created_at", FieldType::DateTime),
		FieldDef::new("updated_at", FieldType::DateTime),
	],
};

pub(crate) fn clean_category(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "name", errors);
	require_not_before(record, "updated_at", "created_at", errors);
}

pub(crate) static COMPANY: EntitySchema = EntitySchema {
	table: "companies",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("name", FieldType::Text).with_max_length(255),
		FieldDef::new("website", FieldType::Text).with_max_length(255),
		FieldDef::new("description", FieldType::Text),
		FieldDef::new("created_at", FieldType::DateTime),
	],
};

pub(crate) fn clean_company(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "name", errors);
	optional_url(record, "website", errors);
}

pub(crate) static JOB: EntitySchema = EntitySchema {
	table: "jobs",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("title", FieldType::Text).with_max_length(255),
		FieldDef::new("location", FieldType::Text).with_max_length(255),
		FieldDef::new("province", FieldType::Text).with_max_length(255),
		FieldDef::new("type_work", FieldType::Text).with_max_length(255),
		FieldDef::new("salary", FieldType::Decimal),
		FieldDef::new("responsibilities", FieldType::Text),
		FieldDef::new("qualifications", FieldType::Text),
		FieldDef::new("total_vacancy", FieldType::Integer),
		FieldDef::new("published_at", FieldType::DateTime),
		FieldDef::new("due_date_to_apply", FieldType::Date),
		FieldDef::new("is_closed", FieldType::Integer),
		FieldDef::new("is_approved", FieldType::Integer),
		// Jobs store the company as free text rather than a reference.
		FieldDef::new("company_name", FieldType::Text).with_max_length(255),
		FieldDef::new("email_to_apply", FieldType::Text).with_max_length(255),
		FieldDef::new("website_to_apply", FieldType::Text).with_max_length(255),
		FieldDef::new("contact", FieldType::Text).with_max_length(255),
		FieldDef::new("category_id", FieldType::Integer),
		FieldDef::new("created_at", FieldType::DateTime),
		FieldDef::new("updated_at", FieldType::DateTime),
		FieldDef::new("description", FieldType::Text),
	],
};

pub(crate) fn clean_job(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "title", errors);

	// The application window must not close before the listing goes up. The
	// deadline is a plain date, so the publication timestamp is compared by
	// its calendar date.
	if let (Some(due_date), Some(published_at)) = (
		record.date("due_date_to_apply"),
		record.date_time("published_at"),
	) {
		errors.check(
			"due_date_to_apply",
			NotBeforeValidator::new(published_at.date_naive(), "published_at").validate(&due_date),
		);
	}

	// Strictly positive even though the column is nullable: a listing with
	// zero openings should be closed, not published.
	if let Some(total_vacancy) = record.integer("total_vacancy") {
		errors.check(
			"total_vacancy",
			PositiveValidator::new().validate(&total_vacancy),
		);
	}

	if let Some(salary) = record.decimal("salary") {
		errors.check("salary", MinValueValidator::new(0.0).validate(&salary));
	}

	optional_flag(record, "is_closed", errors);
	optional_flag(record, "is_approved", errors);
	optional_email(record, "email_to_apply", errors);
	optional_url(record, "website_to_apply", errors);
	require_not_before(record, "updated_at", "created_at", errors);
}

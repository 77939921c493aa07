//! Blog entities: posts, comments, and comment replies.

use crate::entities::{require_non_blank, require_not_before};
use crate::errors::Violations;
use crate::record::Record;
use crate::registry::RuleContext;
use crate::schema::{EntitySchema, FieldDef, FieldType};

pub(crate) static BLOG: EntitySchema = EntitySchema {
	table: "blogs",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("title", FieldType::Text).with_max_length(255),
		FieldDef::new("content", FieldType::Text),
		FieldDef::new("author_id", FieldType::Text).with_max_length(500),
		FieldDef::new("published_at", FieldType::DateTime),
		FieldDef::new("updated_at", FieldType::DateTime),
	],
};

pub(crate) fn clean_blog(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "title", errors);
	require_non_blank(record, "content", errors);
	require_not_before(record, "updated_at", "published_at", errors);
}

pub(crate) static COMMENT: EntitySchema = EntitySchema {
	table: "comments",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("blog_id", FieldType::Integer),
		FieldDef::new("author_id", FieldType::Text).with_max_length(500),
		FieldDef::new("content", FieldType::Text),
		FieldDef::new("created_at", FieldType::DateTime),
		FieldDef::new("updated_at", FieldType::DateTime),
	],
};

pub(crate) fn clean_comment(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "content", errors);
	require_not_before(record, "updated_at", "created_at", errors);
}

pub(crate) static COMMENT_REPLY: EntitySchema = EntitySchema {
	table: "comment_replies",
	fields: &[
		FieldDef::new("id", FieldType::Integer),
		FieldDef::new("comment_id", FieldType::Integer),
		FieldDef::new("author_id", FieldType::Text).with_max_length(500),
		FieldDef::new("content", FieldType::Text),
		FieldDef::new("created_at", FieldType::DateTime),
	],
};

pub(crate) fn clean_comment_reply(record: &Record, _ctx: &RuleContext, errors: &mut Violations) {
	require_non_blank(record, "content", errors);
}

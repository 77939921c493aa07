//! The entity registry and the validation entry points.
//!
//! Every known entity kind is registered once, at first use, with its schema
//! descriptor and rule function. The registry is read-only after that; all
//! callers share the same static instance.

use crate::entities::{accounts, auth, blog, internal, jobs};
use crate::errors::{Violation, Violations};
use crate::record::Record;
use crate::schema::EntitySchema;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Tag identifying which entity a candidate record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	Category,
	Company,
	Job,
	Blog,
	Comment,
	CommentReply,
	User,
	AuthGroup,
	AuthPermission,
	AuthUser,
	AuthGroupPermission,
	AuthUserGroup,
	AuthUserPermission,
	AdminLogEntry,
	ContentType,
	MigrationLog,
	Session,
}

impl EntityKind {
	pub fn as_str(self) -> &'static str {
		match self {
			EntityKind::Category => "category",
			EntityKind::Company => "company",
			EntityKind::Job => "job",
			EntityKind::Blog => "blog",
			EntityKind::Comment => "comment",
			EntityKind::CommentReply => "comment_reply",
			EntityKind::User => "user",
			EntityKind::AuthGroup => "auth_group",
			EntityKind::AuthPermission => "auth_permission",
			EntityKind::AuthUser => "auth_user",
			EntityKind::AuthGroupPermission => "auth_group_permission",
			EntityKind::AuthUserGroup => "auth_user_group",
			EntityKind::AuthUserPermission => "auth_user_permission",
			EntityKind::AdminLogEntry => "admin_log_entry",
			EntityKind::ContentType => "content_type",
			EntityKind::MigrationLog => "migration_log",
			EntityKind::Session => "session",
		}
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Per-call inputs shared by every rule function.
///
/// `now` is the single clock reading for the pass; only the session-expiry
/// rule consults it.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
	pub now: DateTime<Utc>,
}

type RuleFn = fn(&Record, &RuleContext, &mut Violations);

/// One registered entity: its schema descriptor plus its rule function.
pub struct EntityEntry {
	schema: &'static EntitySchema,
	rules: RuleFn,
}

impl EntityEntry {
	pub fn schema(&self) -> &'static EntitySchema {
		self.schema
	}
}

/// Read-only mapping from [`EntityKind`] to schema and rules.
pub struct Registry {
	entries: BTreeMap<EntityKind, EntityEntry>,
}

impl Registry {
	fn build() -> Self {
		let mut entries = BTreeMap::new();
		let mut register = |kind: EntityKind, schema: &'static EntitySchema, rules: RuleFn| {
			entries.insert(kind, EntityEntry { schema, rules });
		};

		register(EntityKind::Category, &jobs::CATEGORY, jobs::clean_category);
		register(EntityKind::Company, &jobs::COMPANY, jobs::clean_company);
		register(EntityKind::Job, &jobs::JOB, jobs::clean_job);
		register(EntityKind::Blog, &blog::BLOG, blog::clean_blog);
		register(EntityKind::Comment, &blog::COMMENT, blog::clean_comment);
		register(
			EntityKind::CommentReply,
			&blog::COMMENT_REPLY,
			blog::clean_comment_reply,
		);
		register(EntityKind::User, &accounts::USER, accounts::clean_user);
		register(EntityKind::AuthGroup, &auth::AUTH_GROUP, auth::clean_auth_group);
		register(
			EntityKind::AuthPermission,
			&auth::AUTH_PERMISSION,
			auth::clean_auth_permission,
		);
		register(EntityKind::AuthUser, &auth::AUTH_USER, auth::clean_auth_user);
		register(
			EntityKind::AuthGroupPermission,
			&auth::AUTH_GROUP_PERMISSION,
			auth::clean_auth_group_permission,
		);
		register(
			EntityKind::AuthUserGroup,
			&auth::AUTH_USER_GROUP,
			auth::clean_auth_user_group,
		);
		register(
			EntityKind::AuthUserPermission,
			&auth::AUTH_USER_PERMISSION,
			auth::clean_auth_user_permission,
		);
		register(
			EntityKind::AdminLogEntry,
			&internal::ADMIN_LOG_ENTRY,
			internal::clean_admin_log_entry,
		);
		register(
			EntityKind::ContentType,
			&internal::CONTENT_TYPE,
			internal::clean_content_type,
		);
		register(
			EntityKind::MigrationLog,
			&internal::MIGRATION_LOG,
			internal::clean_migration_log,
		);
		register(EntityKind::Session, &internal::SESSION, internal::clean_session);

		tracing::debug!(entities = entries.len(), "entity registry built");
		Registry { entries }
	}

	fn entry(&self, kind: EntityKind) -> &EntityEntry {
		self.entries
			.get(&kind)
			.expect("registry is built with an entry for every entity kind")
	}

	/// Schema descriptor for `kind` (table name and column definitions).
	pub fn schema(&self, kind: EntityKind) -> &'static EntitySchema {
		self.entry(kind).schema
	}

	/// All registered kinds, in registry order.
	pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
		self.entries.keys().copied()
	}

	/// Validates a candidate record against a caller-supplied clock reading.
	///
	/// Runs the schema-conformance pass, then the entity's rule set, and
	/// returns every violation found. The record is never mutated.
	pub fn validate_at(
		&self,
		kind: EntityKind,
		record: &Record,
		now: DateTime<Utc>,
	) -> Result<(), Vec<Violation>> {
		let entry = self.entry(kind);
		let mut errors = Violations::new();

		entry.schema.check(record, &mut errors);
		(entry.rules)(record, &RuleContext { now }, &mut errors);

		if !errors.is_empty() {
			tracing::trace!(
				kind = %kind,
				violations = errors.len(),
				"candidate record rejected"
			);
		}
		errors.into_result()
	}
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide entity registry, built on first use.
pub fn registry() -> &'static Registry {
	&REGISTRY
}

/// Validates a candidate record against a caller-supplied clock reading.
///
/// Deterministic given its arguments: the ambient clock is never read.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use meuemprego_validation::{EntityKind, Record, validate_at};
///
/// let record = Record::new().with("name", "Engineering");
/// assert!(validate_at(EntityKind::Category, &record, Utc::now()).is_ok());
/// ```
pub fn validate_at(
	kind: EntityKind,
	record: &Record,
	now: DateTime<Utc>,
) -> Result<(), Vec<Violation>> {
	registry().validate_at(kind, record, now)
}

/// Validates a candidate record, reading the clock once for the single
/// time-dependent rule (session expiry).
///
/// # Examples
///
/// ```
/// use meuemprego_validation::{EntityKind, Record, validate};
///
/// let record = Record::new().with("name", "");
/// let violations = validate(EntityKind::Category, &record).unwrap_err();
/// assert_eq!(violations[0].field, "name");
/// ```
pub fn validate(kind: EntityKind, record: &Record) -> Result<(), Vec<Violation>> {
	registry().validate_at(kind, record, Utc::now())
}

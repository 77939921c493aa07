//! Entity validation for the MeuEmprego admin dashboard.
//!
//! The admin subsystem builds a candidate [`Record`] from administrator input
//! and calls [`validate`] immediately before persistence. This crate decides
//! whether the record may be written, returning either acceptance or the full
//! ordered list of field-level [`Violation`]s:
//!
//! - a schema-conformance pass (field allowlist, column types, text widths)
//!   driven by the static per-entity schema descriptors, and
//! - a per-entity rule set (non-blank requirements, date ordering, numeric
//!   ranges, email/URL formats, boolean-as-integer flags).
//!
//! Validation never mutates the record and never touches storage. The single
//! time-dependent rule (session expiry) reads the clock once per call, or
//! takes it explicitly via [`validate_at`].
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use meuemprego_validation::{EntityKind, Record, validate};
//!
//! let job = Record::new()
//!     .with("title", "Backend developer")
//!     .with("total_vacancy", 2i64)
//!     .with("published_at", Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap());
//! assert!(validate(EntityKind::Job, &job).is_ok());
//!
//! let violations = validate(EntityKind::Job, &job.clone().with("title", " ")).unwrap_err();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].field, "title");
//! ```

mod entities;
pub mod errors;
pub mod record;
pub mod registry;
pub mod schema;
pub mod validators;
pub mod value;

pub use errors::{ValidationError, ValidationResult, Violation, Violations};
pub use record::Record;
pub use registry::{EntityEntry, EntityKind, Registry, RuleContext, registry, validate, validate_at};
pub use schema::{EntitySchema, FieldDef, FieldType};
pub use value::Value;

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::errors::{ValidationError, ValidationResult, Violation, Violations};
	pub use crate::record::Record;
	pub use crate::registry::{EntityKind, registry, validate, validate_at};
	pub use crate::schema::{EntitySchema, FieldDef, FieldType};
	pub use crate::validators::Validator;
	pub use crate::value::Value;
}

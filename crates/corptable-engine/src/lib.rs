// Engine module - pure evaluation logic (query, ordering, form rules)
// This layer sits between the record types and the runtime/CLI layers.
// Nothing here owns or mutates records.

pub mod collation;
pub mod phone;
pub mod query;
pub mod validation;

pub use phone::{format_phone, is_valid_phone};
pub use query::evaluate;
pub use validation::{FieldIssue, IssueKind, check_field, validate_draft};

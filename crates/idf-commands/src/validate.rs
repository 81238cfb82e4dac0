//! Field-length validation for identity records.
//!
//! The target security system imposes fixed per-field limits; a record that
//! violates any of them cannot be mapped. Checks run in a fixed order
//! (mainframe ID, distributed ID, user name) and the first violation wins,
//! so a record is rejected for at most one field per pass.
//!
//! Lengths are checked against the RAW field value. Trimming happens later,
//! at render time, so whitespace padding counts toward the limit.

use std::fmt;

use serde::Serialize;

use idf_model::Identity;

/// Maximum length of a mainframe user ID.
pub const MAX_LENGTH_MAINFRAME_ID: usize = 8;

/// Maximum length of a distributed user ID.
pub const MAX_LENGTH_DISTRIBUTED_ID: usize = 246;

/// Maximum length of the user-facing name label.
pub const MAX_LENGTH_USER_NAME: usize = 32;

/// The identity fields subject to a length limit, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    MainframeId,
    DistributedId,
    UserName,
}

impl Field {
    /// Operator-facing field description, as used in warning messages.
    pub fn description(self) -> &'static str {
        match self {
            Field::MainframeId => "mainframe user ID",
            Field::DistributedId => "distributed user ID",
            Field::UserName => "user name",
        }
    }

    /// Maximum allowed length for this field.
    pub fn limit(self) -> usize {
        match self {
            Field::MainframeId => MAX_LENGTH_MAINFRAME_ID,
            Field::DistributedId => MAX_LENGTH_DISTRIBUTED_ID,
            Field::UserName => MAX_LENGTH_USER_NAME,
        }
    }

    fn value_of(self, identity: &Identity) -> &str {
        match self {
            Field::MainframeId => &identity.mainframe_id,
            Field::DistributedId => &identity.distributed_id,
            Field::UserName => &identity.user_name,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A rejected record, with everything the operator message needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub field: Field,
    pub value: String,
    pub limit: usize,
    pub user_name: String,
}

impl Rejection {
    /// The warning text reported for this rejection.
    pub fn message(&self) -> String {
        format!(
            "The {} '{}' has exceeded maximum length of {} characters. \
             Identity mapping for the user '{}' has not been created.",
            self.field.description(),
            self.value,
            self.limit,
            self.user_name
        )
    }
}

/// Per-record validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Rejected(Rejection),
}

/// Validate one identity record against the field-length limits.
///
/// Pure check: no I/O, no logging. The caller decides how to report a
/// [`Rejection`].
pub fn validate(identity: &Identity) -> ValidationOutcome {
    for field in [Field::MainframeId, Field::DistributedId, Field::UserName] {
        let value = field.value_of(identity);
        if !has_valid_length(value, field.limit()) {
            return ValidationOutcome::Rejected(Rejection {
                field,
                value: value.to_string(),
                limit: field.limit(),
                user_name: identity.user_name.clone(),
            });
        }
    }
    ValidationOutcome::Valid
}

/// True when `value` fits the limit. Counted in characters, on the raw
/// (untrimmed) value.
fn has_valid_length(value: &str, max_length: usize) -> bool {
    value.chars().count() <= max_length
}

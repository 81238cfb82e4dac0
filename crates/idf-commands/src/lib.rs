//! Identity-mapping command generation.
//!
//! Validates identity records against the target security system's field
//! limits, renders each valid record into the mapping-command template, and
//! aggregates the batch: skipped records degrade the batch to `Warning`, a
//! batch with no valid records fails fatally.

pub mod error;
pub mod generate;
pub mod render;
pub mod templates;
pub mod validate;

pub use error::{CommandsError, Result};
pub use generate::{Batch, generate};
pub use render::{Renderer, escape_single_quotes};
pub use templates::CommandTemplates;
pub use validate::{
    Field, MAX_LENGTH_DISTRIBUTED_ID, MAX_LENGTH_MAINFRAME_ID, MAX_LENGTH_USER_NAME, Rejection,
    ValidationOutcome, validate,
};

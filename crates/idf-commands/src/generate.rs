//! Batch command generation.
//!
//! One synchronous pass over the records in input order: validate, render,
//! collect. Rejected records are skipped with a warning; the batch only
//! fails as a whole when nothing survives validation.

use tracing::{debug, warn};

use idf_model::{ExitStatus, Identity};

use crate::error::{CommandsError, Result};
use crate::render::Renderer;
use crate::templates::CommandTemplates;
use crate::validate::{Rejection, ValidationOutcome, validate};

/// The outcome of a successful (possibly degraded) batch.
#[derive(Debug)]
pub struct Batch {
    /// Rendered commands in input order, refresh command last.
    pub commands: Vec<String>,
    /// `Normal` when every record mapped, `Warning` when some were skipped.
    pub status: ExitStatus,
    /// The skipped records, in input order.
    pub rejections: Vec<Rejection>,
}

/// Generate the mapping commands for a batch of identity records.
///
/// Each valid record contributes exactly one command; rejected records are
/// reported via `tracing::warn!` as the batch proceeds and contribute
/// nothing. On success the fixed refresh command is appended as the final
/// element.
///
/// # Errors
///
/// [`CommandsError::EmptyBatch`] when no record passes validation (or the
/// input is empty): no commands are returned and the refresh command is not
/// appended. Template errors surface as [`CommandsError::Template`] /
/// [`CommandsError::Render`].
pub fn generate(
    identities: &[Identity],
    registry: &str,
    templates: &CommandTemplates<'_>,
) -> Result<Batch> {
    let renderer = Renderer::new(templates, registry)?;

    let mut commands = Vec::with_capacity(identities.len() + 1);
    let mut rejections = Vec::new();
    let mut status = ExitStatus::Normal;

    for identity in identities {
        match validate(identity) {
            ValidationOutcome::Valid => {
                commands.push(renderer.render(identity)?);
            }
            ValidationOutcome::Rejected(rejection) => {
                warn!("{}", rejection.message());
                status = status.escalate(ExitStatus::Warning);
                rejections.push(rejection);
            }
        }
    }

    if commands.is_empty() {
        return Err(CommandsError::EmptyBatch);
    }

    commands.push(templates.refresh.to_string());
    debug!(
        commands = commands.len(),
        skipped = rejections.len(),
        "batch generated"
    );

    Ok(Batch {
        commands,
        status,
        rejections,
    })
}

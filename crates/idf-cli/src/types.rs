use std::path::PathBuf;

use idf_commands::Rejection;
use idf_model::ExitStatus;

/// Result of a `map` run, for summary printing and exit-code mapping.
#[derive(Debug)]
pub struct MapResult {
    pub registry: String,
    /// Records read from the identity file.
    pub records: usize,
    /// Records that produced a mapping command.
    pub mapped: usize,
    /// Records skipped by validation, in input order.
    pub rejections: Vec<Rejection>,
    pub status: ExitStatus,
    /// Destination file; `None` means the commands went to stdout.
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

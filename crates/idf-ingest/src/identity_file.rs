//! Identity-file reader.
//!
//! The identity file is a CSV with a header row and three required columns:
//! `mainframeId`, `distributedId`, `userName`. Columns are located by name,
//! so their order does not matter and extra columns are ignored. Values are
//! passed through untouched: the generator validates raw (untrimmed) field
//! values, so no cleanup happens here.

use std::path::Path;

use tracing::debug;

use idf_model::Identity;

use crate::error::IngestError;

const COLUMN_MAINFRAME_ID: &str = "mainframeId";
const COLUMN_DISTRIBUTED_ID: &str = "distributedId";
const COLUMN_USER_NAME: &str = "userName";

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn require_column(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, IngestError> {
    header_index(headers, name).ok_or_else(|| IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

/// Read the ordered identity records from a CSV identity file.
pub fn read_identities(path: &Path) -> Result<Vec<Identity>, IngestError> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();

    let idx_mainframe = require_column(&headers, COLUMN_MAINFRAME_ID, path)?;
    let idx_distributed = require_column(&headers, COLUMN_DISTRIBUTED_ID, path)?;
    let idx_user_name = require_column(&headers, COLUMN_USER_NAME, path)?;

    let mut identities = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::csv(path, &e))?;
        identities.push(Identity {
            mainframe_id: row.get(idx_mainframe).unwrap_or("").to_string(),
            distributed_id: row.get(idx_distributed).unwrap_or("").to_string(),
            user_name: row.get(idx_user_name).unwrap_or("").to_string(),
        });
    }

    debug!(path = %path.display(), records = identities.len(), "identity file read");
    Ok(identities)
}

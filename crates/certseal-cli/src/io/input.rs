use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Read a UTF-8 text file (PEM keys).
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read a batch rows file: a JSON array of string arrays.
///
/// CSV or spreadsheet parsing belongs to the data layer; the CLI takes
/// already-structured rows.
pub fn read_rows_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let raw = read_text_file(path)?;
    let rows: Vec<Vec<String>> =
        serde_json::from_str(&raw).map_err(|e| anyhow!("invalid rows json: {e}"))?;
    Ok(rows)
}

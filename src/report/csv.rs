//! CSV persistence
//!
//! One session appends to one file named at session start. The header is
//! written only when the file does not already exist, so pointing a second
//! session at the same file keeps the rows uniform.

use crate::domain::TestResult;
use crate::error::Result;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

/// Append one result row, writing the header first on a fresh file
pub fn append_result(path: &Path, result: &TestResult) -> Result<()> {
    let file_exists = path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(result)?;
    writer.flush()?;

    debug!(path = %path.display(), "appended result row");
    Ok(())
}

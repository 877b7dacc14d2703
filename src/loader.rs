//! CSV loader for quiz exports.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{QuizError, QuizResult};
use crate::table::Table;

/// Reads the export at `path` into a raw, headerless [`Table`].
///
/// # Errors
///
/// [`QuizError::Read`] if the file cannot be opened, [`QuizError::Load`] if
/// it is not valid UTF-8 CSV.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_table(path: &Path) -> QuizResult<Table> {
    let bytes = std::fs::read(path).map_err(|source| QuizError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_table(&bytes).map_err(|source| QuizError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes CSV bytes. Every record becomes a row, the first one included,
/// and records may differ in width.
pub fn parse_table(bytes: &[u8]) -> Result<Table, csv::Error> {
    // Zoom writes a UTF-8 BOM ahead of the first cell.
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = Table::from_records(rows);
    debug!(rows = table.len(), columns = table.width(), "CSV decoded");
    Ok(table)
}

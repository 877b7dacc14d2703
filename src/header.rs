//! Locates the quiz marker row and promotes the row after it to headers.

use regex::Regex;
use tracing::debug;

use crate::error::{QuizError, QuizResult};
use crate::table::Table;

/// Marker text: a number followed by a fixed suffix, e.g. `3주차 POP QUIZ`.
#[derive(Debug, Clone)]
pub struct Marker {
    pattern: Regex,
}

impl Marker {
    pub fn new(suffix: &str) -> QuizResult<Self> {
        let source = format!(r"\d+{}", regex::escape(suffix));
        let pattern = Regex::new(&source).map_err(|e| QuizError::InvalidPattern {
            pattern: source.clone(),
            source: e,
        })?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Scans column 0 for the first marker row and returns the rows below the
/// row that follows it, using that row's values as column names.
///
/// # Errors
///
/// [`QuizError::HeaderNotFound`] if no row matches,
/// [`QuizError::MissingHeaderRow`] if the marker is on the last row.
#[tracing::instrument(skip_all, fields(marker = marker.as_str(), rows = raw.len()))]
pub fn locate_header(raw: Table, marker: &Marker) -> QuizResult<Table> {
    let marker_row = raw
        .column(0)
        .position(|cell| marker.is_match(cell))
        .ok_or_else(|| QuizError::HeaderNotFound {
            pattern: marker.as_str().to_string(),
        })?;

    let header_row = marker_row + 1;
    if header_row >= raw.len() {
        return Err(QuizError::MissingHeaderRow { marker_row });
    }

    let mut rows = raw.rows;
    let body = rows.split_off(header_row + 1);
    let columns = rows.swap_remove(header_row);

    debug!(marker_row, data_rows = body.len(), "Header promoted");
    Ok(Table::new(columns, body))
}

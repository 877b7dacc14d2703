//! Extracts the quiz date from the export's metadata column.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{QuizError, QuizResult};
use crate::table::Table;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}\.\d{1,2}\.\d{1,2}").expect("static date pattern"));

/// A `YYYY.M.D` date exactly as written in the export (no zero padding added).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDate {
    raw: String,
}

impl QuizDate {
    /// Filesystem-safe token, e.g. `2024_3_5`.
    pub fn token(&self) -> String {
        self.raw.replace('.', "_")
    }

    /// `<token>_QUIZ.xlsx`
    pub fn report_file_name(&self) -> String {
        format!("{}_QUIZ.xlsx", self.token())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Returns the first `YYYY.M.D` match found scanning column `column` top to bottom.
///
/// # Errors
///
/// [`QuizError::DateNotFound`] if no cell in the column contains a date.
#[tracing::instrument(skip(raw), fields(rows = raw.len()))]
pub fn extract_date(raw: &Table, column: usize) -> QuizResult<QuizDate> {
    raw.column(column)
        .find_map(|cell| DATE_PATTERN.find(cell))
        .map(|m| QuizDate {
            raw: m.as_str().to_string(),
        })
        .ok_or(QuizError::DateNotFound { column })
}

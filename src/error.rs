//! Error taxonomy for the grading pipeline.
//!
//! Every variant names the stage that failed and the input that caused it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("load: cannot parse CSV {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("load: cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("header: no row in column 0 matches marker `{pattern}`")]
    HeaderNotFound { pattern: String },

    #[error("header: marker found at row {marker_row} but no row follows it to use as header")]
    MissingHeaderRow { marker_row: usize },

    #[error("date: no YYYY.M.D value in column {column}")]
    DateNotFound { column: usize },

    #[error("{stage}: column `{column}` not found")]
    ColumnNotFound { stage: &'static str, column: String },

    #[error("config: invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("grade: answer set is empty after trimming")]
    EmptyAnswerSet,

    #[error("config: cannot load {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("report: cannot write {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Result type for pipeline operations
pub type QuizResult<T> = Result<T, QuizError>;

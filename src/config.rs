//! Run configuration.
//!
//! Every field has a default matching Zoom's Korean-locale quiz export, so a
//! config file is only needed when the export layout differs. Stored as JSON:
//! ```json
//! {
//!   "marker_suffix": "주차 POP QUIZ",
//!   "answer_column": "3주차 POP QUIZ",
//!   "output_dir": "reports"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{QuizError, QuizResult};
use crate::grader::AnswerColumn;
use crate::report::ReportLayout;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Text after the week number on the marker row.
    pub marker_suffix: String,
    pub submitter_column: String,
    /// The answer column sits right after this one unless `answer_column` is set.
    pub timestamp_column: String,
    pub answer_column: Option<String>,
    /// Position of the metadata column holding the quiz date.
    pub date_column: usize,
    pub output_dir: PathBuf,
    pub sheet_name: String,
    pub processed_label: String,
    pub unprocessed_label: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let layout = ReportLayout::default();
        Self {
            marker_suffix: "주차 POP QUIZ".to_string(),
            submitter_column: "사용자 이름".to_string(),
            timestamp_column: "제출 날짜 및 시간".to_string(),
            answer_column: None,
            date_column: 3,
            output_dir: PathBuf::from("."),
            sheet_name: layout.sheet_name,
            processed_label: layout.processed_label,
            unprocessed_label: layout.unprocessed_label,
        }
    }
}

impl QuizConfig {
    /// Loads the config from a JSON file at `path`. Missing fields keep their defaults.
    pub fn load(path: &Path) -> QuizResult<Self> {
        let to_error = |reason: String| QuizError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let content = std::fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| to_error(e.to_string()))
    }

    pub fn answer_column(&self) -> AnswerColumn {
        match &self.answer_column {
            Some(name) => AnswerColumn::Named(name.clone()),
            None => AnswerColumn::After(self.timestamp_column.clone()),
        }
    }

    pub fn report_layout(&self) -> ReportLayout {
        ReportLayout {
            sheet_name: self.sheet_name.clone(),
            processed_label: self.processed_label.clone(),
            unprocessed_label: self.unprocessed_label.clone(),
        }
    }
}

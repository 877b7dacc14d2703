//! Submission grading.
//!
//! Splits each submitted answer text into tokens, checks every token against
//! the accepted answer set and classifies the submission as correct, partial
//! or incorrect.

pub mod answers;
pub mod grade;
pub mod types;
pub mod verdict;

pub use answers::{AnswerSet, tokenize};
pub use grade::{AnswerColumn, grade_answer, grade_table};
pub use types::{GradedSubmission, GradingResult};
pub use verdict::Verdict;

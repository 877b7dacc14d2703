//! Data types produced by the grader.

use serde::Serialize;

use super::verdict::Verdict;

/// Report column headers for a graded submission, in output order.
pub const GRADED_COLUMNS: [&str; 5] = ["사용자 이름", "정답", "맞은 개수", "틀린 개수", "제출 답안"];

/// Token-level grading outcome for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradingResult {
    pub verdict: Verdict,
    pub correct_count: usize,
    pub incorrect_count: usize,
}

/// One graded row: who submitted, how it scored, and what they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradedSubmission {
    pub submitter: String,
    #[serde(flatten)]
    pub result: GradingResult,
    pub answer_text: String,
}

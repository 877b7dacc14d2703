//! Submitter identifier classification and normalization.
//!
//! Zoom display names are expected to combine a 10-digit student number and
//! a name, in either order (`2019123456홍길동` or `홍길동2019123456`). Names
//! that decode are normalized to number-then-name and split into student id
//! and name; everything else is passed through untouched for manual review.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::grader::GradedSubmission;

/// Length of a student number.
pub const STUDENT_ID_LEN: usize = 10;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static punctuation pattern"));

// Prefix test only: content after a match is not inspected.
static VALID_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{10}\w+|\w+\d{10})").expect("static prefix pattern"));

static NAME_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\D+)(\d{10})").expect("static name-first pattern"));

static NUMBER_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{10})(.+)$").expect("static number-first pattern"));

/// Drops punctuation and symbols, then all whitespace.
pub fn compact(raw: &str) -> String {
    PUNCTUATION
        .replace_all(raw, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// `true` if `compacted` starts with 10 digits and more word characters, or
/// with word characters followed by 10 digits.
pub fn has_valid_prefix(compacted: &str) -> bool {
    VALID_PREFIX.is_match(compacted)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("`{0}` does not start with a student number and name")]
    InvalidPrefix(String),
    #[error("`{0}` has a valid prefix but no number-then-name or name-then-number form")]
    Undecodable(String),
}

/// Order the identifier was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IdentifierForm {
    NumberFirst,
    NameFirst,
}

/// A decoded identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentIdentity {
    pub student_id: String,
    pub name: String,
    pub form: IdentifierForm,
}

impl StudentIdentity {
    /// Decodes a compacted identifier.
    ///
    /// Name-then-number input keeps only the leading name run and the first
    /// 10 digits after it; anything trailing is dropped. Number-then-name
    /// input splits after the 10th character.
    ///
    /// # Errors
    ///
    /// [`IdentifierError::InvalidPrefix`] if [`has_valid_prefix`] rejects
    /// the input, [`IdentifierError::Undecodable`] if it passes the prefix
    /// test but fits neither form (e.g. `12ab1234567890`).
    pub fn parse(compacted: &str) -> Result<Self, IdentifierError> {
        if !has_valid_prefix(compacted) {
            return Err(IdentifierError::InvalidPrefix(compacted.to_string()));
        }

        if let Some(caps) = NAME_FIRST.captures(compacted) {
            return Ok(Self {
                student_id: caps[2].to_string(),
                name: caps[1].to_string(),
                form: IdentifierForm::NameFirst,
            });
        }

        if let Some(caps) = NUMBER_FIRST.captures(compacted) {
            return Ok(Self {
                student_id: caps[1].to_string(),
                name: caps[2].to_string(),
                form: IdentifierForm::NumberFirst,
            });
        }

        Err(IdentifierError::Undecodable(compacted.to_string()))
    }

    /// Number-then-name rendering.
    pub fn normalized(&self) -> String {
        format!("{}{}", self.student_id, self.name)
    }
}

/// A graded submission whose identifier decoded. `submission.submitter`
/// holds the normalized identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedSubmission {
    pub identity: StudentIdentity,
    pub submission: GradedSubmission,
}

/// Graded rows split by identifier validity, each side in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub processed: Vec<ProcessedSubmission>,
    pub unprocessed: Vec<GradedSubmission>,
}

/// Compacts every submitter identifier and partitions the rows.
///
/// Every input row ends up in exactly one side. Unprocessed rows carry the
/// compacted identifier.
#[tracing::instrument(skip_all, fields(rows = graded.len()))]
pub fn classify(graded: Vec<GradedSubmission>) -> Partition {
    let mut partition = Partition::default();

    for mut submission in graded {
        submission.submitter = compact(&submission.submitter);

        match StudentIdentity::parse(&submission.submitter) {
            Ok(identity) => {
                submission.submitter = identity.normalized();
                partition
                    .processed
                    .push(ProcessedSubmission { identity, submission });
            }
            Err(e) => {
                if matches!(e, IdentifierError::Undecodable(_)) {
                    warn!(error = %e, "Identifier left unprocessed");
                }
                partition.unprocessed.push(submission);
            }
        }
    }

    info!(
        processed = partition.processed.len(),
        unprocessed = partition.unprocessed.len(),
        "Identifiers classified"
    );
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grader::{GradingResult, Verdict};

    fn submission(submitter: &str) -> GradedSubmission {
        GradedSubmission {
            submitter: submitter.to_string(),
            result: GradingResult {
                verdict: Verdict::Correct,
                correct_count: 1,
                incorrect_count: 0,
            },
            answer_text: "a".to_string(),
        }
    }

    #[test]
    fn test_compact_strips_symbols_and_spaces() {
        assert_eq!(compact("2019123456 홍길동"), "2019123456홍길동");
        assert_eq!(compact("(홍길동) 2019-123-456\t!"), "홍길동2019123456");
        assert_eq!(compact("kim_jr 2019123456"), "kim_jr2019123456");
    }

    #[test]
    fn test_prefix_forms() {
        assert!(has_valid_prefix("2019123456홍길동"));
        assert!(has_valid_prefix("홍길동2019123456"));
        assert!(!has_valid_prefix("2019123456"));
        assert!(!has_valid_prefix("홍길동"));
        assert!(!has_valid_prefix("홍길동201912345"));
    }

    #[test]
    fn test_prefix_tolerates_trailing_content() {
        assert!(has_valid_prefix("홍길동2019123456추가"));
        assert!(has_valid_prefix("12ab1234567890"));
    }

    #[test]
    fn test_number_first_passes_through() {
        let id = StudentIdentity::parse("2019123456홍길동").unwrap();

        assert_eq!(id.form, IdentifierForm::NumberFirst);
        assert_eq!(id.student_id, "2019123456");
        assert_eq!(id.name, "홍길동");
        assert_eq!(id.normalized(), "2019123456홍길동");
    }

    #[test]
    fn test_name_first_is_reordered() {
        let id = StudentIdentity::parse("홍길동2019123456").unwrap();

        assert_eq!(id.form, IdentifierForm::NameFirst);
        assert_eq!(id.student_id, "2019123456");
        assert_eq!(id.name, "홍길동");
        assert_eq!(id.normalized(), "2019123456홍길동");
    }

    #[test]
    fn test_name_first_drops_trailing_content() {
        let id = StudentIdentity::parse("홍길동2019123456추가").unwrap();
        assert_eq!(id.normalized(), "2019123456홍길동");
    }

    #[test]
    fn test_number_first_splits_after_ten_chars() {
        let id = StudentIdentity::parse("12345678901김").unwrap();
        assert_eq!(id.student_id, "1234567890");
        assert_eq!(id.name, "1김");
    }

    #[test]
    fn test_valid_prefix_without_form_is_undecodable() {
        let result = StudentIdentity::parse("12ab1234567890");
        assert!(matches!(result, Err(IdentifierError::Undecodable(_))));

        let result = StudentIdentity::parse("ab12cd1234567890");
        assert!(matches!(result, Err(IdentifierError::Undecodable(_))));
    }

    #[test]
    fn test_invalid_prefix() {
        let result = StudentIdentity::parse("홍길동");
        assert_eq!(result, Err(IdentifierError::InvalidPrefix("홍길동".into())));
    }

    #[test]
    fn test_classify_partitions_in_order() {
        let graded = vec![
            submission("2019123456 홍길동"),
            submission("guest"),
            submission("김철수(2020000001)"),
            submission("12ab1234567890"),
            submission("이영희 2021999999"),
        ];

        let partition = classify(graded);

        let processed: Vec<_> = partition
            .processed
            .iter()
            .map(|p| p.submission.submitter.as_str())
            .collect();
        assert_eq!(
            processed,
            vec!["2019123456홍길동", "2020000001김철수", "2021999999이영희"]
        );

        let unprocessed: Vec<_> = partition
            .unprocessed
            .iter()
            .map(|s| s.submitter.as_str())
            .collect();
        assert_eq!(unprocessed, vec!["guest", "12ab1234567890"]);
    }

    #[test]
    fn test_classify_conserves_rows() {
        let graded: Vec<_> = ["a", "2019123456b", "", "c2019123456", "!!!", "1234567890"]
            .into_iter()
            .map(submission)
            .collect();
        let total = graded.len();

        let partition = classify(graded);

        assert_eq!(partition.processed.len() + partition.unprocessed.len(), total);
    }

    #[test]
    fn test_split_is_total_for_processed_rows() {
        let graded: Vec<_> = ["2019123456홍길동", "홍길동2019123456", "x0000000000y", "0000000000_"]
            .into_iter()
            .map(submission)
            .collect();

        for p in classify(graded).processed {
            assert_eq!(p.identity.student_id.chars().count(), STUDENT_ID_LEN);
            assert!(p.identity.student_id.chars().all(|c| c.is_ascii_digit()));
            let normalized = &p.submission.submitter;
            assert_eq!(&normalized[p.identity.student_id.len()..], p.identity.name);
        }
    }
}

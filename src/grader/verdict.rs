use serde::Serialize;
use std::fmt;

/// Outcome of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "정답")]
    Correct,
    #[serde(rename = "부분 정답")]
    Partial,
    #[serde(rename = "오답")]
    Incorrect,
}

impl Verdict {
    /// Classifies token counts.
    ///
    /// | correct | incorrect | verdict   |
    /// |---------|-----------|-----------|
    /// | 0       | any       | Incorrect |
    /// | > 0     | 0         | Correct   |
    /// | > 0     | > 0       | Partial   |
    pub fn from_counts(correct: usize, incorrect: usize) -> Self {
        match (correct, incorrect) {
            (0, _) => Verdict::Incorrect,
            (_, 0) => Verdict::Correct,
            _ => Verdict::Partial,
        }
    }

    /// Label written to the report.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Correct => "정답",
            Verdict::Partial => "부분 정답",
            Verdict::Incorrect => "오답",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_counts(0, 0), Verdict::Incorrect);
        assert_eq!(Verdict::from_counts(0, 3), Verdict::Incorrect);
        assert_eq!(Verdict::from_counts(1, 0), Verdict::Correct);
        assert_eq!(Verdict::from_counts(4, 0), Verdict::Correct);
        assert_eq!(Verdict::from_counts(1, 1), Verdict::Partial);
        assert_eq!(Verdict::from_counts(2, 5), Verdict::Partial);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Verdict::Correct.to_string(), "정답");
        assert_eq!(Verdict::Partial.to_string(), "부분 정답");
        assert_eq!(Verdict::Incorrect.to_string(), "오답");
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Verdict::Partial).unwrap(),
            "\"부분 정답\""
        );
    }
}

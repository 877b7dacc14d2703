//! Accepted answers and submission tokenizing.

use std::collections::HashSet;

use crate::error::{QuizError, QuizResult};

/// Accepted answers, stored trimmed and lowercased.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    answers: HashSet<String>,
}

impl AnswerSet {
    /// Builds the set from raw tokens. Blank tokens are dropped.
    ///
    /// # Errors
    ///
    /// [`QuizError::EmptyAnswerSet`] if nothing is left after trimming.
    pub fn new<I, S>(tokens: I) -> QuizResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let answers: HashSet<String> = tokens
            .into_iter()
            .map(|t| normalize(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();

        if answers.is_empty() {
            return Err(QuizError::EmptyAnswerSet);
        }
        Ok(Self { answers })
    }

    /// Exact membership test for an already-normalized token.
    pub fn contains(&self, token: &str) -> bool {
        self.answers.contains(token)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Splits submitted text on newlines, then semicolons, into normalized
/// non-empty tokens in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| line.split(';'))
        .map(normalize)
        .filter(|t| !t.is_empty())
        .collect()
}

use tracing::{debug, info};

use super::answers::{AnswerSet, tokenize};
use super::types::{GradedSubmission, GradingResult};
use super::verdict::Verdict;
use crate::error::{QuizError, QuizResult};
use crate::table::Table;

/// How to find the column holding the submitted answer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerColumn {
    /// The column immediately to the right of the named one.
    After(String),
    /// The column with this exact name.
    Named(String),
}

impl AnswerColumn {
    /// Resolves the column position in `table`.
    ///
    /// # Errors
    ///
    /// [`QuizError::ColumnNotFound`] if the named column is missing or has
    /// no column after it.
    pub fn resolve(&self, table: &Table) -> QuizResult<usize> {
        let missing = |column: &str| QuizError::ColumnNotFound {
            stage: "grade",
            column: column.to_string(),
        };

        match self {
            AnswerColumn::After(label) => {
                let anchor = table.column_index(label).ok_or_else(|| missing(label))?;
                let answer = anchor + 1;
                if answer >= table.width() {
                    return Err(missing(&format!("<column after `{label}`>")));
                }
                Ok(answer)
            }
            AnswerColumn::Named(name) => table.column_index(name).ok_or_else(|| missing(name)),
        }
    }
}

/// Grades one submission text against `answers`.
pub fn grade_answer(text: &str, answers: &AnswerSet) -> GradingResult {
    let (correct_count, incorrect_count) =
        tokenize(text)
            .iter()
            .fold((0, 0), |(correct, incorrect), token| {
                if answers.contains(token) {
                    (correct + 1, incorrect)
                } else {
                    (correct, incorrect + 1)
                }
            });

    GradingResult {
        verdict: Verdict::from_counts(correct_count, incorrect_count),
        correct_count,
        incorrect_count,
    }
}

/// Grades every row of `table`, keeping only the submitter, the result and
/// the raw answer text.
///
/// # Errors
///
/// [`QuizError::ColumnNotFound`] if the submitter or answer column is missing.
#[tracing::instrument(skip_all, fields(rows = table.len(), answers = answers.len()))]
pub fn grade_table(
    table: &Table,
    submitter_column: &str,
    answer_column: &AnswerColumn,
    answers: &AnswerSet,
) -> QuizResult<Vec<GradedSubmission>> {
    let submitter_idx =
        table
            .column_index(submitter_column)
            .ok_or_else(|| QuizError::ColumnNotFound {
                stage: "grade",
                column: submitter_column.to_string(),
            })?;
    let answer_idx = answer_column.resolve(table)?;
    debug!(submitter_idx, answer_idx, answer_header = %table.columns[answer_idx], "Columns resolved");

    let graded: Vec<GradedSubmission> = (0..table.len())
        .map(|row| {
            let answer_text = table.cell(row, answer_idx).to_string();
            GradedSubmission {
                submitter: table.cell(row, submitter_idx).to_string(),
                result: grade_answer(&answer_text, answers),
                answer_text,
            }
        })
        .collect();

    let count = |v: Verdict| graded.iter().filter(|g| g.result.verdict == v).count();
    info!(
        total = graded.len(),
        correct = count(Verdict::Correct),
        partial = count(Verdict::Partial),
        incorrect = count(Verdict::Incorrect),
        "Submissions graded"
    );

    Ok(graded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn answers() -> AnswerSet {
        AnswerSet::new(["a", "b"]).unwrap()
    }

    fn quiz_table() -> Table {
        Table::new(
            row(&["#", "사용자 이름", "이메일", "제출 날짜 및 시간", "3주차 POP QUIZ"]),
            vec![
                row(&["1", "2019123456홍길동", "", "2024-03-05 10:01", "A;c\nb"]),
                row(&["2", "김철수2020000001", "", "2024-03-05 10:02", "b"]),
                row(&["3", "이영희", "", "2024-03-05 10:03", ""]),
                row(&["4", "anon"]),
            ],
        )
    }

    #[test]
    fn test_partial_scenario() {
        let result = grade_answer("A;c\nb", &answers());

        assert_eq!(result.correct_count, 2);
        assert_eq!(result.incorrect_count, 1);
        assert_eq!(result.verdict, Verdict::Partial);
    }

    #[test]
    fn test_all_correct() {
        let result = grade_answer(" a ; B ", &answers());
        assert_eq!(result.verdict, Verdict::Correct);
        assert_eq!((result.correct_count, result.incorrect_count), (2, 0));
    }

    #[test]
    fn test_empty_submission_is_incorrect() {
        let result = grade_answer("", &answers());
        assert_eq!(result.verdict, Verdict::Incorrect);
        assert_eq!((result.correct_count, result.incorrect_count), (0, 0));
    }

    #[test]
    fn test_counts_match_token_count() {
        let set = answers();
        for text in ["a", "x;y;z", "A\nb;;c\n", "  ", "b;b;b;q"] {
            let result = grade_answer(text, &set);
            assert_eq!(
                result.correct_count + result.incorrect_count,
                tokenize(text).len(),
                "text {text:?}"
            );
        }
    }

    #[test]
    fn test_answer_column_after_label() {
        let col = AnswerColumn::After("제출 날짜 및 시간".into());
        assert_eq!(col.resolve(&quiz_table()).unwrap(), 4);
    }

    #[test]
    fn test_answer_column_named() {
        let col = AnswerColumn::Named("3주차 POP QUIZ".into());
        assert_eq!(col.resolve(&quiz_table()).unwrap(), 4);
    }

    #[test]
    fn test_answer_column_after_last_column_fails() {
        let col = AnswerColumn::After("3주차 POP QUIZ".into());
        let result = col.resolve(&quiz_table());
        assert!(matches!(result, Err(QuizError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_grade_table_projects_and_grades() {
        let col = AnswerColumn::After("제출 날짜 및 시간".into());
        let graded = grade_table(&quiz_table(), "사용자 이름", &col, &answers()).unwrap();

        assert_eq!(graded.len(), 4);
        assert_eq!(graded[0].submitter, "2019123456홍길동");
        assert_eq!(graded[0].result.verdict, Verdict::Partial);
        assert_eq!(graded[0].answer_text, "A;c\nb");
        assert_eq!(graded[1].result.verdict, Verdict::Correct);
        assert_eq!(graded[2].result.verdict, Verdict::Incorrect);
        // short row: answer cell is padded to empty
        assert_eq!(graded[3].answer_text, "");
        assert_eq!(graded[3].result.verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_grade_table_missing_submitter_column() {
        let col = AnswerColumn::After("제출 날짜 및 시간".into());
        let result = grade_table(&quiz_table(), "참가자", &col, &answers());

        match result {
            Err(QuizError::ColumnNotFound { stage, column }) => {
                assert_eq!(stage, "grade");
                assert_eq!(column, "참가자");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

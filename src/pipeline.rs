//! End-to-end run: load, locate header, grade, classify, write the report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::QuizConfig;
use crate::date::extract_date;
use crate::error::QuizResult;
use crate::grader::{AnswerSet, Verdict, grade_table};
use crate::header::{Marker, locate_header};
use crate::identifier::classify;
use crate::loader::load_table;
use crate::report::write_report;

/// Inputs for one grading run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub answers: Vec<String>,
    pub config: QuizConfig,
}

/// What a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub input: PathBuf,
    pub output: PathBuf,
    pub quiz_date: String,
    pub submissions: usize,
    pub processed: usize,
    pub unprocessed: usize,
    pub correct: usize,
    pub partial: usize,
    pub incorrect: usize,
}

/// Runs every stage in order. Any failure stops the run before the report
/// file is created.
#[tracing::instrument(skip_all, fields(input = %options.input.display()))]
pub fn run(options: &RunOptions) -> QuizResult<RunSummary> {
    let config = &options.config;
    let answers = AnswerSet::new(&options.answers)?;
    let marker = Marker::new(&config.marker_suffix)?;

    let raw = load_table(&options.input)?;
    let quiz_date = extract_date(&raw, config.date_column)?;
    info!(date = quiz_date.as_str(), "Quiz date found");

    let table = locate_header(raw, &marker)?;
    let graded = grade_table(
        &table,
        &config.submitter_column,
        &config.answer_column(),
        &answers,
    )?;

    let submissions = graded.len();
    let count = |v: Verdict| graded.iter().filter(|g| g.result.verdict == v).count();
    let (correct, partial, incorrect) = (
        count(Verdict::Correct),
        count(Verdict::Partial),
        count(Verdict::Incorrect),
    );

    let partition = classify(graded);

    let output = config.output_dir.join(quiz_date.report_file_name());
    write_report(
        &output,
        &partition.processed,
        &partition.unprocessed,
        &config.report_layout(),
    )?;

    Ok(RunSummary {
        generated_at: Utc::now(),
        input: options.input.clone(),
        output,
        quiz_date: quiz_date.token(),
        submissions,
        processed: partition.processed.len(),
        unprocessed: partition.unprocessed.len(),
        correct,
        partial,
        incorrect,
    })
}

//! CLI entry point for the Zoom quiz grader.
//!
//! Grades a Zoom Q&A (quiz) CSV export against an answer list and writes a
//! `<date>_QUIZ.xlsx` report splitting recognised students from everyone else.

use anyhow::{Context, Result};
use clap::Parser;
use quiz_grader::config::QuizConfig;
use quiz_grader::pipeline::{RunOptions, run};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "quiz_grader")]
#[command(about = "Zoom Q&A (Quiz) Answer Processor", long_about = None)]
struct Cli {
    /// Path to the csv file
    #[arg(short, long, value_name = "FILE")]
    path: PathBuf,

    /// Accepted answers (one or more)
    #[arg(short, long, required = true, num_args = 1..)]
    answer: Vec<String>,

    /// Optional JSON file overriding column names, labels and output directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => QuizConfig::load(path)?,
        None => QuizConfig::default(),
    };

    let options = RunOptions {
        input: cli.path,
        answers: cli.answer,
        config,
    };

    let summary = run(&options)
        .with_context(|| format!("grading {} failed", options.input.display()))?;

    info!("{}", serde_json::to_string_pretty(&summary)?);
    info!(output = %summary.output.display(), "Done");
    Ok(())
}

/// Colored stderr output plus a JSON daily-rolling log file.
///
/// The returned guard flushes the file writer when dropped.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/quiz_grader.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("quiz_grader.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

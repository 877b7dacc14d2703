//! Spreadsheet report writer.
//!
//! One sheet, two labeled blocks stacked vertically:
//!
//! ```text
//! row 0        processed label
//! row 2        processed headers
//! row 3..      processed rows
//! (one blank row)
//! row n + 4    unprocessed label
//! row n + 6    unprocessed headers
//! row n + 7..  unprocessed rows
//! ```

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use tracing::{debug, info};

use crate::error::{QuizError, QuizResult};
use crate::grader::GradedSubmission;
use crate::grader::types::GRADED_COLUMNS;
use crate::identifier::ProcessedSubmission;

/// Rows from a block's label down to its header row.
const LABEL_TO_HEADER: RowNum = 2;
/// Blank rows between the last row of one block and the next label.
const BLOCK_GAP: RowNum = 1;

/// Text placed in the sheet around the two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub sheet_name: String,
    pub processed_label: String,
    pub unprocessed_label: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            processed_label: "정상 처리 리스트".to_string(),
            unprocessed_label: "미처리 리스트".to_string(),
        }
    }
}

/// A single cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Count(usize),
}

/// A record that can be written as one report row.
pub trait ReportRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<Cell<'_>>;
}

impl ReportRow for GradedSubmission {
    fn headers() -> Vec<&'static str> {
        GRADED_COLUMNS.to_vec()
    }

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.submitter),
            Cell::Text(self.result.verdict.label()),
            Cell::Count(self.result.correct_count),
            Cell::Count(self.result.incorrect_count),
            Cell::Text(&self.answer_text),
        ]
    }
}

impl ReportRow for ProcessedSubmission {
    fn headers() -> Vec<&'static str> {
        let mut headers = vec!["학번", "이름"];
        headers.extend(GradedSubmission::headers());
        headers
    }

    fn cells(&self) -> Vec<Cell<'_>> {
        let mut cells = vec![
            Cell::Text(&self.identity.student_id),
            Cell::Text(&self.identity.name),
        ];
        cells.extend(self.submission.cells());
        cells
    }
}

/// Row of the label for a block starting at `start`, and the row of its headers.
fn block_rows(start: RowNum) -> (RowNum, RowNum) {
    (start, start + LABEL_TO_HEADER)
}

/// Row where the block after one holding `rows` data rows at `start` begins.
pub fn next_block_start(start: RowNum, rows: usize) -> RowNum {
    let (_, header_row) = block_rows(start);
    header_row + 1 + rows as RowNum + BLOCK_GAP
}

fn write_block<R: ReportRow>(
    worksheet: &mut Worksheet,
    start: RowNum,
    label: &str,
    rows: &[R],
    header_format: &Format,
) -> Result<RowNum, XlsxError> {
    let (label_row, header_row) = block_rows(start);

    worksheet.write_string(label_row, 0, label)?;

    for (col, header) in R::headers().into_iter().enumerate() {
        worksheet.write_string_with_format(header_row, col as ColNum, header, header_format)?;
    }

    for (i, record) in rows.iter().enumerate() {
        let row = header_row + 1 + i as RowNum;
        for (col, cell) in record.cells().into_iter().enumerate() {
            let col = col as ColNum;
            match cell {
                Cell::Text(text) => worksheet.write_string(row, col, text)?,
                Cell::Count(n) => worksheet.write_number(row, col, n as f64)?,
            };
        }
    }

    debug!(label, start, rows = rows.len(), "Block written");
    Ok(next_block_start(start, rows.len()))
}

fn build_workbook(
    processed: &[ProcessedSubmission],
    unprocessed: &[GradedSubmission],
    layout: &ReportLayout,
) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&layout.sheet_name)?;

    let next = write_block(
        worksheet,
        0,
        &layout.processed_label,
        processed,
        &header_format,
    )?;
    write_block(
        worksheet,
        next,
        &layout.unprocessed_label,
        unprocessed,
        &header_format,
    )?;

    Ok(workbook)
}

/// Writes both blocks to a new workbook at `path`.
///
/// Nothing is written to disk unless the whole sheet was built.
///
/// # Errors
///
/// [`QuizError::Report`] if the sheet cannot be built or saved.
#[tracing::instrument(skip(processed, unprocessed, layout), fields(path = %path.display()))]
pub fn write_report(
    path: &Path,
    processed: &[ProcessedSubmission],
    unprocessed: &[GradedSubmission],
    layout: &ReportLayout,
) -> QuizResult<()> {
    let to_error = |source: XlsxError| QuizError::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = build_workbook(processed, unprocessed, layout).map_err(to_error)?;
    workbook.save(path).map_err(to_error)?;

    info!(
        processed = processed.len(),
        unprocessed = unprocessed.len(),
        "Report saved"
    );
    Ok(())
}

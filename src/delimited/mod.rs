//! CSV support - read all records, transform one column, write all records

use crate::error::{ProcessError, ProcessResult};
use crate::transform::Transform;
use crate::types::{ColumnSelector, ProcessSummary, TabularFormat};
use std::path::Path;
use tracing::{debug, info};

/// One CSV line as owned fields
pub type Record = Vec<String>;

/// Read every record of a CSV file. The first record is treated as data
/// like any other; records may differ in length.
pub fn read_records(path: &Path) -> ProcessResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ProcessError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ProcessError::Read(format!("CSV: {e}")))?;
        records.push(record.iter().map(String::from).collect());
    }

    debug!(path = %path.display(), records = records.len(), "read CSV");
    Ok(records)
}

/// Write records to a new CSV file, flushing before returning.
pub fn write_records(path: &Path, records: &[Record]) -> ProcessResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ProcessError::Write(format!("creating {}: {}", path.display(), e)))?;

    for record in records {
        writer
            .write_record(record)
            .map_err(|e| ProcessError::Write(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| ProcessError::Write(e.to_string()))?;

    Ok(())
}

/// Apply `transform` to the selected column in place.
///
/// Record 0 is the header and fixes the valid column range. The value goes
/// into the field right of the column, appended when the record ends at the
/// column. Records without the column are left alone.
pub fn transform_records(
    records: &mut [Record],
    selector: &ColumnSelector,
    transform: &dyn Transform,
) -> ProcessResult<ProcessSummary> {
    let header = records.first().ok_or(ProcessError::EmptyFile)?;
    let column_index = selector.resolve(&header[..])?;

    let mut summary = ProcessSummary::new(TabularFormat::DelimitedText, column_index);

    for (idx, record) in records.iter_mut().enumerate().skip(1) {
        summary.data_rows += 1;

        if record.len() <= column_index {
            debug!(record = idx + 1, "record too short, skipping");
            summary.skipped_rows += 1;
            continue;
        }

        let processed = transform.apply(&record[column_index]);
        if record.len() == column_index + 1 {
            record.push(processed);
        } else {
            record[column_index + 1] = processed;
        }
        summary.transformed_rows += 1;
    }

    Ok(summary)
}

/// Transforms one column of a CSV file into a new CSV file.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedTextHandler;

impl DelimitedTextHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn process(
        &self,
        input: &Path,
        output: &Path,
        selector: &ColumnSelector,
        transform: &dyn Transform,
    ) -> ProcessResult<ProcessSummary> {
        let mut records = read_records(input)?;
        let summary = transform_records(&mut records, selector, transform)?;

        write_records(output, &records)?;
        info!(output = %output.display(), records = records.len(), "wrote CSV");

        Ok(summary)
    }
}

//! Spreadsheet handler - first sheet of an .xlsx workbook

use crate::error::{ProcessError, ProcessResult};
use crate::excel::address::CellAddress;
use crate::excel::document::{SheetDocument, WorkbookDocument};
use crate::transform::Transform;
use crate::types::{ColumnSelector, ProcessSummary, TabularFormat};
use std::path::Path;
use tracing::{debug, info};

/// Transforms one column of the first worksheet and saves the workbook
/// under a new name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetHandler;

impl SpreadsheetHandler {
    pub fn new() -> Self {
        Self
    }

    /// Load `input`, transform the selected column of its first sheet into
    /// the column to its right, and save everything to `output`.
    pub fn process(
        &self,
        input: &Path,
        output: &Path,
        selector: &ColumnSelector,
        transform: &dyn Transform,
    ) -> ProcessResult<ProcessSummary> {
        let mut document = WorkbookDocument::open(input)?;

        let mut sheet = document.first_sheet_mut()?;
        let summary = transform_sheet(&mut sheet, selector, transform)?;

        document.save(output)?;
        info!(
            output = %output.display(),
            sheets = document.sheet_names().len(),
            "saved workbook"
        );

        Ok(summary)
    }
}

/// Apply `transform` to the selected column of `sheet` in place.
///
/// Row 0 is the header. Rows without a cell at the column are left alone.
pub fn transform_sheet(
    sheet: &mut SheetDocument<'_>,
    selector: &ColumnSelector,
    transform: &dyn Transform,
) -> ProcessResult<ProcessSummary> {
    if sheet.row_count() == 0 {
        return Err(ProcessError::EmptySheet(sheet.name().to_string()));
    }

    let header = sheet.row_text(0);
    let column_index = selector.resolve(&header[..])?;
    debug!(sheet = %sheet.name(), column = %selector, column_index, "resolved column");

    let mut summary = ProcessSummary::new(TabularFormat::Spreadsheet, column_index);
    summary.sheet = Some(sheet.name().to_string());

    for row_idx in 1..sheet.row_count() {
        summary.data_rows += 1;

        if sheet.row_len(row_idx) <= column_index {
            debug!(row = row_idx + 1, "row too short, skipping");
            summary.skipped_rows += 1;
            continue;
        }

        let value = sheet.cell_text(row_idx, column_index);
        let processed = transform.apply(&value);

        // 1-based: column_index + 1 is the source, + 2 its right neighbor
        let address = CellAddress::from_coordinates(column_index + 2, row_idx + 1)?;
        sheet.set_cell_value(address, processed)?;
        summary.transformed_rows += 1;
    }

    Ok(summary)
}

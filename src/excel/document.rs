//! In-memory workbook backed by umya-spreadsheet
//!
//! The workbook is read whole, one cell per row is set, and the same
//! document is written back, so styles, widths, merges and the other sheets
//! pass through untouched.

use crate::error::{ProcessError, ProcessResult};
use crate::excel::address::CellAddress;
use std::path::Path;
use tracing::debug;
use umya_spreadsheet::reader::xlsx::XlsxError;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// A loaded .xlsx workbook
#[derive(Debug)]
pub struct WorkbookDocument {
    book: Spreadsheet,
}

impl WorkbookDocument {
    /// Read the whole workbook into memory.
    pub fn open(path: &Path) -> ProcessResult<Self> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| match e {
            // File or zip container unusable
            XlsxError::Io(_) | XlsxError::Zip(_) => ProcessError::Open {
                path: path.to_path_buf(),
                reason: format!("{e}"),
            },
            _ => ProcessError::Read(format!("{}: {e}", path.display())),
        })?;

        debug!(
            path = %path.display(),
            sheets = book.get_sheet_count(),
            "loaded workbook"
        );
        Ok(Self { book })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|s| s.get_name().to_string())
            .collect()
    }

    pub fn first_sheet_mut(&mut self) -> ProcessResult<SheetDocument<'_>> {
        self.book
            .get_sheet_mut(&0)
            .map(SheetDocument::new)
            .ok_or(ProcessError::NoSheets)
    }

    /// Write the workbook to a new file
    pub fn save(&self, path: &Path) -> ProcessResult<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path)
            .map_err(|e| ProcessError::Save(format!("{e}")))
    }
}

/// Row-oriented view of one worksheet, rows and columns 0-based.
///
/// A row's length ends at its last cell holding a value, so trailing blank
/// or style-only cells do not count.
pub struct SheetDocument<'a> {
    sheet: &'a mut Worksheet,
    row_lens: Vec<usize>,
}

impl<'a> SheetDocument<'a> {
    pub fn new(sheet: &'a mut Worksheet) -> Self {
        let mut row_lens = vec![0; sheet.get_highest_row() as usize];
        for cell in sheet.get_cell_collection() {
            if cell.get_value().is_empty() {
                continue;
            }
            let coordinate = cell.get_coordinate();
            let row = *coordinate.get_row_num() as usize - 1;
            let len = *coordinate.get_col_num() as usize;
            if row >= row_lens.len() {
                row_lens.resize(row + 1, 0);
            }
            if row_lens[row] < len {
                row_lens[row] = len;
            }
        }

        Self { sheet, row_lens }
    }

    pub fn name(&self) -> &str {
        self.sheet.get_name()
    }

    pub fn row_count(&self) -> usize {
        self.row_lens.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.row_lens.get(row).copied().unwrap_or(0)
    }

    /// Displayed text of a cell, empty when the cell does not exist
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        self.sheet
            .get_formatted_value(((col + 1) as u32, (row + 1) as u32))
    }

    /// Displayed text of every cell in a row, up to its last value
    pub fn row_text(&self, row: usize) -> Vec<String> {
        (0..self.row_len(row))
            .map(|col| self.cell_text(row, col))
            .collect()
    }

    /// Store `value` as text at `address`, keeping the cell's style.
    pub fn set_cell_value(&mut self, address: CellAddress, value: String) -> ProcessResult<()> {
        let (row, col) = address.to_index();
        if row >= self.row_lens.len() {
            return Err(ProcessError::CellWrite(format!(
                "{address} is below the last row of sheet '{}'",
                self.name()
            )));
        }

        self.sheet
            .get_cell_mut((address.column(), address.row()))
            .set_value_string(value);
        if self.row_lens[row] <= col {
            self.row_lens[row] = col + 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Spreadsheet {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        for (row, cells) in [vec!["id", "name", "status"], vec!["1", "alice", "new"], vec!["2"]]
            .iter()
            .enumerate()
        {
            for (col, value) in cells.iter().enumerate() {
                sheet
                    .get_cell_mut(((col + 1) as u32, (row + 1) as u32))
                    .set_value_string(*value);
            }
        }
        book
    }

    #[test]
    fn test_row_len_and_text() {
        let mut book = sample_book();
        let sheet = SheetDocument::new(book.get_sheet_mut(&0).unwrap());

        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.row_len(0), 3);
        assert_eq!(sheet.row_len(2), 1);
        assert_eq!(sheet.row_len(99), 0);
        assert_eq!(sheet.row_text(0), vec!["id", "name", "status"]);
        assert_eq!(sheet.row_text(2), vec!["2"]);
        assert_eq!(sheet.cell_text(2, 5), "");
    }

    #[test]
    fn test_style_only_cell_does_not_extend_row() {
        let mut book = sample_book();
        let ws = book.get_sheet_mut(&0).unwrap();
        ws.get_style_mut((5, 3)).get_font_mut().set_bold(true);

        let sheet = SheetDocument::new(ws);
        assert_eq!(sheet.row_len(2), 1);
    }

    #[test]
    fn test_number_cell_uses_display_text() {
        let mut book = sample_book();
        let ws = book.get_sheet_mut(&0).unwrap();
        ws.get_cell_mut((1, 3)).set_value_number(42);

        let sheet = SheetDocument::new(ws);
        assert_eq!(sheet.cell_text(2, 0), "42");
    }

    #[test]
    fn test_set_cell_value_overwrites_and_extends() {
        let mut book = sample_book();
        let mut sheet = SheetDocument::new(book.get_sheet_mut(&0).unwrap());

        sheet
            .set_cell_value(CellAddress::from_coordinates(3, 2).unwrap(), "X".to_string())
            .unwrap();
        assert_eq!(sheet.cell_text(1, 2), "X");

        sheet
            .set_cell_value(CellAddress::from_coordinates(4, 3).unwrap(), "Y".to_string())
            .unwrap();
        assert_eq!(sheet.row_len(2), 4);
        assert_eq!(sheet.row_text(2), vec!["2", "", "", "Y"]);
    }

    #[test]
    fn test_set_cell_value_below_sheet_fails() {
        let mut book = sample_book();
        let mut sheet = SheetDocument::new(book.get_sheet_mut(&0).unwrap());
        let result =
            sheet.set_cell_value(CellAddress::from_coordinates(1, 10).unwrap(), "Z".to_string());
        assert!(matches!(result, Err(ProcessError::CellWrite(_))));
    }
}

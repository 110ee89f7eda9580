//! A1-style cell addressing

use crate::error::{ProcessError, ProcessResult};
use std::fmt;

/// Largest column number an .xlsx sheet can hold (XFD)
pub const MAX_COLUMNS: usize = 16_384;

/// Largest row number an .xlsx sheet can hold
pub const MAX_ROWS: usize = 1_048_576;

/// A validated cell position in 1-based spreadsheet coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    column: u32,
    row: u32,
}

impl CellAddress {
    /// Build an address from 1-based (column, row) coordinates.
    pub fn from_coordinates(column: usize, row: usize) -> ProcessResult<Self> {
        if column == 0 || row == 0 {
            return Err(ProcessError::CellAddress(format!(
                "invalid coordinates ({column}, {row}): must be 1-based"
            )));
        }
        if column > MAX_COLUMNS {
            return Err(ProcessError::CellAddress(format!(
                "column {column} exceeds the sheet limit of {MAX_COLUMNS}"
            )));
        }
        if row > MAX_ROWS {
            return Err(ProcessError::CellAddress(format!(
                "row {row} exceeds the sheet limit of {MAX_ROWS}"
            )));
        }

        Ok(Self {
            column: column as u32,
            row: row as u32,
        })
    }

    /// 1-based column number
    pub fn column(&self) -> u32 {
        self.column
    }

    /// 1-based row number
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 0-based (row, column) as used by [`SheetDocument`](crate::excel::SheetDocument)
    pub fn to_index(&self) -> (usize, usize) {
        (self.row as usize - 1, self.column as usize - 1)
    }

    /// Column part of the address ("A", "AB", ...)
    pub fn column_letters(&self) -> String {
        column_index_to_letter(self.column as usize - 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row)
    }
}

/// Convert a 0-based column index to Excel letters (0→A, 25→Z, 26→AA)
pub fn column_index_to_letter(index: usize) -> String {
    let mut result = String::new();
    let mut num = index;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

//! Excel (.xlsx) support
//!
//! - Read: umya-spreadsheet loads the whole workbook into a [`WorkbookDocument`]
//! - Process: [`SpreadsheetHandler`] rewrites one column of the first sheet
//! - Write: the same document is saved as a new file, so everything the
//!   handler did not touch is carried over

mod address;
mod document;
mod handler;

pub use address::{column_index_to_letter, CellAddress, MAX_COLUMNS, MAX_ROWS};
pub use document::{SheetDocument, WorkbookDocument};
pub use handler::{transform_sheet, SpreadsheetHandler};

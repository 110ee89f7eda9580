//! Column Processor - transform one column of a tabular file
//!
//! Reads an Excel (.xlsx) or CSV file, applies a text transformation to
//! every value of one column, writes the result into the column to its
//! right and saves a new file. The input is never modified.
//!
//! # Features
//!
//! - Format chosen by extension (.xlsx or .csv, case-insensitive)
//! - Excel: column selected by header name, first sheet only, all sheets saved
//! - CSV: column selected by 0-based index
//! - Pluggable transformation via the [`Transform`] trait
//!
//! # Example
//!
//! ```no_run
//! use column_processor::dispatch::process_file;
//! use column_processor::transform::MarkProcessed;
//! use std::path::Path;
//!
//! let summary = process_file(
//!     Path::new("people.xlsx"),
//!     Path::new("people_out.xlsx"),
//!     "name",
//!     &MarkProcessed::new(),
//! )?;
//!
//! println!("Transformed {} rows", summary.transformed_rows);
//! # Ok::<(), column_processor::error::ProcessError>(())
//! ```

pub mod cli;
pub mod delimited;
pub mod dispatch;
pub mod error;
pub mod excel;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorKind, ProcessError, ProcessResult};
pub use transform::{process_string, MarkProcessed, Transform};
pub use types::{ColumnSelector, ProcessSummary, TabularFormat};

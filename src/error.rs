use std::path::PathBuf;
use thiserror::Error;

pub type ProcessResult<T> = Result<T, ProcessError>;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("For CSV files, column must be a numeric index (0-based): {value:?}: {reason}")]
    InvalidColumnIndex { value: String, reason: String },

    #[error("Input and output refer to the same file: {0}")]
    SamePath(PathBuf),

    #[error("Error opening file {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("No sheets found in Excel file")]
    NoSheets,

    #[error("Error reading {0}")]
    Read(String),

    #[error("Empty sheet: {0}")]
    EmptySheet(String),

    #[error("Empty CSV file")]
    EmptyFile,

    #[error("Column {0:?} not found")]
    ColumnNotFound(String),

    #[error("Column index {index} out of bounds (header has {width} columns)")]
    IndexOutOfBounds { index: usize, width: usize },

    #[error("Error getting cell address: {0}")]
    CellAddress(String),

    #[error("Error setting cell value: {0}")]
    CellWrite(String),

    #[error("Error saving file: {0}")]
    Save(String),

    #[error("Error writing to CSV: {0}")]
    Write(String),
}

/// Coarse classification of a failure, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected from the arguments alone, before any file is opened
    Usage,
    /// Missing, unreadable, malformed or empty input
    Input,
    /// Column name not found or index out of bounds
    Selector,
    /// Destination could not be created, written or flushed
    Output,
    /// Cell address computation or in-memory cell write
    Internal,
}

impl ProcessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessError::UnsupportedFormat(_)
            | ProcessError::InvalidColumnIndex { .. }
            | ProcessError::SamePath(_) => ErrorKind::Usage,
            ProcessError::Open { .. }
            | ProcessError::NoSheets
            | ProcessError::Read(_)
            | ProcessError::EmptySheet(_)
            | ProcessError::EmptyFile => ErrorKind::Input,
            ProcessError::ColumnNotFound(_)
            | ProcessError::IndexOutOfBounds { .. } => ErrorKind::Selector,
            ProcessError::Save(_) | ProcessError::Write(_) => ErrorKind::Output,
            ProcessError::CellAddress(_) | ProcessError::CellWrite(_) => ErrorKind::Internal,
        }
    }
}

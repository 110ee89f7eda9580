use crate::error::{ProcessError, ProcessResult};
use std::fmt;
use std::path::Path;

//==============================================================================
// Format Detection
//==============================================================================

/// Extension recognized as an Excel workbook
pub const SPREADSHEET_EXTENSION: &str = "xlsx";

/// Extension recognized as comma-separated text
pub const DELIMITED_TEXT_EXTENSION: &str = "csv";

/// Tabular file format, decided by file extension only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    /// Excel workbook (.xlsx)
    Spreadsheet,
    /// Comma-separated values (.csv)
    DelimitedText,
}

impl TabularFormat {
    /// Detect the format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> ProcessResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            SPREADSHEET_EXTENSION => Ok(TabularFormat::Spreadsheet),
            DELIMITED_TEXT_EXTENSION => Ok(TabularFormat::DelimitedText),
            "" => Err(ProcessError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(ProcessError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TabularFormat::Spreadsheet => "Excel",
            TabularFormat::DelimitedText => "CSV",
        }
    }
}

impl fmt::Display for TabularFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==============================================================================
// Column Selection
//==============================================================================

/// Identifies the source column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Header text, matched exactly against row 0
    Name(String),
    /// 0-based position
    Index(usize),
}

impl ColumnSelector {
    /// Interpret the raw `--column` value for the given format.
    ///
    /// Spreadsheets take the value literally as a header name. CSV files
    /// require a base-10 non-negative integer.
    pub fn parse(format: TabularFormat, raw: &str) -> ProcessResult<Self> {
        match format {
            TabularFormat::Spreadsheet => Ok(ColumnSelector::Name(raw.to_string())),
            TabularFormat::DelimitedText => raw
                .trim()
                .parse::<usize>()
                .map(ColumnSelector::Index)
                .map_err(|e| ProcessError::InvalidColumnIndex {
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Resolve to a 0-based position within the header row.
    ///
    /// Names match exactly, first match from the left. Indexes must fall
    /// inside the header width.
    pub fn resolve<S: AsRef<str>>(&self, header: &[S]) -> ProcessResult<usize> {
        match self {
            ColumnSelector::Name(name) => header
                .iter()
                .position(|cell| cell.as_ref() == name.as_str())
                .ok_or_else(|| ProcessError::ColumnNotFound(name.clone())),
            ColumnSelector::Index(index) if *index < header.len() => Ok(*index),
            ColumnSelector::Index(index) => Err(ProcessError::IndexOutOfBounds {
                index: *index,
                width: header.len(),
            }),
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Name(name) => write!(f, "\"{name}\""),
            ColumnSelector::Index(index) => write!(f, "#{index}"),
        }
    }
}

//==============================================================================
// Results
//==============================================================================

/// What a handler did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub format: TabularFormat,
    /// Sheet that was processed (spreadsheets only)
    pub sheet: Option<String>,
    /// Resolved 0-based source column
    pub column_index: usize,
    /// Rows after the header
    pub data_rows: usize,
    pub transformed_rows: usize,
    /// Rows too short to hold the source column
    pub skipped_rows: usize,
}

impl ProcessSummary {
    pub fn new(format: TabularFormat, column_index: usize) -> Self {
        Self {
            format,
            sheet: None,
            column_index,
            data_rows: 0,
            transformed_rows: 0,
            skipped_rows: 0,
        }
    }
}

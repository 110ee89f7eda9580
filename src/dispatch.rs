//! Format dispatch - route a file to the handler for its extension

use crate::delimited::DelimitedTextHandler;
use crate::error::{ProcessError, ProcessResult};
use crate::excel::SpreadsheetHandler;
use crate::transform::Transform;
use crate::types::{ColumnSelector, ProcessSummary, TabularFormat};
use std::path::Path;
use tracing::debug;

/// Load → locate → transform → save for one tabular format
pub trait TabularHandler {
    fn format(&self) -> TabularFormat;

    fn process(
        &self,
        input: &Path,
        output: &Path,
        selector: &ColumnSelector,
        transform: &dyn Transform,
    ) -> ProcessResult<ProcessSummary>;
}

impl TabularHandler for SpreadsheetHandler {
    fn format(&self) -> TabularFormat {
        TabularFormat::Spreadsheet
    }

    fn process(
        &self,
        input: &Path,
        output: &Path,
        selector: &ColumnSelector,
        transform: &dyn Transform,
    ) -> ProcessResult<ProcessSummary> {
        SpreadsheetHandler::process(self, input, output, selector, transform)
    }
}

impl TabularHandler for DelimitedTextHandler {
    fn format(&self) -> TabularFormat {
        TabularFormat::DelimitedText
    }

    fn process(
        &self,
        input: &Path,
        output: &Path,
        selector: &ColumnSelector,
        transform: &dyn Transform,
    ) -> ProcessResult<ProcessSummary> {
        DelimitedTextHandler::process(self, input, output, selector, transform)
    }
}

/// One handler per recognized format
#[derive(Debug, Clone, Copy)]
pub enum FormatHandler {
    Spreadsheet(SpreadsheetHandler),
    DelimitedText(DelimitedTextHandler),
}

impl FormatHandler {
    pub fn for_format(format: TabularFormat) -> Self {
        match format {
            TabularFormat::Spreadsheet => FormatHandler::Spreadsheet(SpreadsheetHandler::new()),
            TabularFormat::DelimitedText => {
                FormatHandler::DelimitedText(DelimitedTextHandler::new())
            }
        }
    }

    /// Pick the handler from the file extension; nothing is read.
    pub fn for_path(path: &Path) -> ProcessResult<Self> {
        TabularFormat::from_path(path).map(Self::for_format)
    }
}

impl TabularHandler for FormatHandler {
    fn format(&self) -> TabularFormat {
        match self {
            FormatHandler::Spreadsheet(h) => TabularHandler::format(h),
            FormatHandler::DelimitedText(h) => TabularHandler::format(h),
        }
    }

    fn process(
        &self,
        input: &Path,
        output: &Path,
        selector: &ColumnSelector,
        transform: &dyn Transform,
    ) -> ProcessResult<ProcessSummary> {
        match self {
            FormatHandler::Spreadsheet(h) => h.process(input, output, selector, transform),
            FormatHandler::DelimitedText(h) => h.process(input, output, selector, transform),
        }
    }
}

/// Fail if `input` and `output` name the same file.
pub fn ensure_distinct_paths(input: &Path, output: &Path) -> ProcessResult<()> {
    if input == output {
        return Err(ProcessError::SamePath(output.to_path_buf()));
    }

    // Only resolvable when both exist
    if let (Ok(a), Ok(b)) = (input.canonicalize(), output.canonicalize()) {
        if a == b {
            return Err(ProcessError::SamePath(b));
        }
    }

    Ok(())
}

/// Process `input` into `output`, interpreting `column` per the input's
/// format. Validation (format, column value, paths) happens before any file
/// is opened.
pub fn process_file(
    input: &Path,
    output: &Path,
    column: &str,
    transform: &dyn Transform,
) -> ProcessResult<ProcessSummary> {
    let handler = FormatHandler::for_path(input)?;
    let selector = ColumnSelector::parse(handler.format(), column)?;
    ensure_distinct_paths(input, output)?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        format = %handler.format(),
        column = %selector,
        "dispatching"
    );

    handler.process(input, output, &selector, transform)
}

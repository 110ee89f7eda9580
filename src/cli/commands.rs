use crate::dispatch::{process_file, FormatHandler, TabularHandler};
use crate::error::{ErrorKind, ProcessError, ProcessResult};
use crate::excel::column_index_to_letter;
use crate::transform::MarkProcessed;
use crate::types::{ProcessSummary, TabularFormat};
use colored::Colorize;
use std::path::PathBuf;

/// Message printed when the run succeeds
pub const SUCCESS_MESSAGE: &str = "File processed successfully!";

/// Execute the process command with the default transformation
pub fn run(
    input: PathBuf,
    output: PathBuf,
    column: String,
    verbose: bool,
) -> ProcessResult<ProcessSummary> {
    println!("{}", "🔥 Column Processor - Transforming column".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());
    println!("   Column: {}\n", column.bright_blue().bold());

    if verbose {
        // Report the format up front; errors surface again from process_file
        if let Ok(handler) = FormatHandler::for_path(&input) {
            println!(
                "{}",
                format!("📖 Reading {} file...", handler.format()).cyan()
            );
        }
    }

    let summary = process_file(&input, &output, &column, &MarkProcessed::new())?;

    if verbose {
        print_summary(&summary);
    }

    println!("{}", format!("✅ {SUCCESS_MESSAGE}").bold().green());
    Ok(summary)
}

fn print_summary(summary: &ProcessSummary) {
    println!("{}", "📊 Summary:".bold().cyan());
    if let Some(sheet) = &summary.sheet {
        println!("   Sheet: {}", sheet.bright_blue());
    }
    match summary.format {
        TabularFormat::Spreadsheet => println!(
            "   Source column: {} → {}",
            column_index_to_letter(summary.column_index),
            column_index_to_letter(summary.column_index + 1)
        ),
        TabularFormat::DelimitedText => println!(
            "   Source column: #{} → #{}",
            summary.column_index,
            summary.column_index + 1
        ),
    }
    println!("   Data rows:   {}", summary.data_rows);
    println!(
        "   Transformed: {}",
        summary.transformed_rows.to_string().green()
    );
    if summary.skipped_rows > 0 {
        println!(
            "   Skipped:     {} (too short)",
            summary.skipped_rows.to_string().yellow()
        );
    } else {
        println!("   Skipped:     0");
    }
    println!();
}

/// Single-line description of a failure for the terminal
pub fn error_message(err: &ProcessError) -> String {
    match err.kind() {
        ErrorKind::Usage => format!("Error: {err}"),
        ErrorKind::Input | ErrorKind::Selector | ErrorKind::Output | ErrorKind::Internal => {
            format!("Error processing file: {err}")
        }
    }
}

use clap::{CommandFactory, Parser};
use colored::Colorize;
use column_processor::cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status when a required parameter is missing
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "colproc")]
#[command(about = "Transform one column of an Excel or CSV file into its neighbor column")]
#[command(long_about = "Column Processor - uppercase a column and mark it processed

Reads the input file, applies the transformation to every value of the
selected column and writes the result into the column immediately to its
right. The result is saved to the output file; the input is never modified.

FORMATS:
  .xlsx  - first sheet only; --column is a header name (exact match)
  .csv   - --column is a 0-based numeric index

SHORT ROWS:
  Rows that do not reach the selected column are copied unchanged.

EXAMPLES:
  colproc --input people.xlsx --output out.xlsx --column name
  colproc --input people.csv --output out.csv --column 1

LOGGING:
  Set RUST_LOG (e.g. RUST_LOG=column_processor=debug) for diagnostics on stderr.")]
#[command(version)]
struct Cli {
    /// Path to the input Excel/CSV file
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to save the processed file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Column name for Excel or column index for CSV (0-based)
    #[arg(long)]
    column: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "column_processor=debug"
    } else {
        "column_processor=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn usage_error() -> ExitCode {
    println!("{}", "All parameters are required".red().bold());
    println!();
    println!("{}", Cli::command().render_help());
    ExitCode::from(EXIT_USAGE)
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let (Some(input), Some(output), Some(column)) = (args.input, args.output, args.column) else {
        return usage_error();
    };
    if input.as_os_str().is_empty() || output.as_os_str().is_empty() || column.is_empty() {
        return usage_error();
    }

    match cli::run(input, output, column, args.verbose) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", format!("❌ {}", cli::error_message(&e)).red());
            ExitCode::FAILURE
        }
    }
}

//! CLI command handlers

pub mod commands;

pub use commands::{error_message, run, SUCCESS_MESSAGE};

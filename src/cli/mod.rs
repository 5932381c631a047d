// CLI module for trixtag
//
// Argument parsing, report formatting and the subcommand implementations.
// Only the binary uses this module.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{AlbumArgs, Commands, Config, OutputFormat};
pub use output::OutputFormatter;

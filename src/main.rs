// CLI binary entry point for trixtag

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{Config, OutputFormatter};

fn main() -> ExitCode {
    let config = Config::parse();

    let default_filter = if config.verbose { "info,trixtag=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let formatter = OutputFormatter::new(config.format, config.quiet);

    match cli::commands::run(&config, &formatter) {
        Ok(code) => code,
        Err(e) => {
            formatter.print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

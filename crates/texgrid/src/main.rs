use std::io;
use std::process::ExitCode;

use clap::Parser;
use texgrid::{Config, DEFAULT_ENVIRONMENT, DEFAULT_MAX_ENTRIES, DEFAULT_MAX_LINE_BYTES};
use tracing_subscriber::EnvFilter;

/// Read matrix entries from stdin, one per line, and print an aligned LaTeX
/// matrix environment.
///
/// A line `.` is an empty cell, a line `...` ends the first row.
#[derive(Debug, Parser)]
#[command(name = "texgrid", version, about, long_about = None)]
struct Cli {
    /// Maximum number of bytes per input line
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_LINE_BYTES)]
    max_line_bytes: usize,

    /// Maximum number of entries
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ENTRIES)]
    max_entries: usize,

    /// LaTeX environment to wrap the entries in
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_ENVIRONMENT)]
    environment: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::default()
            .max_line_bytes(cli.max_line_bytes)
            .max_entries(cli.max_entries)
            .environment(cli.environment)
    }
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`); stdout carries the matrix.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from(Cli::parse());

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let summary = texgrid::run(stdin, &mut stdout, config)?;
    tracing::debug!(shape = %summary.shape, entries = summary.entries, "matrix written");

    Ok(())
}

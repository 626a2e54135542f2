//! sshush CLI entry point.
//!
//! This binary provides the `sshush` command for generating an SSH client
//! config from YAML host groups.

use clap::Parser;
use sshush::cli::Cli;
use sshush::error::Result;
use sshush::{loader, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = loader::load_settings(cli.config.as_deref())?;
    let runner = cli.into_runner(settings)?;

    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock())
}

//! Command-line interface for sshush.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::error::Result;
use crate::interpolate::expand_path;
use crate::loader;
use crate::runner::Runner;
use crate::settings::ToolSettings;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line arguments for sshush.
///
/// # Examples
///
/// ```bash
/// # Generate ~/.ssh/config from one file
/// sshush ~/.ssh/hosts.yml
///
/// # Several sources, written elsewhere
/// sshush 'hosts/*.yml' extra.yml --dest ./ssh_config
///
/// # Print the result instead of writing it
/// sshush hosts.yml --dry-run
/// ```
#[derive(Parser, Debug)]
#[command(name = "sshush")]
#[command(version)]
#[command(about = "SSH config generator - build ~/.ssh/config from YAML host groups")]
#[command(long_about = "sshush generates an SSH client config from YAML host groups.\n\n\
    Groups share settings through defaults, per-group Config and Extends,\n\
    and expand into one Host block per alias.")]
pub struct Cli {
    /// Source YAML files or glob patterns.
    ///
    /// Falls back to `sources` from the settings file when omitted.
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Path to write the SSH config to (default: ~/.ssh/config).
    #[arg(short, long, value_name = "PATH")]
    pub dest: Option<String>,

    /// Print the generated config instead of writing it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Settings file to use instead of the discovered one.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build a [`Runner`] from these arguments and the settings file.
    ///
    /// Precedence for each option: CLI flag > settings file > built-in default.
    pub fn into_runner(self, settings: ToolSettings) -> Result<Runner> {
        let sources = if self.sources.is_empty() {
            settings.sources
        } else {
            self.sources
        };

        let destination = match self.dest.or(settings.dest) {
            Some(dest) => PathBuf::from(expand_path(&dest)?),
            None => loader::default_destination()?,
        };

        Ok(Runner {
            sources,
            destination,
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from(["sshush", "a.yml", "b.yml", "-d", "/tmp/out", "-n", "-vv"]);
        assert_eq!(cli.sources, ["a.yml", "b.yml"]);
        assert_eq!(cli.dest.as_deref(), Some("/tmp/out"));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_overrides_settings() {
        let cli = Cli::parse_from(["sshush", "cli.yml", "--dest", "/tmp/cli"]);
        let settings = ToolSettings {
            sources: vec!["file.yml".into()],
            dest: Some("/tmp/file".into()),
        };
        let runner = cli.into_runner(settings).unwrap();
        assert_eq!(runner.sources, ["cli.yml"]);
        assert_eq!(runner.destination, PathBuf::from("/tmp/cli"));
        assert!(!runner.dry_run);
    }

    #[test]
    fn test_settings_fill_gaps() {
        let cli = Cli::parse_from(["sshush"]);
        let settings = ToolSettings {
            sources: vec!["file.yml".into()],
            dest: Some("/tmp/file".into()),
        };
        let runner = cli.into_runner(settings).unwrap();
        assert_eq!(runner.sources, ["file.yml"]);
        assert_eq!(runner.destination, PathBuf::from("/tmp/file"));
    }
}

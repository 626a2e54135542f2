//! End-to-end generation run.
//!
//! A [`Runner`] reads every source, renders the full config in memory, and
//! only then writes the destination, so a failure part way through leaves
//! any existing config untouched.

use crate::error::{Result, SshushError};
use crate::generator::Generator;
use crate::loader;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// One generation run.
#[derive(Debug, Clone)]
pub struct Runner {
    /// Source files or glob patterns, processed in order.
    pub sources: Vec<String>,
    /// Where the generated config is written.
    pub destination: PathBuf,
    /// Print the config to `out` instead of writing `destination`.
    pub dry_run: bool,
}

impl Runner {
    /// Render all sources and write (or print) the result.
    ///
    /// Status messages and dry-run output go to `out`.
    ///
    /// # Errors
    ///
    /// - [`SshushError::NoSources`] if there is nothing to read
    /// - any error from expanding, reading or parsing a source
    /// - [`SshushError::IoError`] if writing fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.sources.is_empty() {
            return Err(SshushError::NoSources);
        }

        let paths = loader::expand_sources(&self.sources)?;
        let mut generator = Generator::new();
        for path in &paths {
            generator.add_document(loader::load_document(path)?)?;
        }
        let text = generator.finish();

        if self.dry_run {
            info!(sources = paths.len(), "dry run, not writing");
            out.write_all(text.as_bytes())?;
            return Ok(());
        }

        loader::write_config(&self.destination, &text)?;
        writeln!(out, "Wrote SSH config to {}", self.destination.display())?;
        Ok(())
    }
}

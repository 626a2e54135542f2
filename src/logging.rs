//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for the
//! generated config in dry-run mode.

use tracing_subscriber::EnvFilter;

/// Create an environment filter based on verbosity level.
///
/// `RUST_LOG` takes precedence when set.
pub fn create_env_filter(verbosity: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter_directive(verbosity))
    }
}

fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "sshush=warn",
        1 => "sshush=info",
        2 => "sshush=debug",
        _ => "sshush=trace",
    }
}

/// Install the stderr fmt subscriber.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

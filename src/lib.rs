//! # sshush
//!
//! Generate an SSH client config from YAML host groups.
//!
//! Hosts are declared in groups that share settings. Each group inherits the
//! `default` section, optionally the resolved settings of another group via
//! `Extends`, and its own `Config`. Every host then renders as a `Host` block,
//! and the `global` section becomes a trailing `Host *` block.
//!
//! ## Features
//!
//! - **Groups**: Shared settings for a set of hosts, with per-host overrides
//! - **Extends**: Inherit another group's fully resolved settings
//! - **Prefixes**: Prepend a string to every alias in a group
//! - **Host lists**: Declare hosts as a plain list or as an alias mapping
//! - **Multiple sources**: Combine several files and glob patterns
//!
//! ## Quick Example
//!
//! ```
//! let yaml = "
//! default:
//!   Port: 22
//! web:
//!   Config:
//!     User: deploy
//!   Hosts:
//!     app1: 10.0.0.1
//! global:
//!   ForwardAgent: \"yes\"
//! ";
//!
//! let config = sshush::generate(yaml).unwrap();
//! assert_eq!(config, "\
//! ## web
//! Host app1
//!     Port 22
//!     User deploy
//!     HostName 10.0.0.1
//!
//! Host *
//!     ForwardAgent yes
//! ");
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`config`]: Group, host and directive data structures
//! - [`document`]: Parsed YAML documents and reserved section extraction
//! - [`resolver`]: Group settings resolution (`default`, `Extends`, `Config`)
//! - [`hosts`]: Host list normalization
//! - [`render`]: `Host` block and global block rendering
//! - [`generator`]: The document to config text pipeline
//! - [`runner`]: Reading sources and writing the destination
//! - [`loader`]: File discovery, loading and writing
//! - [`settings`]: The optional TOML settings file
//! - [`cli`]: Command-line argument parsing with clap
//! - [`interpolate`]: `~` and `$VAR` expansion in paths
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod hosts;
pub mod interpolate;
pub mod loader;
pub mod logging;
pub mod render;
pub mod resolver;
pub mod runner;
pub mod settings;

pub use config::{DirectiveValue, GroupEntry, HostDetail, Hosts, Scalar, SettingsMap};
pub use document::Document;
pub use error::{Result, SshushError};
pub use generator::{Generator, generate};
pub use runner::Runner;

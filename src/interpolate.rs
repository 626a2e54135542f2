//! Variable interpolation for paths.
//!
//! Source patterns and the destination path may reference environment
//! variables (`$VAR`, `${VAR}`) and the home directory (`~`).
//!
//! # Example
//!
//! ```
//! use sshush::interpolate::interpolate;
//!
//! let lookup = |name: &str| (name == "HOSTS").then(|| "work".to_string());
//! assert_eq!(interpolate("~/ssh/$HOSTS/*.yml", lookup), "~/ssh/work/*.yml");
//! ```

use crate::error::{Result, SshushError};
use std::path::Path;

/// Replace `$VAR` and `${VAR}` references using `lookup`.
///
/// Unset variables expand to the empty string. A `$` not followed by a
/// variable name is kept as is.
///
/// # Examples
///
/// ```
/// use sshush::interpolate::interpolate;
///
/// let lookup = |name: &str| (name == "USER").then(|| "root".to_string());
/// assert_eq!(interpolate("/home/${USER}/x", lookup), "/home/root/x");
/// assert_eq!(interpolate("cost: $5", lookup), "cost: ");
/// ```
pub fn interpolate<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if closed {
                    out.push_str(&lookup(&name).unwrap_or_default());
                } else {
                    out.push_str("${");
                    out.push_str(&name);
                }
            }
            Some(&c) if is_name_char(c) => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                out.push_str(&lookup(&name).unwrap_or_default());
            }
            _ => out.push('$'),
        }
    }

    out
}

/// Replace a leading `~` with `home`.
///
/// Only `~` on its own or followed by `/` is expanded; `~user` is left alone.
pub fn expand_home(path: &str, home: &Path) -> String {
    if path == "~" {
        return home.display().to_string();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest).display().to_string(),
        None => path.to_string(),
    }
}

/// Expand environment variables and the home directory in a path.
///
/// # Errors
///
/// Returns [`SshushError::NoHomeDir`] if the path starts with `~` and the home
/// directory cannot be determined.
pub fn expand_path(path: &str) -> Result<String> {
    let path = interpolate(path, |name| std::env::var(name).ok());
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir().ok_or(SshushError::NoHomeDir)?;
        return Ok(expand_home(&path, &home));
    }
    Ok(path)
}

fn is_name_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

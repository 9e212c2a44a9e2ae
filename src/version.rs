//! Version and build information
//!
//! Provides access to build-time embedded information.

use std::fmt;

/// Build information embedded at compile time
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Package version from Cargo.toml
    pub version: &'static str,
    /// Package name
    pub name: &'static str,
    /// Package authors
    pub authors: &'static str,
    /// Package description
    pub description: &'static str,
}

impl BuildInfo {
    /// Get the current build information
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            name: env!("CARGO_PKG_NAME"),
            authors: env!("CARGO_PKG_AUTHORS"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }

    /// Get a short version string for display
    pub fn short_version(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.version)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        if !self.authors.is_empty() {
            writeln!(f, "Authors: {}", self.authors)?;
        }
        Ok(())
    }
}

/// Get the current build info
pub fn build_info() -> BuildInfo {
    BuildInfo::current()
}

/// Print version information to stdout
pub fn print_version() {
    let info = build_info();
    print!("{}", info);
}

//! viteconf: resolve the effective bundler configuration for the Tauri-wrapped
//! Vue frontend.
//!
//! The bundler host consumes a single immutable [`BuildConfiguration`] value
//! determined entirely by the process environment and the directory the config
//! lives in. This crate builds that value once per invocation and can print it
//! for inspection; the bundler, SFC compiler, auto-import collaborator, and
//! native-shell packager remain external.

pub mod config;
pub mod env;
pub mod error;
pub mod resolver;

use std::path::Path;

pub use config::{
    BuildConfiguration, BuildOptions, BuildTarget, DevServer, Minify, PluginDescriptor,
    TestOptions,
};
pub use env::EnvSnapshot;
pub use error::AppError;

/// Resolve the configuration for the app rooted at `dir`, using the current
/// process environment.
pub fn resolve_at(dir: &Path) -> Result<BuildConfiguration, AppError> {
    resolver::resolve(&EnvSnapshot::capture(), dir)
}

/// Resolve the configuration for the current directory.
pub fn resolve_current() -> Result<BuildConfiguration, AppError> {
    let cwd = std::env::current_dir()?;
    resolver::resolve(&EnvSnapshot::capture(), &cwd)
}

//! Configuration constants and utilities for fetch
//!
//! fetch reads no config files; everything here is either a fixed protocol
//! constant or derived from Cargo metadata at compile time.

/// Program name used in the default User-Agent and in diagnostics
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Program version used in the default User-Agent
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header key checked (case-sensitively) before the POST default is injected
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Content type applied to POST requests that did not set one
pub const DEFAULT_POST_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Prefix marking a `--data` value as a file path
pub const DATA_FILE_PREFIX: char = '@';

/// Environment variable name for the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "FETCH_LOG_LEVEL";

/// Build the default User-Agent, `"<program>/<version>"`
pub fn default_user_agent() -> String {
    format!("{PROGRAM_NAME}/{PROGRAM_VERSION}")
}

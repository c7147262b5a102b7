//! # Error Types
//!
//! Every way a fetch run can fail, as one tagged enum so callers branch on
//! the kind instead of the message text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building, sending, or printing a request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Neither `--url` nor a positional URL was given.
    #[error("No URL specified")]
    MissingUrl,

    /// The `--data @path` file exists but could not be opened.
    #[error("Couldn't open data file \"{}\": {source}", path.display())]
    UnopenableBodyFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `--data @path` file does not exist. Not fatal: the request goes
    /// out with an empty body.
    #[error("Couldn't read data from file \"{}\", this makes an empty POST.", path.display())]
    MissingBodyFile { path: PathBuf },

    /// The `-X` method is not one fetch knows how to send.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// A `-H` header the HTTP stack refuses to put on the wire.
    #[error("Invalid header: {name}")]
    InvalidHeader { name: String },

    /// Connection, DNS, TLS or protocol failure from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Writing the rendered response failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl FetchError {
    /// Whether this error aborts the run
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FetchError::MissingBodyFile { .. })
    }
}

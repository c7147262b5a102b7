//! # fetch - a single-shot, curl-like HTTP client
//!
//! One invocation sends one request built from command-line flags and prints
//! the response to stdout.
//!
//! ```text
//! ┌─────────────┐  OptionBag  ┌────────────────┐  RequestSpec  ┌───────────┐
//! │  cmd_args   │────────────►│ RequestBuilder │──────────────►│ Transport │
//! └─────────────┘             └────────────────┘               └─────┬─────┘
//!                                                                    │ ResponseView
//!                                       stdout ◄── ResponseRenderer ◄┘
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;

// Re-export main types for easy access
pub use app::run;
pub use error::FetchError;
pub use http::*;

//! # Services Layer
//!
//! The three steps of a fetch run: build the request, send it, render the
//! response.

pub mod request_builder;
pub mod response_renderer;
pub mod transport;

pub use request_builder::{build, parse_header_line, parse_headers, resolve_method};
pub use response_renderer::render;
pub use transport::{ReqwestTransport, Transport};

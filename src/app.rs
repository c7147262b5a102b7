//! # Application Flow
//!
//! One fetch run: build the request, report non-fatal warnings, send it,
//! render the response.

use std::io::Write;

use crate::error::FetchError;
use crate::http::models::OptionBag;
use crate::http::services::{build, render, Transport};

/// Run a single request.
///
/// `out` receives only the rendered response; warnings go to `diagnostics`.
/// On any fatal error nothing is written to `out`.
pub fn run<T, W, D>(
    options: &OptionBag,
    transport: &T,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<(), FetchError>
where
    T: Transport,
    W: Write,
    D: Write,
{
    let spec = build(options)?;

    for warning in spec.warnings() {
        writeln!(diagnostics, "Warning: {warning}")?;
    }

    let response = transport.execute(spec)?;
    tracing::debug!("Rendering {} {}", response.protocol, response.status);

    render(&response, options, out)?;
    Ok(())
}

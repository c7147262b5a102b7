//! # Response Renderer
//!
//! Writes a received response the way the user asked to see it. Status codes
//! play no part here: a 404 prints exactly like a 200.

use std::io::{self, Write};

use crate::http::models::{OptionBag, ResponseView};

/// Separator between multiple values of one header name
const HEADER_VALUE_SEPARATOR: &str = ";";

/// Render `response` to `out`.
///
/// With `-i` or `-I` the status line and headers come first, followed by a
/// blank line. The body follows unless `-I` was given, byte for byte.
pub fn render<W: Write>(
    response: &ResponseView,
    options: &OptionBag,
    out: &mut W,
) -> io::Result<()> {
    if options.prints_headers() {
        write_head(response, out)?;
    }
    if options.prints_body() {
        out.write_all(&response.body)?;
    }
    out.flush()
}

/// Status line, one line per header name, then a blank line
fn write_head<W: Write>(response: &ResponseView, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", response.protocol, response.status)?;
    for entry in &response.headers {
        writeln!(
            out,
            "{}: {}",
            entry.name,
            entry.values.join(HEADER_VALUE_SEPARATOR)
        )?;
    }
    writeln!(out)
}

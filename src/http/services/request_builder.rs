//! # Request Builder
//!
//! Turns the option bag into one fully resolved [`RequestSpec`]: method
//! inference, header parsing, body source resolution, auth and transport
//! policy. Nothing here touches the network.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{CONTENT_TYPE_HEADER, DATA_FILE_PREFIX, DEFAULT_POST_CONTENT_TYPE};
use crate::error::FetchError;
use crate::http::models::{
    BasicAuth, HttpHeaders, HttpMethod, OptionBag, RequestBody, RequestSpec, TransportConfig,
};

/// Build the request described by `options`.
pub fn build(options: &OptionBag) -> Result<RequestSpec, FetchError> {
    let url = options.resolve_url().ok_or(FetchError::MissingUrl)?;
    let method = resolve_method(options)?;
    tracing::debug!("Resolved request: {method} {url}");

    let mut headers = parse_headers(&options.header_lines);

    let mut warnings = Vec::new();
    let body = match options.data.as_deref() {
        Some(data) => resolve_body(data, &mut warnings)?,
        None => None,
    };

    let has_content_type = headers.iter().any(|(name, _)| name == CONTENT_TYPE_HEADER);
    if method == HttpMethod::Post && !has_content_type {
        tracing::debug!("Defaulting {CONTENT_TYPE_HEADER} to {DEFAULT_POST_CONTENT_TYPE}");
        headers.push((
            CONTENT_TYPE_HEADER.to_string(),
            DEFAULT_POST_CONTENT_TYPE.to_string(),
        ));
    }

    let auth = options.user.as_deref().map(BasicAuth::parse);

    let transport = TransportConfig {
        insecure_tls: options.insecure_tls,
        follow_redirects: options.follow_redirects,
        user_agent: options.user_agent.clone(),
    };

    Ok(RequestSpec::new(
        method,
        url.to_string(),
        headers,
        body,
        auth,
        transport,
        warnings,
    ))
}

/// Pick the method. First match wins: explicit `-X`, then `-I`, then `-d`,
/// then GET.
pub fn resolve_method(options: &OptionBag) -> Result<HttpMethod, FetchError> {
    if let Some(method) = options.method.as_deref() {
        return method.parse();
    }
    if options.show_headers_only {
        return Ok(HttpMethod::Head);
    }
    if options.data.is_some() {
        return Ok(HttpMethod::Post);
    }
    Ok(HttpMethod::Get)
}

/// Split a `name:value` line on its first colon. Lines without a colon are
/// not headers and yield `None`.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    Some((name.trim().to_string(), value.trim().to_string()))
}

/// Parse every `-H` line, dropping malformed ones. A repeated name replaces
/// the earlier value in place.
pub fn parse_headers(lines: &[String]) -> HttpHeaders {
    let mut headers: HttpHeaders = Vec::new();
    for line in lines {
        let Some((name, value)) = parse_header_line(line) else {
            tracing::debug!("Dropping header line without a colon: {line:?}");
            continue;
        };
        match headers.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => headers.push((name, value)),
        }
    }
    headers
}

/// Resolve a `-d` value. `@path` opens the file; a missing file is recorded
/// as a warning and leaves the request without a body.
fn resolve_body(
    data: &str,
    warnings: &mut Vec<FetchError>,
) -> Result<Option<RequestBody>, FetchError> {
    let Some(path) = data.strip_prefix(DATA_FILE_PREFIX) else {
        return Ok(Some(RequestBody::Bytes(data.as_bytes().to_vec())));
    };

    let path = PathBuf::from(path);
    match open_body_file(&path) {
        Ok(file) => {
            tracing::debug!("Sending body from {}", path.display());
            Ok(Some(RequestBody::File { path, file }))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("Data file {} does not exist", path.display());
            warnings.push(FetchError::MissingBodyFile { path });
            Ok(None)
        }
        Err(source) => Err(FetchError::UnopenableBodyFile { path, source }),
    }
}

fn open_body_file(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::other("is a directory"));
    }
    Ok(file)
}

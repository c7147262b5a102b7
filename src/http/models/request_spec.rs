//! # Request Spec
//!
//! Fully resolved description of the one outbound request: what to send,
//! and how the transport must be configured to send it.

use std::fmt;
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::FetchError;

/// Type alias for ordered request headers
pub type HttpHeaders = Vec<(String, String)>;

/// Methods fetch can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Options,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = FetchError;

    /// Method names match exactly; `get` is not `GET`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "OPTIONS" => Ok(HttpMethod::Options),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(FetchError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Options => reqwest::Method::OPTIONS,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Where the request body comes from
#[derive(Debug)]
pub enum RequestBody {
    /// Literal `-d` content
    Bytes(Vec<u8>),
    /// An opened `-d @path` file; closed when the spec is dropped
    File { path: PathBuf, file: File },
}

/// Basic auth credentials from `-u USER[:PASSWORD]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

impl BasicAuth {
    /// Split on the first colon only; a missing colon means no password.
    pub fn parse(user: &str) -> Self {
        match user.split_once(':') {
            Some((username, password)) => Self {
                username: username.to_string(),
                password: Some(password.to_string()),
            },
            None => Self {
                username: user.to_string(),
                password: None,
            },
        }
    }
}

/// Client-level policy; independent of the request itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Skip TLS certificate verification
    pub insecure_tls: bool,
    /// Follow `Location` headers instead of returning the first response
    pub follow_redirects: bool,
    pub user_agent: String,
}

/// The resolved outbound request
#[derive(Debug)]
pub struct RequestSpec {
    method: HttpMethod,
    url: String,
    headers: HttpHeaders,
    body: Option<RequestBody>,
    auth: Option<BasicAuth>,
    transport: TransportConfig,
    warnings: Vec<FetchError>,
}

impl RequestSpec {
    pub fn new(
        method: HttpMethod,
        url: String,
        headers: HttpHeaders,
        body: Option<RequestBody>,
        auth: Option<BasicAuth>,
        transport: TransportConfig,
        warnings: Vec<FetchError>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
            auth,
            transport,
            warnings,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    /// First value for an exact header name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn auth(&self) -> Option<&BasicAuth> {
        self.auth.as_ref()
    }

    pub fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    /// Non-fatal problems found while building
    pub fn warnings(&self) -> &[FetchError] {
        &self.warnings
    }

    /// Move the body out for sending; the file, if any, closes once the
    /// transport drops it
    pub fn take_body(&mut self) -> Option<RequestBody> {
        self.body.take()
    }
}

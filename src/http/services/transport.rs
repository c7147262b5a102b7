//! # Transport
//!
//! Sends a [`RequestSpec`] over the network and hands back a [`ResponseView`].
//! TLS verification and redirect policy live on the client, not the request.

use hyper::ext::ReasonPhrase;
use reqwest::blocking::{Body, Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::StatusCode;

use crate::error::FetchError;
use crate::http::models::{HttpHeaders, RequestBody, RequestSpec, ResponseView, TransportConfig};

/// Executes a single resolved request
pub trait Transport {
    fn execute(&self, spec: RequestSpec) -> Result<ResponseView, FetchError>;
}

/// Blocking reqwest transport; builds a fresh client per request
#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        Self
    }

    /// Build the client for a transport policy
    pub fn client(config: &TransportConfig) -> Result<Client, FetchError> {
        let redirect = if config.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure_tls)
            .redirect(redirect)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, mut spec: RequestSpec) -> Result<ResponseView, FetchError> {
        let client = Self::client(spec.transport())?;
        let headers = header_map(spec.headers())?;

        let mut request = client
            .request(spec.method().into(), spec.url())
            .headers(headers);
        if let Some(auth) = spec.auth() {
            request = request.basic_auth(&auth.username, auth.password.as_ref());
        }
        if let Some(body) = spec.take_body() {
            request = request.body(Body::from(body));
        }

        tracing::debug!("Sending {} {}", spec.method(), spec.url());
        let response = request.send().map_err(|e| {
            tracing::debug!("HTTP request failed: {e}");
            FetchError::Transport(e)
        })?;
        tracing::debug!("Received {} {:?}", response.status(), response.version());

        to_response_view(response)
    }
}

impl From<RequestBody> for Body {
    fn from(body: RequestBody) -> Self {
        match body {
            RequestBody::Bytes(bytes) => Body::from(bytes),
            RequestBody::File { file, .. } => Body::from(file),
        }
    }
}

/// Convert the user's headers into a wire header map. Later values for the
/// same name replace earlier ones.
pub fn header_map(headers: &HttpHeaders) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || FetchError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn to_response_view(response: Response) -> Result<ResponseView, FetchError> {
    let mut view = ResponseView::new(
        format!("{:?}", response.version()),
        status_text(
            response.status(),
            response.extensions().get::<ReasonPhrase>(),
        ),
    );

    let headers = response.headers();
    for name in headers.keys() {
        let canonical = canonical_header_name(name.as_str());
        for value in headers.get_all(name) {
            view.push_header(
                canonical.clone(),
                String::from_utf8_lossy(value.as_bytes()),
            );
        }
    }

    let body = response.bytes()?;
    Ok(view.with_body(body))
}

/// `"<code> <reason>"`. The reason the server sent wins; hyper only records
/// it when it differs from the canonical one. Without either, just the code.
pub fn status_text(status: StatusCode, sent_reason: Option<&ReasonPhrase>) -> String {
    let reason = match sent_reason {
        Some(phrase) => Some(String::from_utf8_lossy(phrase.as_bytes()).into_owned()),
        None => status.canonical_reason().map(str::to_string),
    };
    match reason {
        Some(reason) if !reason.is_empty() => format!("{} {reason}", status.as_u16()),
        _ => status.as_u16().to_string(),
    }
}

/// Canonical MIME form: `x-request-id` becomes `X-Request-Id`.
pub fn canonical_header_name(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    canonical
}

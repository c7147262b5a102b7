//! Response view model
//!
//! Normalized HTTP response as received, independent of the client library
//! that produced it. Rendering only ever reads this.

use bytes::Bytes;

/// One response header name with all of its values, in delivery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub values: Vec<String>,
}

/// A received HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseView {
    /// Protocol, e.g. `HTTP/1.1`
    pub protocol: String,
    /// Status code and reason, e.g. `200 OK`
    pub status: String,
    /// Header multimap in the order the transport delivered it
    pub headers: Vec<HeaderEntry>,
    pub body: Bytes,
}

impl ResponseView {
    pub fn new(protocol: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            status: status.into(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Append a header value, grouping it under an existing entry of the same name
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_header(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn push_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.values.push(value),
            None => self.headers.push(HeaderEntry {
                name,
                values: vec![value],
            }),
        }
    }

    /// All values for a header name
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.values.as_slice())
    }
}

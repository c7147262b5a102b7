//! # Option Bag
//!
//! The validated, strongly-typed set of user options a single fetch run is
//! built from. Populated once by the command-line layer and only read after.

use crate::config::default_user_agent;

/// User-supplied request options
#[derive(Debug, Clone, PartialEq)]
pub struct OptionBag {
    /// URL from `--url`; wins over the positional URL
    pub url: Option<String>,
    /// URL from the positional argument
    pub positional_url: Option<String>,
    /// Method from `-X`; `None` means not set by the user
    pub method: Option<String>,
    /// Raw `name:value` lines from each `-H`, in command-line order
    pub header_lines: Vec<String>,
    /// `-d` value; `Some("")` still counts as set
    pub data: Option<String>,
    /// `-u` value, `USER[:PASSWORD]`
    pub user: Option<String>,
    /// `-A` value
    pub user_agent: String,
    /// `-k`
    pub insecure_tls: bool,
    /// `-L`
    pub follow_redirects: bool,
    /// `-I`
    pub show_headers_only: bool,
    /// `-i`
    pub include_headers: bool,
}

impl OptionBag {
    /// Resolve the target URL. `--url` wins over the positional argument;
    /// empty values count as absent.
    pub fn resolve_url(&self) -> Option<&str> {
        [self.url.as_deref(), self.positional_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
    }

    /// Whether the status line and headers are printed
    pub fn prints_headers(&self) -> bool {
        self.include_headers || self.show_headers_only
    }

    /// Whether the response body is printed
    pub fn prints_body(&self) -> bool {
        !self.show_headers_only
    }
}

impl Default for OptionBag {
    fn default() -> Self {
        Self {
            url: None,
            positional_url: None,
            method: None,
            header_lines: Vec::new(),
            data: None,
            user: None,
            user_agent: default_user_agent(),
            insecure_tls: false,
            follow_redirects: false,
            show_headers_only: false,
            include_headers: false,
        }
    }
}

//! Outgoing HTTP requests.
//!
//! A [`Request`] is what a [`crate::Transport`] sends: a method, an absolute
//! URL and headers. latch never sends a request body.
//!
//! # Example
//!
//! ```
//! use latch_core::{Method, Request};
//!
//! let request = Request::new(Method::Get, "https://api.example.com/quotes".parse().unwrap())
//!     .header("Accept", "application/json");
//!
//! assert_eq!(request.get_header("accept"), Some("application/json"));
//! ```

use std::collections::HashMap;

use crate::Method;

/// An HTTP request with method, URL and headers.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
}

impl Request {
    /// Creates a request without headers.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name, ignoring ASCII case.
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        crate::response::lookup(&self.headers, name)
    }

    /// Consume into (method, url, headers).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>) {
        (self.method, self.url, self.headers)
    }
}

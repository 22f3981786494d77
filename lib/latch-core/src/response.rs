//! HTTP response handling.
//!
//! [`Response`] is the fully buffered answer of a [`crate::Transport`]:
//! status, headers and body bytes. Header lookups ignore ASCII case.

use std::collections::HashMap;

use bytes::Bytes;

use crate::{DecodeError, MediaType, header};

/// Case-insensitive lookup in a header map.
pub(crate) fn lookup<'h>(headers: &'h HashMap<String, String>, name: &str) -> Option<&'h str> {
    headers.get(name).map(String::as_str).or_else(|| {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    })
}

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Single header value by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        lookup(&self.headers, name)
    }

    /// Raw `Content-Type` header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header(header::CONTENT_TYPE.as_str())
    }

    /// Parsed `Content-Type`, if present and well formed.
    #[must_use]
    pub fn media_type(&self) -> Option<MediaType> {
        self.content_type().and_then(MediaType::parse)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Deserialize the response body as JSON, whatever its content type.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, DecodeError> {
        crate::from_json(&self.body)
    }

    /// The response body as text, with one trailing newline stripped.
    #[must_use]
    pub fn text(&self) -> String {
        crate::read_text(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentKind;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn response_basic() {
        let response = Response::new(
            200,
            headers(&[("Content-Type", "application/json")]),
            Bytes::from(r#"{"id":1}"#),
        );

        assert_eq!(response.status(), 200);
        assert_eq!(response.content_type(), Some("application/json"));
        assert_eq!(response.body().as_ref(), br#"{"id":1}"#);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = Response::new(204, headers(&[("custom-header", "bla")]), Bytes::new());

        assert_eq!(response.header("Custom-Header"), Some("bla"));
        assert_eq!(response.header("CUSTOM-HEADER"), Some("bla"));
        assert_eq!(response.header("custom-header"), Some("bla"));
        assert_eq!(response.header("Other-Header"), None);
    }

    #[test]
    fn media_type_from_content_type() {
        let response = Response::new(
            200,
            headers(&[("content-type", "text/plain; charset=utf-8")]),
            Bytes::new(),
        );
        let media = response.media_type().expect("media type");
        assert_eq!(media.kind(), ContentKind::PlainText);

        let response = Response::new(200, HashMap::new(), Bytes::new());
        assert!(response.media_type().is_none());
    }

    #[test]
    fn response_json_and_text() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Greeting {
            message: String,
        }

        let response = Response::new(
            200,
            HashMap::new(),
            Bytes::from(r#"{"message":"Hello, client"}"#),
        );
        let greeting: Greeting = response.json().expect("deserialize");
        assert_eq!(greeting.message, "Hello, client");

        let response = Response::new(200, HashMap::new(), Bytes::from("Hello, client\n"));
        assert_eq!(response.text(), "Hello, client");
    }
}

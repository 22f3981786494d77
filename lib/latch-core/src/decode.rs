//! Body decoders.

use crate::DecodeError;

/// Maximum number of body bytes kept in a [`DecodeError::Json`] for diagnostics.
pub const BODY_SNIPPET_LIMIT: usize = 512;

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the field that failed
/// (e.g., "user.address.city"). The error also carries the leading
/// [`BODY_SNIPPET_LIMIT`] bytes of the body.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if the bytes are not valid JSON for `T`.
///
/// # Example
///
/// ```
/// use latch_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Greeting { message: String }
///
/// let bytes = br#"{"message":"Hello, client"}"#;
/// let greeting: Greeting = from_json(bytes).expect("deserialize");
/// assert_eq!(greeting, Greeting { message: "Hello, client".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| DecodeError::Json {
        path: e.path().to_string(),
        message: e.inner().to_string(),
        body: snippet(bytes),
    })
}

/// Read a body as text.
///
/// Invalid UTF-8 sequences are replaced, so this never fails. A single
/// trailing newline (`\n` or `\r\n`) is stripped.
///
/// # Example
///
/// ```
/// use latch_core::read_text;
///
/// assert_eq!(read_text(b"Hello, client\n"), "Hello, client");
/// assert_eq!(read_text(b"two\n\n"), "two\n");
/// ```
#[must_use]
pub fn read_text(bytes: &[u8]) -> String {
    let bytes = bytes
        .strip_suffix(b"\r\n")
        .or_else(|| bytes.strip_suffix(b"\n"))
        .unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn snippet(bytes: &[u8]) -> String {
    let head = bytes.get(..BODY_SNIPPET_LIMIT).unwrap_or(bytes);
    String::from_utf8_lossy(head).into_owned()
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
            age: u32,
        }

        let bytes = br#"{"name":"Alice","age":30}"#;
        let user: User = from_json(bytes).expect("deserialize");

        assert_eq!(
            user,
            User {
                name: "Alice".to_string(),
                age: 30,
            }
        );
    }

    #[test]
    fn from_json_syntax_error_keeps_body() {
        let result: Result<serde_json::Value, _> = from_json(b"not json");

        let_assert!(Err(DecodeError::Json { body, .. }) = result);
        check!(body == "not json");
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<User, _> = from_json(br#"{"address":{}}"#);

        let_assert!(Err(DecodeError::Json { path, message, .. }) = result);
        check!(path.contains("address"));
        check!(message.contains("city"));
    }

    #[test]
    fn from_json_truncates_large_body() {
        let body = format!("[{}", "1,".repeat(BODY_SNIPPET_LIMIT));
        let result: Result<Vec<u8>, _> = from_json(body.as_bytes());

        let_assert!(Err(DecodeError::Json { body: kept, .. }) = result);
        check!(kept.len() == BODY_SNIPPET_LIMIT);
    }

    #[test]
    fn read_text_strips_one_newline() {
        check!(read_text(b"Hello, client\n") == "Hello, client");
        check!(read_text(b"Hello, client\r\n") == "Hello, client");
        check!(read_text(b"Hello, client") == "Hello, client");
        check!(read_text(b"a\n\n") == "a\n");
        check!(read_text(b"") == "");
    }

    #[test]
    fn read_text_is_lossy() {
        check!(read_text(b"caf\xC3\xA9") == "café");
        check!(read_text(b"\xFF") == "\u{FFFD}");
    }
}

//! Content type classification.
//!
//! The response `Content-Type` picks the decoder for the body destination.

use std::fmt;

/// The decoder family selected by a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// JSON body: the subtype is or ends in `json`.
    Json,
    /// Plain text body (`text/plain`).
    PlainText,
    /// Anything else.
    Unsupported,
}

/// A parsed media type, without its parameters.
///
/// Type and subtype are stored lowercased.
///
/// # Example
///
/// ```
/// use latch_core::{ContentKind, MediaType};
///
/// let media = MediaType::parse("Application/Problem+JSON; charset=utf-8").expect("media type");
/// assert_eq!(media.essence(), "application/problem+json");
/// assert_eq!(media.kind(), ContentKind::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    kind: String,
    subtype: String,
}

impl MediaType {
    /// Parse a `Content-Type` value, ignoring parameters.
    ///
    /// Returns `None` if the value is not of the `type/subtype` form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim();
        let (kind, subtype) = essence.split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        Some(Self {
            kind: kind.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
        })
    }

    /// The top-level type (e.g., `application`).
    #[must_use]
    pub fn type_(&self) -> &str {
        &self.kind
    }

    /// The subtype (e.g., `json`).
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// The `type/subtype` string.
    #[must_use]
    pub fn essence(&self) -> String {
        format!("{}/{}", self.kind, self.subtype)
    }

    /// The decoder family for this media type.
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        if self.subtype.ends_with("json") {
            ContentKind::Json
        } else if self.kind == "text" && self.subtype == "plain" {
            ContentKind::PlainText
        } else {
            ContentKind::Unsupported
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)
    }
}

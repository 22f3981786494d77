//! Response destinations.
//!
//! A body destination is one of a closed set of typed slots; the response
//! content type decides which decoder fills it.

use std::fmt;

use latch_core::{ContentKind, DecodeError, Response, from_json};
use serde::de::DeserializeOwned;

type JsonDecoder<'a> = Box<dyn FnOnce(&[u8]) -> Result<(), DecodeError> + Send + 'a>;

/// Where the response body goes.
pub(crate) enum BodySlot<'a> {
    /// A string, filled from `text/plain` or from a JSON string value.
    Text(&'a mut String),
    /// A structured value, filled from JSON only.
    Json(JsonDecoder<'a>),
}

impl<'a> BodySlot<'a> {
    pub(crate) fn text(destination: &'a mut String) -> Self {
        Self::Text(destination)
    }

    pub(crate) fn json<T>(destination: &'a mut T) -> Self
    where
        T: DeserializeOwned + Send + 'a,
    {
        Self::Json(Box::new(move |bytes| {
            *destination = from_json(bytes)?;
            Ok(())
        }))
    }

    /// Decode the response body into the destination.
    ///
    /// The destination is written only when decoding succeeds.
    pub(crate) fn decode(self, response: &Response) -> Result<(), DecodeError> {
        let unsupported = || DecodeError::UnsupportedContentType {
            content_type: response.content_type().map(str::to_string),
        };
        let media = response.media_type().ok_or_else(unsupported)?;

        match (media.kind(), self) {
            (ContentKind::Json, Self::Text(destination)) => {
                *destination = response.json()?;
            }
            (ContentKind::Json, Self::Json(decode)) => decode(response.body().as_ref())?,
            (ContentKind::PlainText, Self::Text(destination)) => {
                *destination = response.text();
            }
            (ContentKind::PlainText, Self::Json(_)) => {
                return Err(DecodeError::TargetMismatch {
                    content_type: media.to_string(),
                });
            }
            (ContentKind::Unsupported, _) => return Err(unsupported()),
        }

        Ok(())
    }
}

impl fmt::Debug for BodySlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(_) => f.write_str("Text"),
            Self::Json(_) => f.write_str("Json"),
        }
    }
}

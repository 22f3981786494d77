//! Core types and traits for the latch fluent HTTP client.
//!
//! This crate provides the transport-independent pieces used by latch:
//! - [`Method`] - HTTP method enum
//! - [`Request`] - outgoing HTTP request handed to a transport
//! - [`Response`] - buffered HTTP response returned by a transport
//! - [`Transport`] - the seam between the client and the network
//! - [`MediaType`] and [`ContentKind`] - content type classification for decoding
//! - [`StatusExpectation`] - the status validation rule of a request
//! - [`Error`], [`TransportError`], [`DecodeError`] and [`Result`] - Error handling
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod decode;
mod error;
mod media;
mod method;
pub mod prelude;
mod request;
mod response;
mod status;
mod transport;

pub use decode::{BODY_SNIPPET_LIMIT, from_json, read_text};
pub use error::{BoxError, DecodeError, Error, Result, TransportError, TransportErrorKind};
pub use media::{ContentKind, MediaType};
pub use method::Method;
pub use request::Request;
pub use response::Response;
pub use status::StatusExpectation;
pub use transport::Transport;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};

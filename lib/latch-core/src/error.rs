//! Error types for latch.
//!
//! Every failure of a request is reported to the caller of `run`; nothing is
//! retried, logged or swallowed on the way. The taxonomy follows the request
//! pipeline: the transport fails first, then status validation, then body
//! decoding.

use std::fmt;

use bytes::Bytes;
use derive_more::{Display, Error, From};

use crate::StatusExpectation;

/// Boxed underlying cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// Transport Error
// ============================================================================

/// Category of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TransportErrorKind {
    /// DNS resolution or TCP connection failure.
    #[display("connection error")]
    Connect,
    /// TLS handshake or certificate failure.
    #[display("TLS error")]
    Tls,
    /// The transport deadline elapsed.
    #[display("request timeout")]
    Timeout,
    /// The response body could not be read.
    #[display("body read error")]
    Body,
    /// Any other transport failure.
    #[display("transport error")]
    Other,
}

/// A failure of the underlying HTTP transport, wrapping its cause.
///
/// No response exists when this error is returned, so no header binding or
/// body decoding has happened.
#[derive(Debug)]
pub struct TransportError {
    kind: TransportErrorKind,
    source: BoxError,
}

impl TransportError {
    /// Create a transport error of the given kind.
    #[must_use]
    pub fn new(kind: TransportErrorKind, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connect(source: impl Into<BoxError>) -> Self {
        Self::new(TransportErrorKind::Connect, source)
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(source: impl Into<BoxError>) -> Self {
        Self::new(TransportErrorKind::Tls, source)
    }

    /// Create a timeout error.
    #[must_use]
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        Self::new(TransportErrorKind::Timeout, source)
    }

    /// Create a body read error.
    #[must_use]
    pub fn body(source: impl Into<BoxError>) -> Self {
        Self::new(TransportErrorKind::Body, source)
    }

    /// Create an uncategorized transport error.
    #[must_use]
    pub fn other(source: impl Into<BoxError>) -> Self {
        Self::new(TransportErrorKind::Other, source)
    }

    /// The failure category.
    #[must_use]
    pub const fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// Consume into the underlying cause.
    #[must_use]
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.source)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

// ============================================================================
// Decode Error
// ============================================================================

/// Failure to decode a response body into its destination.
#[derive(Debug, Display, Error)]
pub enum DecodeError {
    /// No decoder handles the response content type.
    #[display(
        "no decoder available for content type {}",
        content_type.as_deref().unwrap_or("(none)")
    )]
    UnsupportedContentType {
        /// The declared content type, if the response had one.
        content_type: Option<String>,
    },

    /// The body is not valid JSON for the destination type.
    #[display("JSON decode error at '{path}': {message}")]
    Json {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Parser error message.
        message: String,
        /// Leading part of the raw body, for diagnostics.
        body: String,
    },

    /// The content type cannot be decoded into the destination kind.
    #[display("cannot decode a {content_type} body into a structured destination")]
    TargetMismatch {
        /// The declared content type.
        content_type: String,
    },
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for latch operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The transport failed before a response was received.
    #[display("{_0}")]
    #[from]
    Transport(TransportError),

    /// The response status did not satisfy the request's expectation.
    #[display("unexpected status {status} (expected {expected})")]
    #[from(skip)]
    UnexpectedStatus {
        /// Actual HTTP status code.
        status: u16,
        /// The expectation that was not met.
        expected: StatusExpectation,
        /// Response body, if it was not empty.
        #[error(not(source))]
        body: Option<Bytes>,
    },

    /// The response body could not be decoded into its destination.
    #[display("{_0}")]
    #[from]
    Decode(DecodeError),

    /// URL parsing or joining error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The request cannot be sent as configured.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unexpected status error, keeping the body when not empty.
    #[must_use]
    pub fn unexpected_status(status: u16, expected: StatusExpectation, body: Bytes) -> Self {
        Self::UnexpectedStatus {
            status,
            expected,
            body: (!body.is_empty()).then_some(body),
        }
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is a transport error.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the transport deadline elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.kind() == TransportErrorKind::Timeout)
    }

    /// Returns `true` if the transport could not connect.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(err) if err.kind() == TransportErrorKind::Connect)
    }

    /// Returns `true` if the response status was rejected.
    #[must_use]
    pub const fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    /// Returns `true` if the body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns the HTTP status code if this is an unexpected status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this is an unexpected status error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::UnexpectedStatus { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the body of an unexpected status error as JSON.
    ///
    /// Returns `None` if there is no body or this is not a status error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct Problem {
    ///     title: String,
    /// }
    ///
    /// if let Err(err) = client.get("/orders/7").into_json(&mut order).run().await {
    ///     if let Some(Ok(problem)) = err.decode_body::<Problem>() {
    ///         eprintln!("server said: {}", problem.title);
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body()
            .map(|body| crate::from_json(body).map_err(Self::Decode))
    }
}

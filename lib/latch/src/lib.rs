//! Fluent HTTP client that binds responses into your variables.
//!
//! Build a request with chained calls, say where the body and headers should
//! go, and run it. The response `Content-Type` picks the decoder, and the
//! status is validated before anything is decoded.
//!
//! # Example
//!
//! ```ignore
//! use latch::prelude::*;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! let client = Client::new("https://api.example.com")?.accept("application/json");
//!
//! let mut greeting = Greeting::default();
//! let mut request_id = String::new();
//! client
//!     .get("/greeting")
//!     .into_json(&mut greeting)
//!     .header_into("X-Request-Id", &mut request_id)
//!     .run()
//!     .await?;
//! ```
//!
//! Requests go through a [`Transport`]; [`HyperTransport`] is the default and
//! accepts tower [`middleware`] layers.

mod bind;
mod builder;
mod client;
mod connector;
pub mod middleware;
pub mod prelude;
mod transport;

pub use builder::RequestBuilder;
pub use client::Client;
pub use transport::{
    BoxedService, HyperTransport, HyperTransportBuilder, ServiceFuture, TransportConfig,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use latch_core::{
    BoxError, ContentKind, DecodeError, Error, MediaType, Method, Request, Response, Result,
    StatusExpectation, Transport, TransportError, TransportErrorKind, from_json, read_text,
};

// Re-export http types for status codes and headers
pub use latch_core::{StatusCode, header};

pub use url;

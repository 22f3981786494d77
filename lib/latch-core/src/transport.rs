//! The transport seam.
//!
//! A [`Transport`] sends a [`Request`] and returns the fully buffered
//! [`Response`]. Connection pooling, TLS, redirects and deadlines are the
//! transport's business; latch only decides what to send and what to do with
//! the answer.
//!
//! Implement it directly for fakes in tests or for custom stacks.
//!
//! # Example
//!
//! ```ignore
//! use latch_core::{Request, Response, Transport, TransportError};
//!
//! struct Canned(Response);
//!
//! impl Transport for Canned {
//!     async fn execute(&self, _request: Request) -> Result<Response, TransportError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

use std::future::Future;

use crate::{Request, Response, TransportError};

/// Core HTTP transport trait.
pub trait Transport: Send + Sync {
    /// Send the request and read the whole response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no complete response was received:
    /// - Connection or DNS errors
    /// - TLS errors
    /// - Timeouts
    /// - Body read errors
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

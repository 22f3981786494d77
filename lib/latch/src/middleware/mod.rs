//! Tower middleware layers for the latch transport.
//!
//! Layers wrap the default [`crate::HyperTransport`] through
//! [`crate::HyperTransportBuilder::layer`]. Any tower layer whose service
//! speaks `Service<Request, Response = Response, Error = TransportError>`
//! fits.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-logging` | `.with_logging()` / `.with_debug_logging()` helpers |
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy glob
//! importing:
//!
//! ```ignore
//! use latch::prelude::*;
//! ```

pub use crate::{
    Client, Error, HyperTransport, Method, RequestBuilder, Result, StatusCode, Transport,
};
pub use serde::Deserialize;

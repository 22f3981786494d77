//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use latch_core::prelude::*;
//! ```

pub use crate::{
    ContentKind, DecodeError, Error, MediaType, Method, Request, Response, Result,
    StatusExpectation, Transport, TransportError, from_json, read_text,
};

//! Response status validation.

use std::fmt;

use bytes::Bytes;

use crate::{Error, Result};

/// The status codes a request accepts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusExpectation {
    /// Any status in the 200–299 range.
    #[default]
    Success,
    /// Exactly this status, any other (including other 2xx codes) fails.
    Exactly(u16),
}

impl StatusExpectation {
    /// Returns `true` if `status` satisfies this expectation.
    #[must_use]
    pub const fn matches(self, status: u16) -> bool {
        match self {
            Self::Success => status >= 200 && status < 300,
            Self::Exactly(expected) => status == expected,
        }
    }

    /// Validate a response status.
    ///
    /// On mismatch, the returned [`Error::UnexpectedStatus`] carries the
    /// response body for diagnostics.
    pub fn check(self, status: u16, body: &Bytes) -> Result<()> {
        if self.matches(status) {
            Ok(())
        } else {
            Err(Error::unexpected_status(status, self, body.clone()))
        }
    }
}

impl fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("2xx"),
            Self::Exactly(status) => write!(f, "{status}"),
        }
    }
}

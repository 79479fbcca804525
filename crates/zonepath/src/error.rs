//! Error type for parsing and geometry guards.
//!
//! An unreachable target is not an error; it is reported through the
//! `cfg::UNREACHABLE` sentinel length.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input stream does not have the expected shape.
    #[error("invalid input at {field}: {reason}")]
    InvalidInput {
        /// Which value was being read, e.g. `zones[2].radius`.
        field: String,
        reason: String,
    },

    /// A zero-length segment was used where a direction is required.
    #[error("degenerate geometry: zero-length segment")]
    DegenerateGeometry,
}

impl Error {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Common error types used throughout the crate.

use std::fmt;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type covering failures in fixed-width bit vector operations.
#[derive(Debug)]
pub enum Error {
    /// A bit position was outside the vector's width.
    OutOfRange(String),
    /// An argument violated preconditions.
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::OutOfRange`] with the provided message.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange(msg) => write!(f, "{msg}"),
            Error::InvalidArgument(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

//! Error taxonomy shared by the container and the shape types.
//!
//! All conditions are local and recoverable: callers decide whether to retry,
//! prompt again, or abort the current operation.

use std::fmt;

/// Errors surfaced by figure construction, parsing, and array access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FigureError {
    /// A constructor argument violates an invariant (e.g. radius <= 0).
    InvalidArgument { reason: String },
    /// Index at or past the current number of live elements.
    OutOfRange { index: usize, len: usize },
    /// A numeric token was missing, malformed, or not finite.
    ParseFailure { reason: String },
}

impl FigureError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            reason: reason.into(),
        }
    }

    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range (size is {len})")
            }
            Self::ParseFailure { reason } => write!(f, "parse failure: {reason}"),
        }
    }
}

impl std::error::Error for FigureError {}

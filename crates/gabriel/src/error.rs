//! Error type shared by the triangulation provider, the builder and the graph state.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GabrielError>;

/// Construction failures. No operation returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GabrielError {
    /// The point set cannot support a triangulation (too few, collinear or coincident points).
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
    /// A caller-supplied argument is malformed (non-finite coordinate, bad simplex, bad metric).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl GabrielError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

//! # Grid Errors
//!
//! Error types for grid sizing and partitioning.

use thiserror::Error;

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid sizing or partitioning.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// Input dimensions cannot produce a well-formed layout. Raised before
    /// any partitioning happens so the degenerate segment-count blow-up of
    /// a bed smaller than one grid unit can never occur.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the offending input.
        reason: String,
    },
}

impl GridError {
    /// Convenience constructor for [`GridError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        GridError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::invalid("bed narrower than one grid unit");
        assert!(err.to_string().contains("invalid configuration"));
        assert!(err.to_string().contains("bed narrower"));
    }
}

//! # Assembly Errors
//!
//! Error types for segment solid composition.

use thiserror::Error;

/// Result type alias for assembly operations.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that can occur while composing segment solids.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssemblyError {
    /// Grid layout input was invalid.
    #[error(transparent)]
    Grid(#[from] plate_grid::GridError),

    /// Tooth profile parameters were invalid.
    #[error(transparent)]
    Profile(#[from] plate_profile::ProfileError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use plate_grid::GridError;

    #[test]
    fn grid_errors_pass_through_transparently() {
        let err: AssemblyError = GridError::invalid("bad bed").into();
        assert!(err.to_string().contains("bad bed"));
    }
}

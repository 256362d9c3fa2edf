//! # Profile Errors
//!
//! Error types for tooth profile generation.

use thiserror::Error;

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur while generating a tooth or cavity outline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// The pattern parameters cannot produce a well-formed outline.
    #[error("malformed profile: {reason}")]
    MalformedProfile {
        /// Human-readable description of the offending parameter.
        reason: String,
    },
}

impl ProfileError {
    /// Convenience constructor for [`ProfileError::MalformedProfile`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        ProfileError::MalformedProfile {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

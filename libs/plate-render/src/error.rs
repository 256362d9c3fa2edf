//! # Render Errors
//!
//! Error types for the external engine boundary.

use std::io;

use thiserror::Error;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors surfaced by the external rendering boundary. All of them are
/// recoverable from the caller's point of view: the inputs are intact and
/// the invocation can be retried or reconfigured.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine exited with a failure status.
    #[error("generation failed (exit status {status:?}): {stderr}")]
    GenerationFailed {
        /// Exit code, when the process was not killed by a signal.
        status: Option<i32>,
        /// Captured standard error output.
        stderr: String,
    },

    /// The engine exceeded its wall-clock budget and was killed.
    #[error("generation timed out after {secs} s")]
    Timeout {
        /// The budget that was exceeded, in seconds.
        secs: u64,
    },

    /// Scratch file or process I/O failed before the engine could run.
    #[error("render I/O error: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::GenerationFailed {
            status: Some(1),
            stderr: "CGAL assertion".to_string(),
        };
        assert!(err.to_string().contains("generation failed"));
        assert!(err.to_string().contains("CGAL assertion"));

        let err = RenderError::Timeout { secs: 120 };
        assert!(err.to_string().contains("120"));
    }
}

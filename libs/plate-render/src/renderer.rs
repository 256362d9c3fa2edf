//! # Engine Invocation
//!
//! Spawns the external CAD engine on emitted geometry text, bounded by a
//! wall-clock timeout.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use config::constants::RENDER_TIMEOUT_SECS;
use tokio::process::Command;
use tokio::time;
use tracing::{debug, info, warn};

use crate::error::{RenderError, RenderResult};

/// Handle to a successfully rendered mesh artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Path the engine wrote the artifact to.
    pub path: PathBuf,
}

/// External rendering engine invoked as a subprocess.
///
/// The invocation contract is `<program> -o <output> <source-file>`; the
/// geometry source is staged in a scratch file that is removed when the
/// call returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: PathBuf,
    timeout: Duration,
}

impl Renderer {
    /// Renderer for the given engine binary with the default time budget.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: Duration::from_secs(RENDER_TIMEOUT_SECS),
        }
    }

    /// Overrides the wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the engine on `source`, expecting it to produce `output`.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Io`] when the scratch file or the process cannot be
    ///   set up.
    /// - [`RenderError::GenerationFailed`] on a non-zero exit status.
    /// - [`RenderError::Timeout`] when the budget expires; the process is
    ///   killed.
    ///
    /// On both failure outcomes a partially written `output` artifact is
    /// removed, so a present artifact always means a successful render.
    pub async fn render(&self, source: &str, output: &Path) -> RenderResult<RenderedArtifact> {
        let mut scratch = tempfile::Builder::new()
            .prefix("plate-")
            .suffix(".scad")
            .tempfile()?;
        scratch.write_all(source.as_bytes())?;
        scratch.flush()?;

        debug!(
            program = %self.program.display(),
            source_bytes = source.len(),
            output = %output.display(),
            "invoking rendering engine"
        );

        let child = Command::new(&self.program)
            .arg("-o")
            .arg(output)
            .arg(scratch.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // Dropping the timed-out future drops the child handle, which kills
        // the process (kill_on_drop). The scratch file is removed when
        // `scratch` goes out of scope on every path.
        let outcome = time::timeout(self.timeout, child.wait_with_output()).await;
        match outcome {
            Ok(Ok(out)) if out.status.success() => {
                info!(output = %output.display(), "engine rendered artifact");
                Ok(RenderedArtifact {
                    path: output.to_path_buf(),
                })
            }
            Ok(Ok(out)) => {
                let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
                warn!(status = ?out.status.code(), "engine exited with failure");
                discard_partial_artifact(output);
                Err(RenderError::GenerationFailed {
                    status: out.status.code(),
                    stderr,
                })
            }
            Ok(Err(err)) => Err(RenderError::Io(err)),
            Err(_elapsed) => {
                warn!(secs = self.timeout.as_secs(), "engine timed out, killed");
                discard_partial_artifact(output);
                Err(RenderError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }
}

// A failed or killed engine may have written part of the output artifact.
// Best effort: a missing file is fine, anything else is only worth a log.
fn discard_partial_artifact(output: &Path) {
    match std::fs::remove_file(output) {
        Ok(()) => debug!(output = %output.display(), "removed partial artifact"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(
            output = %output.display(),
            %err,
            "could not remove partial artifact"
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================

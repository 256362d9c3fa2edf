//! # Plate Render Crate
//!
//! Boundary to the external CAD engine that turns emitted geometry text
//! into mesh artifacts.
//!
//! The engine runs as an isolated subprocess with a hard wall-clock budget.
//! The core never parses engine output; it consumes only the exit status
//! and the artifact path it asked for. Scratch source files live in a
//! temporary location and are removed on success and failure alike, and a
//! failed or timed-out invocation never leaves a partial output artifact
//! behind.

pub mod error;
pub mod renderer;

pub use error::{RenderError, RenderResult};
pub use renderer::{RenderedArtifact, Renderer};

//! # Plate Assembly Crate
//!
//! Composes segment solids out of the grid layout, the resolved edge types
//! and the tooth profiles, and serializes them for the external rendering
//! engine.
//!
//! ## Pipeline Position
//!
//! Downstream of `plate-grid` and `plate-profile`: a [`SplitResult`] plus an
//! [`EdgeOverrides`] list and one [`ToothPatternSpec`] become one CSG tree
//! per segment, a combined preview tree, and a per-segment artifact plan
//! for the packaging collaborator.
//!
//! [`SplitResult`]: plate_grid::SplitResult
//! [`EdgeOverrides`]: plate_grid::EdgeOverrides
//! [`ToothPatternSpec`]: plate_profile::ToothPatternSpec

pub mod assemble;
pub mod csg;
pub mod emit;
pub mod error;

pub use assemble::{
    artifact_plan, assemble_segment, combined_preview, SegmentArtifact, ToothPlacement,
};
pub use csg::CsgNode;
pub use emit::emit_scad;
pub use error::{AssemblyError, AssemblyResult};

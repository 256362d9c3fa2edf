//! # Plate Grid Crate
//!
//! Grid layout computations for modular, grid-based storage plates.
//!
//! ## Pipeline Position
//!
//! This crate is the leaf of the generation pipeline: a target footprint in
//! millimetres becomes a grid-cell count with edge padding, an oversized grid
//! becomes a partition of printable segments, and each segment edge resolves
//! to a connector type (male tooth, female cavity, or none).
//!
//! All operations are pure and deterministic: identical inputs always yield
//! identical results, nothing is persisted, and the caller owns all state.

pub mod edges;
pub mod error;
pub mod grid;
pub mod partition;

pub use edges::{EdgeConflict, EdgeOverrides, EdgeType, SegmentEdge, SegmentEdgeOverride};
pub use error::{GridError, GridResult};
pub use grid::{calculate_grid_from_mm, AxisCalculation, GridCalculation, GridFillSpec, PaddingAlignment};
pub use partition::{split_for_bed, Segment, SplitResult};

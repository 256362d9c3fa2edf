//! # Plate Profile Crate
//!
//! Parametric 2D tooth and cavity outlines for interlocking plate segments.
//!
//! ## Coordinate Convention
//!
//! Outlines live in a local frame: the tooth root sits on the `y = 0` line,
//! the insertion axis is `+y`, and the outline is symmetric about `x = 0`.
//! The assembler rotates and translates outlines onto segment edges.
//!
//! A male outline is extruded through the plate thickness; the matching
//! female outline is the same silhouette expanded outward by the fit
//! tolerance and extruded slightly beyond both plate faces so boolean
//! subtraction pierces cleanly.

pub mod error;
pub mod patterns;
pub mod spec;

pub use error::{ProfileError, ProfileResult};
pub use patterns::{female_outline, male_outline, ToothProfile};
pub use spec::{ToothPattern, ToothPatternSpec};

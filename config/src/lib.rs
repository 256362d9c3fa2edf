//! # Config Crate
//!
//! Centralized configuration constants for the plate generator pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_GRID_UNIT_MM};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let residual: f64 = 11.0 - (5.5 + 5.5);
//! assert!(residual.abs() < EPSILON_TOLERANCE);
//!
//! // The standard grid module is 42 mm
//! assert_eq!(DEFAULT_GRID_UNIT_MM, 42.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants, usable from every crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;

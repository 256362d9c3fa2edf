//! Centralized configuration values shared across the plate generator pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used when comparing derived millimetre values.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Standard grid module edge length in millimetres. One socket of a
/// baseplate is one grid unit square.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GRID_UNIT_MM;
/// assert_eq!(DEFAULT_GRID_UNIT_MM, 42.0);
/// ```
pub const DEFAULT_GRID_UNIT_MM: f64 = 42.0;

/// Default printer bed width in millimetres.
pub const DEFAULT_BED_WIDTH_MM: f64 = 220.0;

/// Default printer bed depth in millimetres.
pub const DEFAULT_BED_DEPTH_MM: f64 = 220.0;

/// Default baseplate thickness in millimetres.
pub const DEFAULT_PLATE_THICKNESS_MM: f64 = 5.0;

/// Default depth of the per-cell socket cutout, measured down from the top
/// face of the plate.
pub const DEFAULT_SOCKET_DEPTH_MM: f64 = 4.0;

/// Default inset of a socket cutout from its cell boundary, per side.
pub const DEFAULT_SOCKET_INSET_MM: f64 = 0.25;

/// Default tooth extent along the insertion axis in millimetres. Deep
/// enough that the bulb patterns keep a visible neck below the bulb.
pub const DEFAULT_TOOTH_DEPTH_MM: f64 = 12.0;

/// Default tooth extent across the insertion axis in millimetres.
pub const DEFAULT_TOOTH_WIDTH_MM: f64 = 10.0;

/// Default clearance added to female cavities in millimetres.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TOLERANCE_MM;
/// assert!(DEFAULT_TOLERANCE_MM > 0.0 && DEFAULT_TOLERANCE_MM < 1.0);
/// ```
pub const DEFAULT_TOLERANCE_MM: f64 = 0.15;

/// Extra extrusion margin for female cavities so boolean subtraction cleanly
/// pierces both plate faces.
pub const CAVITY_PIERCE_MM: f64 = 0.1;

/// Number of fixed sample steps for concave neck transitions of the smooth
/// tooth patterns.
///
/// # Examples
/// ```
/// use config::constants::NECK_SAMPLE_STEPS;
/// assert!(NECK_SAMPLE_STEPS >= 8);
/// ```
pub const NECK_SAMPLE_STEPS: usize = 10;

/// Number of fixed sample steps for bulb arcs of the puzzle and wineglass
/// tooth patterns.
pub const BULB_SAMPLE_STEPS: usize = 12;

/// Root width of a dovetail tooth as a fraction of the full tooth width.
pub const DOVETAIL_ROOT_RATIO: f64 = 0.7;

/// Neck width of a puzzle tooth as a fraction of the full tooth width.
pub const PUZZLE_NECK_RATIO: f64 = 0.5;

/// Stem width of a T-slot tooth as a fraction of the full tooth width.
pub const TSLOT_STEM_RATIO: f64 = 0.5;

/// Stem depth of a T-slot tooth as a fraction of the full tooth depth.
pub const TSLOT_STEM_DEPTH_RATIO: f64 = 0.5;

/// Waist width of a wineglass stem as a fraction of the full tooth width.
pub const WINEGLASS_WAIST_RATIO: f64 = 0.4;

/// Default concave depth percentage for the smooth tooth patterns.
pub const DEFAULT_CONCAVE_DEPTH_PCT: f64 = 50.0;

/// Default bulb aspect ratio (height over width) for the wineglass pattern.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Default roof intensity percentage for the wineglass pattern. Zero means
/// no roof ridge.
pub const DEFAULT_ROOF_INTENSITY_PCT: f64 = 0.0;

/// Default roof depth percentage for the wineglass pattern, measured as the
/// fraction of the bulb height affected by the ridge.
pub const DEFAULT_ROOF_DEPTH_PCT: f64 = 30.0;

/// Visual gap between neighbouring segments in the combined preview layout,
/// in millimetres. Presentation only, never part of the fabrication layout.
pub const PREVIEW_GAP_MM: f64 = 5.0;

/// Wall-clock budget for one external renderer invocation, in seconds.
///
/// # Examples
/// ```
/// use config::constants::RENDER_TIMEOUT_SECS;
/// assert_eq!(RENDER_TIMEOUT_SECS, 120);
/// ```
pub const RENDER_TIMEOUT_SECS: u64 = 120;

/// Circle tessellation segment count used when emitting circle primitives.
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Immutable snapshot of the physical plate parameters shared between the
/// assembly and preview stages.
///
/// # Examples
/// ```
/// use config::constants::PlateConfig;
/// let config = PlateConfig::default();
/// assert!(config.grid_unit_mm > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateConfig {
    /// Grid module edge length in millimetres.
    pub grid_unit_mm: f64,
    /// Baseplate thickness in millimetres.
    pub plate_thickness_mm: f64,
    /// Socket cutout depth in millimetres. Must not exceed the thickness.
    pub socket_depth_mm: f64,
    /// Socket inset from the cell boundary, per side, in millimetres.
    pub socket_inset_mm: f64,
    /// Preview gap between segments in millimetres.
    pub preview_gap_mm: f64,
}

impl PlateConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// dimensions.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PlateConfig;
    /// let cfg = PlateConfig::new(42.0, 5.0, 4.0, 0.25, 5.0).expect("valid config");
    /// assert_eq!(cfg.socket_depth_mm, 4.0);
    /// ```
    pub fn new(
        grid_unit_mm: f64,
        plate_thickness_mm: f64,
        socket_depth_mm: f64,
        socket_inset_mm: f64,
        preview_gap_mm: f64,
    ) -> Result<Self, ConfigError> {
        if grid_unit_mm <= 0.0 {
            return Err(ConfigError::InvalidGridUnit(grid_unit_mm));
        }
        if plate_thickness_mm <= 0.0 {
            return Err(ConfigError::InvalidThickness(plate_thickness_mm));
        }
        if socket_depth_mm <= 0.0 || socket_depth_mm >= plate_thickness_mm {
            return Err(ConfigError::InvalidSocketDepth(socket_depth_mm));
        }
        if socket_inset_mm < 0.0 || socket_inset_mm * 2.0 >= grid_unit_mm {
            return Err(ConfigError::InvalidSocketInset(socket_inset_mm));
        }
        if preview_gap_mm < 0.0 {
            return Err(ConfigError::InvalidPreviewGap(preview_gap_mm));
        }
        Ok(Self {
            grid_unit_mm,
            plate_thickness_mm,
            socket_depth_mm,
            socket_inset_mm,
            preview_gap_mm,
        })
    }
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            grid_unit_mm: DEFAULT_GRID_UNIT_MM,
            plate_thickness_mm: DEFAULT_PLATE_THICKNESS_MM,
            socket_depth_mm: DEFAULT_SOCKET_DEPTH_MM,
            socket_inset_mm: DEFAULT_SOCKET_INSET_MM,
            preview_gap_mm: PREVIEW_GAP_MM,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the grid unit is zero or negative.
    InvalidGridUnit(f64),
    /// Raised when the plate thickness is zero or negative.
    InvalidThickness(f64),
    /// Raised when the socket depth is non-positive or swallows the plate.
    InvalidSocketDepth(f64),
    /// Raised when the socket inset is negative or leaves no socket floor.
    InvalidSocketInset(f64),
    /// Raised when the preview gap is negative.
    InvalidPreviewGap(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridUnit(value) => {
                write!(f, "grid_unit_mm must be positive: {value}")
            }
            ConfigError::InvalidThickness(value) => {
                write!(f, "plate_thickness_mm must be positive: {value}")
            }
            ConfigError::InvalidSocketDepth(value) => {
                write!(f, "socket_depth_mm must stay inside the plate: {value}")
            }
            ConfigError::InvalidSocketInset(value) => {
                write!(f, "socket_inset_mm must leave a socket opening: {value}")
            }
            ConfigError::InvalidPreviewGap(value) => {
                write!(f, "preview_gap_mm must be non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

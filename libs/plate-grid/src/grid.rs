//! # Grid Calculator
//!
//! Converts a target footprint in millimetres into an integer or
//! half-integer grid of cells, distributing the leftover space as edge
//! padding.
//!
//! The calculation is per-axis and independent: full cells are floored from
//! the target, and a trailing half cell is added when the caller allows it
//! and the remainder covers at least half a grid unit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, GridResult};

// =============================================================================
// INPUT SPEC
// =============================================================================

/// Where the leftover padding sits relative to the grid content.
///
/// The `Near`/`Far` labels reproduce the established product behaviour
/// literally: `Near` places all padding on the near side, `Far` places all
/// padding on the far side. Callers should not reinterpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingAlignment {
    /// Split the padding evenly between both sides.
    Center,
    /// All padding on the near side (low coordinate), none on the far side.
    Near,
    /// All padding on the far side (high coordinate), none on the near side.
    Far,
}

/// Immutable description of a target footprint to fill with grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridFillSpec {
    /// Target width (X) in millimetres.
    pub target_width_mm: f64,
    /// Target depth (Y) in millimetres.
    pub target_depth_mm: f64,
    /// Grid module edge length in millimetres.
    pub grid_unit_mm: f64,
    /// Allow a trailing half cell on the X axis.
    pub allow_half_cells_x: bool,
    /// Allow a trailing half cell on the Y axis.
    pub allow_half_cells_y: bool,
    /// Padding distribution policy, applied to both axes.
    pub padding_alignment: PaddingAlignment,
}

// =============================================================================
// DERIVED CALCULATION
// =============================================================================

/// Derived grid layout for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCalculation {
    /// Cell count including the optional trailing half cell (n or n + 0.5).
    pub grid_units: f64,
    /// Whole cells floored from the target.
    pub full_cells: u32,
    /// Whether a trailing half cell was added.
    pub has_half_cell: bool,
    /// Millimetres covered by the grid cells.
    pub coverage_mm: f64,
    /// Leftover millimetres distributed as padding.
    pub total_padding_mm: f64,
    /// Padding on the near (low coordinate) side.
    pub padding_near_mm: f64,
    /// Padding on the far (high coordinate) side.
    pub padding_far_mm: f64,
}

/// Derived grid layout for both axes. Recomputed on every input change,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCalculation {
    /// X axis layout.
    pub x: AxisCalculation,
    /// Y axis layout.
    pub y: AxisCalculation,
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Computes the grid layout for a target footprint.
///
/// Per axis: `full_cells = floor(target / unit)`; a half cell is appended
/// when allowed and the remainder is at least half a unit; padding is the
/// uncovered remainder, split by the alignment policy.
///
/// # Errors
///
/// Returns [`GridError::InvalidConfiguration`] when any dimension is zero
/// or negative.
///
/// # Examples
/// ```
/// use plate_grid::{calculate_grid_from_mm, GridFillSpec, PaddingAlignment};
/// let spec = GridFillSpec {
///     target_width_mm: 200.0,
///     target_depth_mm: 200.0,
///     grid_unit_mm: 42.0,
///     allow_half_cells_x: true,
///     allow_half_cells_y: true,
///     padding_alignment: PaddingAlignment::Center,
/// };
/// let calc = calculate_grid_from_mm(&spec).unwrap();
/// assert_eq!(calc.x.full_cells, 4);
/// assert!(calc.x.has_half_cell);
/// assert_eq!(calc.x.grid_units, 4.5);
/// assert_eq!(calc.x.coverage_mm, 189.0);
/// assert_eq!(calc.x.padding_near_mm, 5.5);
/// assert_eq!(calc.x.padding_far_mm, 5.5);
/// ```
pub fn calculate_grid_from_mm(spec: &GridFillSpec) -> GridResult<GridCalculation> {
    if spec.grid_unit_mm <= 0.0 {
        return Err(GridError::invalid(format!(
            "grid unit must be positive: {}",
            spec.grid_unit_mm
        )));
    }
    if spec.target_width_mm <= 0.0 || spec.target_depth_mm <= 0.0 {
        return Err(GridError::invalid(format!(
            "target footprint must be positive: {} x {}",
            spec.target_width_mm, spec.target_depth_mm
        )));
    }

    let x = calculate_axis(
        spec.target_width_mm,
        spec.grid_unit_mm,
        spec.allow_half_cells_x,
        spec.padding_alignment,
    );
    let y = calculate_axis(
        spec.target_depth_mm,
        spec.grid_unit_mm,
        spec.allow_half_cells_y,
        spec.padding_alignment,
    );

    debug!(
        units_x = x.grid_units,
        units_y = y.grid_units,
        padding_x = x.total_padding_mm,
        padding_y = y.total_padding_mm,
        "grid calculated"
    );

    Ok(GridCalculation { x, y })
}

fn calculate_axis(
    target_mm: f64,
    unit_mm: f64,
    allow_half: bool,
    alignment: PaddingAlignment,
) -> AxisCalculation {
    let full_cells = (target_mm / unit_mm).floor() as u32;
    let remainder = target_mm - f64::from(full_cells) * unit_mm;
    let has_half_cell = allow_half && remainder >= unit_mm / 2.0;
    let grid_units = f64::from(full_cells) + if has_half_cell { 0.5 } else { 0.0 };
    let coverage_mm = grid_units * unit_mm;
    let total_padding_mm = target_mm - coverage_mm;
    let (padding_near_mm, padding_far_mm) = split_padding(alignment, total_padding_mm);

    AxisCalculation {
        grid_units,
        full_cells,
        has_half_cell,
        coverage_mm,
        total_padding_mm,
        padding_near_mm,
        padding_far_mm,
    }
}

// Literal mapping: Near piles everything on the near side, Far on the far
// side. Established behaviour, kept verbatim.
fn split_padding(alignment: PaddingAlignment, total_mm: f64) -> (f64, f64) {
    match alignment {
        PaddingAlignment::Center => (total_mm / 2.0, total_mm / 2.0),
        PaddingAlignment::Near => (total_mm, 0.0),
        PaddingAlignment::Far => (0.0, total_mm),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: f64, depth: f64, unit: f64) -> GridFillSpec {
        GridFillSpec {
            target_width_mm: width,
            target_depth_mm: depth,
            grid_unit_mm: unit,
            allow_half_cells_x: false,
            allow_half_cells_y: false,
            padding_alignment: PaddingAlignment::Center,
        }
    }

    #[test]
    fn exact_multiple_has_no_padding() {
        let calc = calculate_grid_from_mm(&spec(210.0, 84.0, 42.0)).unwrap();
        assert_eq!(calc.x.grid_units, 5.0);
        assert_eq!(calc.y.grid_units, 2.0);
        assert_eq!(calc.x.total_padding_mm, 0.0);
        assert_eq!(calc.y.total_padding_mm, 0.0);
    }

    #[test]
    fn remainder_below_half_unit_never_adds_half_cell() {
        let mut s = spec(188.0, 188.0, 42.0); // remainder 20 < 21
        s.allow_half_cells_x = true;
        s.allow_half_cells_y = true;
        let calc = calculate_grid_from_mm(&s).unwrap();
        assert!(!calc.x.has_half_cell);
        assert_eq!(calc.x.grid_units, 4.0);
        assert_eq!(calc.x.total_padding_mm, 20.0);
    }

    #[test]
    fn half_cell_requires_permission() {
        let calc = calculate_grid_from_mm(&spec(200.0, 200.0, 42.0)).unwrap();
        assert!(!calc.x.has_half_cell);
        assert_eq!(calc.x.grid_units, 4.0);
        assert_eq!(calc.x.total_padding_mm, 32.0);
    }

    #[test]
    fn half_cell_permission_can_differ_per_axis() {
        let mut s = spec(200.0, 200.0, 42.0);
        s.allow_half_cells_x = true;
        let calc = calculate_grid_from_mm(&s).unwrap();
        assert!(calc.x.has_half_cell);
        assert!(!calc.y.has_half_cell);
    }

    #[test]
    fn near_alignment_piles_padding_on_near_side() {
        let mut s = spec(200.0, 200.0, 42.0);
        s.padding_alignment = PaddingAlignment::Near;
        let calc = calculate_grid_from_mm(&s).unwrap();
        assert_eq!(calc.x.padding_near_mm, 32.0);
        assert_eq!(calc.x.padding_far_mm, 0.0);
    }

    #[test]
    fn far_alignment_piles_padding_on_far_side() {
        let mut s = spec(200.0, 200.0, 42.0);
        s.padding_alignment = PaddingAlignment::Far;
        let calc = calculate_grid_from_mm(&s).unwrap();
        assert_eq!(calc.x.padding_near_mm, 0.0);
        assert_eq!(calc.x.padding_far_mm, 32.0);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(calculate_grid_from_mm(&spec(0.0, 100.0, 42.0)).is_err());
        assert!(calculate_grid_from_mm(&spec(100.0, -5.0, 42.0)).is_err());
        assert!(calculate_grid_from_mm(&spec(100.0, 100.0, 0.0)).is_err());
    }

    #[test]
    fn spec_round_trips_through_serde() {
        let s = spec(200.0, 188.0, 42.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: GridFillSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert!(json.contains("\"center\""));
    }
}

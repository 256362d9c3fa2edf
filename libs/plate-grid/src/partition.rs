//! # Bed Partitioner
//!
//! Splits a grid that exceeds the printer bed into rectangular segments that
//! each fit the bed, and marks which segment edges sit on internal
//! boundaries (and therefore receive connectors).
//!
//! ## Invariant
//!
//! The segments exactly tile the total grid extent with no gap or overlap;
//! undersized remainder segments appear only on the last row and column.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, GridResult};

// =============================================================================
// SEGMENT
// =============================================================================

/// One printable rectangular piece of a partitioned baseplate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-indexed column of this segment in the partition.
    pub segment_x: u32,
    /// Zero-indexed row of this segment in the partition.
    pub segment_y: u32,
    /// Cell count along X. Fractional when the grid carries a half cell;
    /// smaller than the maximum only on the last column.
    pub grid_units_x: f64,
    /// Cell count along Y, same conventions as `grid_units_x`.
    pub grid_units_y: f64,
    /// True only at an internal boundary with connectors enabled.
    pub has_connector_left: bool,
    /// True only at an internal boundary with connectors enabled.
    pub has_connector_right: bool,
    /// True only at an internal boundary with connectors enabled.
    pub has_connector_front: bool,
    /// True only at an internal boundary with connectors enabled.
    pub has_connector_back: bool,
}

// =============================================================================
// SPLIT RESULT
// =============================================================================

/// Partition of a full grid into bed-sized segments, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Segments by row, then column.
    pub segments: Vec<Vec<Segment>>,
    /// Number of segment columns.
    pub segments_x: u32,
    /// Number of segment rows.
    pub segments_y: u32,
    /// Total segment count.
    pub total_segments: u32,
    /// Largest cell count a segment may span along X.
    pub max_segment_units_x: u32,
    /// Largest cell count a segment may span along Y.
    pub max_segment_units_y: u32,
    /// True when more than one segment is needed on either axis.
    pub needs_split: bool,
}

impl SplitResult {
    /// Looks up the segment at a partition coordinate.
    pub fn segment(&self, segment_x: u32, segment_y: u32) -> Option<&Segment> {
        self.segments
            .get(segment_y as usize)
            .and_then(|row| row.get(segment_x as usize))
    }

    /// Iterates all segments in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().flat_map(|row| row.iter())
    }
}

// =============================================================================
// PARTITIONING
// =============================================================================

/// Partitions `total_units_x` x `total_units_y` grid cells into segments
/// that each fit a `bed_width_mm` x `bed_depth_mm` printer bed.
///
/// Segment `(sx, sy)` spans cells `[sx * max, min(sx * max + max, total))`
/// per axis, which tiles the grid exactly. Connector flags are purely
/// positional: an edge carries a connector iff it faces another segment and
/// connectors are enabled.
///
/// # Errors
///
/// Returns [`GridError::InvalidConfiguration`] when the bed is smaller than
/// one grid unit on either axis (the segment count would degenerate), or
/// when the total extents are below one cell.
///
/// # Examples
/// ```
/// use plate_grid::split_for_bed;
/// // 8x3 cells of 42 mm on a 220x220 bed: two segments side by side.
/// let split = split_for_bed(8.0, 3.0, 220.0, 220.0, 42.0, true).unwrap();
/// assert_eq!(split.max_segment_units_x, 5);
/// assert_eq!((split.segments_x, split.segments_y), (2, 1));
/// assert!(split.needs_split);
/// assert!(split.segment(0, 0).unwrap().has_connector_right);
/// assert!(split.segment(1, 0).unwrap().has_connector_left);
/// ```
pub fn split_for_bed(
    total_units_x: f64,
    total_units_y: f64,
    bed_width_mm: f64,
    bed_depth_mm: f64,
    grid_unit_mm: f64,
    connectors_enabled: bool,
) -> GridResult<SplitResult> {
    if grid_unit_mm <= 0.0 {
        return Err(GridError::invalid(format!(
            "grid unit must be positive: {grid_unit_mm}"
        )));
    }
    if total_units_x < 1.0 || total_units_y < 1.0 {
        return Err(GridError::invalid(format!(
            "grid must span at least one cell per axis: {total_units_x} x {total_units_y}"
        )));
    }

    let max_segment_units_x = (bed_width_mm / grid_unit_mm).floor() as u32;
    let max_segment_units_y = (bed_depth_mm / grid_unit_mm).floor() as u32;
    if max_segment_units_x == 0 || max_segment_units_y == 0 {
        return Err(GridError::invalid(format!(
            "bed {bed_width_mm} x {bed_depth_mm} mm is smaller than one {grid_unit_mm} mm grid unit"
        )));
    }

    let max_x = f64::from(max_segment_units_x);
    let max_y = f64::from(max_segment_units_y);
    let segments_x = (total_units_x / max_x).ceil() as u32;
    let segments_y = (total_units_y / max_y).ceil() as u32;
    let needs_split = segments_x > 1 || segments_y > 1;

    let mut rows = Vec::with_capacity(segments_y as usize);
    for sy in 0..segments_y {
        let start_y = f64::from(sy) * max_y;
        let end_y = (start_y + max_y).min(total_units_y);
        let mut row = Vec::with_capacity(segments_x as usize);
        for sx in 0..segments_x {
            let start_x = f64::from(sx) * max_x;
            let end_x = (start_x + max_x).min(total_units_x);
            row.push(Segment {
                segment_x: sx,
                segment_y: sy,
                grid_units_x: end_x - start_x,
                grid_units_y: end_y - start_y,
                has_connector_left: connectors_enabled && sx > 0,
                has_connector_right: connectors_enabled && sx < segments_x - 1,
                has_connector_front: connectors_enabled && sy > 0,
                has_connector_back: connectors_enabled && sy < segments_y - 1,
            });
        }
        rows.push(row);
    }

    debug!(
        segments_x,
        segments_y, needs_split, "baseplate partitioned for bed"
    );

    Ok(SplitResult {
        segments: rows,
        segments_x,
        segments_y,
        total_segments: segments_x * segments_y,
        max_segment_units_x,
        max_segment_units_y,
        needs_split,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_when_grid_fits_bed() {
        // Scenario: 5x3 cells of 42 mm on a 220x220 bed.
        let split = split_for_bed(5.0, 3.0, 220.0, 220.0, 42.0, true).unwrap();
        assert_eq!(split.max_segment_units_x, 5);
        assert_eq!(split.max_segment_units_y, 5);
        assert_eq!((split.segments_x, split.segments_y), (1, 1));
        assert!(!split.needs_split);
        let only = split.segment(0, 0).unwrap();
        assert_eq!(only.grid_units_x, 5.0);
        assert_eq!(only.grid_units_y, 3.0);
        assert!(!only.has_connector_left);
        assert!(!only.has_connector_right);
        assert!(!only.has_connector_front);
        assert!(!only.has_connector_back);
    }

    #[test]
    fn wide_grid_splits_into_columns_with_remainder() {
        // Scenario: 8x3 cells on a 220x220 bed -> 5-wide plus 3-wide.
        let split = split_for_bed(8.0, 3.0, 220.0, 220.0, 42.0, true).unwrap();
        assert_eq!((split.segments_x, split.segments_y), (2, 1));
        assert!(split.needs_split);
        let left = split.segment(0, 0).unwrap();
        let right = split.segment(1, 0).unwrap();
        assert_eq!((left.grid_units_x, left.grid_units_y), (5.0, 3.0));
        assert_eq!((right.grid_units_x, right.grid_units_y), (3.0, 3.0));
        assert!(left.has_connector_right);
        assert!(!left.has_connector_left);
        assert!(right.has_connector_left);
        assert!(!right.has_connector_right);
    }

    #[test]
    fn disabled_connectors_clear_all_flags() {
        let split = split_for_bed(8.0, 8.0, 220.0, 220.0, 42.0, false).unwrap();
        assert!(split.needs_split);
        for segment in split.iter() {
            assert!(!segment.has_connector_left);
            assert!(!segment.has_connector_right);
            assert!(!segment.has_connector_front);
            assert!(!segment.has_connector_back);
        }
    }

    #[test]
    fn half_cell_total_lands_in_last_column() {
        let split = split_for_bed(5.5, 2.0, 220.0, 220.0, 42.0, true).unwrap();
        assert_eq!(split.segments_x, 2);
        assert_eq!(split.segment(1, 0).unwrap().grid_units_x, 0.5);
    }

    #[test]
    fn interior_segment_connects_on_all_sides() {
        let split = split_for_bed(15.0, 15.0, 220.0, 220.0, 42.0, true).unwrap();
        assert_eq!((split.segments_x, split.segments_y), (3, 3));
        let middle = split.segment(1, 1).unwrap();
        assert!(middle.has_connector_left);
        assert!(middle.has_connector_right);
        assert!(middle.has_connector_front);
        assert!(middle.has_connector_back);
    }

    #[test]
    fn bed_smaller_than_one_unit_is_rejected() {
        let err = split_for_bed(5.0, 3.0, 40.0, 220.0, 42.0, true).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration { .. }));
    }

    #[test]
    fn sub_cell_totals_are_rejected() {
        assert!(split_for_bed(0.5, 3.0, 220.0, 220.0, 42.0, true).is_err());
        assert!(split_for_bed(5.0, 0.0, 220.0, 220.0, 42.0, true).is_err());
    }
}

//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(
        EPSILON_TOLERANCE < 1e-6,
        "EPSILON_TOLERANCE should be small for precision"
    );
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_default_bed_holds_multiple_grid_units() {
    assert!(DEFAULT_BED_WIDTH_MM >= DEFAULT_GRID_UNIT_MM * 2.0);
    assert!(DEFAULT_BED_DEPTH_MM >= DEFAULT_GRID_UNIT_MM * 2.0);
}

#[test]
fn test_socket_fits_inside_plate() {
    assert!(DEFAULT_SOCKET_DEPTH_MM < DEFAULT_PLATE_THICKNESS_MM);
}

#[test]
fn test_tooth_fits_inside_cell() {
    assert!(DEFAULT_TOOTH_WIDTH_MM < DEFAULT_GRID_UNIT_MM);
    assert!(DEFAULT_TOOTH_DEPTH_MM < DEFAULT_GRID_UNIT_MM);
}

#[test]
fn test_pattern_ratios_are_fractions() {
    for ratio in [
        DOVETAIL_ROOT_RATIO,
        PUZZLE_NECK_RATIO,
        TSLOT_STEM_RATIO,
        TSLOT_STEM_DEPTH_RATIO,
        WINEGLASS_WAIST_RATIO,
    ] {
        assert!(ratio > 0.0 && ratio < 1.0, "ratio out of range: {ratio}");
    }
}

//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = PlateConfig::default();
    assert!(cfg.grid_unit_mm > 0.0);
    assert!(cfg.socket_depth_mm < cfg.plate_thickness_mm);
    assert!(cfg.socket_inset_mm * 2.0 < cfg.grid_unit_mm);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        PlateConfig::new(0.0, 5.0, 4.0, 0.25, 5.0).unwrap_err(),
        ConfigError::InvalidGridUnit(0.0)
    );
    assert_eq!(
        PlateConfig::new(42.0, -1.0, 4.0, 0.25, 5.0).unwrap_err(),
        ConfigError::InvalidThickness(-1.0)
    );
    assert_eq!(
        PlateConfig::new(42.0, 5.0, 5.0, 0.25, 5.0).unwrap_err(),
        ConfigError::InvalidSocketDepth(5.0)
    );
    assert_eq!(
        PlateConfig::new(42.0, 5.0, 4.0, 21.0, 5.0).unwrap_err(),
        ConfigError::InvalidSocketInset(21.0)
    );
    assert_eq!(
        PlateConfig::new(42.0, 5.0, 4.0, 0.25, -0.5).unwrap_err(),
        ConfigError::InvalidPreviewGap(-0.5)
    );
}

/// Sample step counts stay in the small fixed range the curve approximation
/// was tuned for.
#[test]
fn sample_steps_are_fixed_and_small() {
    assert!((8..=16).contains(&NECK_SAMPLE_STEPS));
    assert!((8..=16).contains(&BULB_SAMPLE_STEPS));
}

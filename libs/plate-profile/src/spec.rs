//! # Tooth Pattern Specification
//!
//! The pattern family choice and its numeric parameters.

use config::constants::{
    DEFAULT_ASPECT_RATIO, DEFAULT_CONCAVE_DEPTH_PCT, DEFAULT_ROOF_DEPTH_PCT,
    DEFAULT_ROOF_INTENSITY_PCT, DEFAULT_TOLERANCE_MM, DEFAULT_TOOTH_DEPTH_MM,
    DEFAULT_TOOTH_WIDTH_MM,
};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

// =============================================================================
// PATTERN FAMILIES
// =============================================================================

/// The eight supported tooth pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToothPattern {
    /// Simple block.
    Rectangular,
    /// Tapering point.
    Triangular,
    /// Trapezoid, narrower at the root, widening to full width at the tip.
    Dovetail,
    /// Narrow neck into a circular bulb head (mushroom capture).
    Puzzle,
    /// Narrow stem into a rectangular head (T-hook capture).
    Tslot,
    /// Puzzle capture topology with a concave waisted neck transition.
    PuzzleSmooth,
    /// T-slot capture topology with a concave waisted neck transition.
    TslotSmooth,
    /// Concave stem into a rounded bulb with an optional peaked roof ridge.
    Wineglass,
}

impl ToothPattern {
    /// All families, in display order.
    pub const ALL: [ToothPattern; 8] = [
        ToothPattern::Rectangular,
        ToothPattern::Triangular,
        ToothPattern::Dovetail,
        ToothPattern::Puzzle,
        ToothPattern::Tslot,
        ToothPattern::PuzzleSmooth,
        ToothPattern::TslotSmooth,
        ToothPattern::Wineglass,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            ToothPattern::Rectangular => "rectangular",
            ToothPattern::Triangular => "triangular",
            ToothPattern::Dovetail => "dovetail",
            ToothPattern::Puzzle => "puzzle",
            ToothPattern::Tslot => "tslot",
            ToothPattern::PuzzleSmooth => "puzzle_smooth",
            ToothPattern::TslotSmooth => "tslot_smooth",
            ToothPattern::Wineglass => "wineglass",
        }
    }
}

// =============================================================================
// PATTERN SPEC
// =============================================================================

/// Full parameterization of one tooth profile.
///
/// `concave_depth_pct` only affects the smooth families, and the roof and
/// aspect parameters only affect the wineglass family; the others ignore
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothPatternSpec {
    /// Chosen pattern family.
    pub pattern: ToothPattern,
    /// Extent along the insertion axis in millimetres.
    pub tooth_depth: f64,
    /// Extent across the insertion axis in millimetres.
    pub tooth_width: f64,
    /// Uniform clearance added to the female outline in millimetres.
    pub tolerance: f64,
    /// How far the waisted neck curve dips from a straight taper, 0-100.
    pub concave_depth_pct: f64,
    /// Bulb height over width for the wineglass family.
    pub aspect_ratio: f64,
    /// Strength of the wineglass roof ridge, 0-100. Zero disables it.
    pub roof_intensity_pct: f64,
    /// Fraction of the bulb height shaped into the ridge, 0-100.
    pub roof_depth_pct: f64,
}

impl ToothPatternSpec {
    /// Spec for one family with all numeric parameters at their defaults.
    pub fn for_pattern(pattern: ToothPattern) -> Self {
        Self {
            pattern,
            tooth_depth: DEFAULT_TOOTH_DEPTH_MM,
            tooth_width: DEFAULT_TOOTH_WIDTH_MM,
            tolerance: DEFAULT_TOLERANCE_MM,
            concave_depth_pct: DEFAULT_CONCAVE_DEPTH_PCT,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            roof_intensity_pct: DEFAULT_ROOF_INTENSITY_PCT,
            roof_depth_pct: DEFAULT_ROOF_DEPTH_PCT,
        }
    }

    /// Validates the numeric parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::MalformedProfile`] for non-positive width or
    /// depth, negative tolerance, percentages outside 0-100, or a
    /// non-positive aspect ratio.
    pub fn validate(&self) -> ProfileResult<()> {
        if self.tooth_depth <= 0.0 {
            return Err(ProfileError::malformed(format!(
                "tooth_depth must be positive: {}",
                self.tooth_depth
            )));
        }
        if self.tooth_width <= 0.0 {
            return Err(ProfileError::malformed(format!(
                "tooth_width must be positive: {}",
                self.tooth_width
            )));
        }
        if self.tolerance < 0.0 {
            return Err(ProfileError::malformed(format!(
                "tolerance must be non-negative: {}",
                self.tolerance
            )));
        }
        for (name, pct) in [
            ("concave_depth_pct", self.concave_depth_pct),
            ("roof_intensity_pct", self.roof_intensity_pct),
            ("roof_depth_pct", self.roof_depth_pct),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(ProfileError::malformed(format!(
                    "{name} must lie in 0..=100: {pct}"
                )));
            }
        }
        if self.aspect_ratio <= 0.0 {
            return Err(ProfileError::malformed(format!(
                "aspect_ratio must be positive: {}",
                self.aspect_ratio
            )));
        }
        Ok(())
    }
}

impl Default for ToothPatternSpec {
    fn default() -> Self {
        Self::for_pattern(ToothPattern::Puzzle)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_for_every_family() {
        for pattern in ToothPattern::ALL {
            assert_eq!(ToothPatternSpec::for_pattern(pattern).validate(), Ok(()));
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let mut spec = ToothPatternSpec::default();
        spec.tooth_depth = 0.0;
        assert!(spec.validate().is_err());

        let mut spec = ToothPatternSpec::default();
        spec.tooth_width = -3.0;
        assert!(spec.validate().is_err());

        let mut spec = ToothPatternSpec::default();
        spec.tolerance = -0.1;
        assert!(spec.validate().is_err());

        let mut spec = ToothPatternSpec::default();
        spec.concave_depth_pct = 120.0;
        assert!(spec.validate().is_err());

        let mut spec = ToothPatternSpec::for_pattern(ToothPattern::Wineglass);
        spec.aspect_ratio = 0.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn pattern_names_match_serialized_form() {
        for pattern in ToothPattern::ALL {
            let json = serde_json::to_string(&pattern).unwrap();
            assert_eq!(json, format!("\"{}\"", pattern.name()));
        }
    }
}

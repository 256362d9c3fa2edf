//! # Tooth Outline Builders
//!
//! Closed 2D outlines for the eight pattern families.
//!
//! ## Construction
//!
//! Every outline is a counter-clockwise polygon whose closing edge runs
//! along the root line `y = 0`. Curved transitions are approximated by
//! sampled polygons with small fixed step counts; the renderer receives
//! plain polygons either way.
//!
//! The female variant of a pattern is generated by re-running the same
//! builder with every half-width and the depth grown by the fit tolerance,
//! which expands the silhouette outward uniformly enough for manufacturing
//! clearance.

use std::f64::consts::PI;

use config::constants::{
    BULB_SAMPLE_STEPS, DOVETAIL_ROOT_RATIO, NECK_SAMPLE_STEPS, PUZZLE_NECK_RATIO,
    TSLOT_STEM_DEPTH_RATIO, TSLOT_STEM_RATIO, WINEGLASS_WAIST_RATIO,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProfileError, ProfileResult};
use crate::spec::{ToothPattern, ToothPatternSpec};

// =============================================================================
// PROFILE
// =============================================================================

/// A closed tooth or cavity outline in the local tooth frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothProfile {
    /// Pattern family this outline was generated from.
    pub pattern: ToothPattern,
    /// Counter-clockwise outline; the closing edge lies on `y = 0`.
    pub outline: Vec<DVec2>,
}

impl ToothProfile {
    /// Extent along the insertion axis.
    pub fn depth(&self) -> f64 {
        self.outline.iter().map(|p| p.y).fold(0.0, f64::max)
    }

    /// Extent across the insertion axis.
    pub fn width(&self) -> f64 {
        let max_x = self.outline.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let min_x = self.outline.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        max_x - min_x
    }

    /// Signed polygon area via the shoelace formula; positive for the
    /// counter-clockwise outlines this crate produces.
    pub fn signed_area(&self) -> f64 {
        let n = self.outline.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.outline[i];
            let b = self.outline[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }
}

// =============================================================================
// PUBLIC ENTRY POINTS
// =============================================================================

/// Generates the male (protruding) outline for a pattern spec.
///
/// # Errors
///
/// Returns [`ProfileError::MalformedProfile`] when the parameters are
/// invalid or the family cannot fit its capture feature into the depth.
pub fn male_outline(spec: &ToothPatternSpec) -> ProfileResult<ToothProfile> {
    spec.validate()?;
    build_outline(spec, 0.0)
}

/// Generates the female (receiving) outline: the male silhouette expanded
/// outward by the spec's tolerance.
///
/// # Errors
///
/// Same conditions as [`male_outline`].
pub fn female_outline(spec: &ToothPatternSpec) -> ProfileResult<ToothProfile> {
    spec.validate()?;
    build_outline(spec, spec.tolerance)
}

fn build_outline(spec: &ToothPatternSpec, grow: f64) -> ProfileResult<ToothProfile> {
    let depth = spec.tooth_depth + grow;
    let half_width = spec.tooth_width / 2.0 + grow;
    let outline = match spec.pattern {
        ToothPattern::Rectangular => rectangular(depth, half_width),
        ToothPattern::Triangular => triangular(depth, half_width),
        ToothPattern::Dovetail => dovetail(spec, grow, depth, half_width),
        ToothPattern::Puzzle => puzzle(spec, grow, depth, half_width)?,
        ToothPattern::Tslot => tslot(spec, grow, depth, half_width),
        ToothPattern::PuzzleSmooth => puzzle_smooth(spec, grow, depth, half_width)?,
        ToothPattern::TslotSmooth => tslot_smooth(spec, grow, depth, half_width),
        ToothPattern::Wineglass => wineglass(spec, grow, depth, half_width)?,
    };
    debug!(
        pattern = spec.pattern.name(),
        points = outline.len(),
        grow,
        "tooth outline generated"
    );
    Ok(ToothProfile {
        pattern: spec.pattern,
        outline,
    })
}

// =============================================================================
// STRAIGHT-EDGED FAMILIES
// =============================================================================

fn rectangular(depth: f64, half_width: f64) -> Vec<DVec2> {
    vec![
        DVec2::new(-half_width, 0.0),
        DVec2::new(half_width, 0.0),
        DVec2::new(half_width, depth),
        DVec2::new(-half_width, depth),
    ]
}

fn triangular(depth: f64, half_width: f64) -> Vec<DVec2> {
    vec![
        DVec2::new(-half_width, 0.0),
        DVec2::new(half_width, 0.0),
        DVec2::new(0.0, depth),
    ]
}

fn dovetail(spec: &ToothPatternSpec, grow: f64, depth: f64, half_width: f64) -> Vec<DVec2> {
    let root_half = spec.tooth_width * DOVETAIL_ROOT_RATIO / 2.0 + grow;
    vec![
        DVec2::new(-root_half, 0.0),
        DVec2::new(root_half, 0.0),
        DVec2::new(half_width, depth),
        DVec2::new(-half_width, depth),
    ]
}

fn tslot(spec: &ToothPatternSpec, grow: f64, depth: f64, half_width: f64) -> Vec<DVec2> {
    let stem_half = spec.tooth_width * TSLOT_STEM_RATIO / 2.0 + grow;
    // The ledge height comes from the ungrown depth, lowered by the grow:
    // the widened female head must open below the male ledge or the tooth
    // cannot enter the cavity.
    let stem_depth = spec.tooth_depth * TSLOT_STEM_DEPTH_RATIO - grow;
    vec![
        DVec2::new(-stem_half, 0.0),
        DVec2::new(stem_half, 0.0),
        DVec2::new(stem_half, stem_depth),
        DVec2::new(half_width, stem_depth),
        DVec2::new(half_width, depth),
        DVec2::new(-half_width, depth),
        DVec2::new(-half_width, stem_depth),
        DVec2::new(-stem_half, stem_depth),
    ]
}

// =============================================================================
// BULB FAMILIES
// =============================================================================

/// Samples the capture bulb of radius `radius` centred on `(0, center_y)`
/// counter-clockwise from the right neck junction around the top to the
/// left junction. The junction is where the circle meets `x = +-neck_half`
/// below the centre, tucking the neck under the bulb.
fn bulb_arc(radius: f64, center_y: f64, neck_half: f64) -> Vec<DVec2> {
    let sagitta = (radius * radius - neck_half * neck_half).sqrt();
    let join = sagitta.atan2(neck_half);
    let start = -join;
    let sweep = PI + 2.0 * join;
    (0..=BULB_SAMPLE_STEPS)
        .map(|i| {
            let angle = start + sweep * i as f64 / BULB_SAMPLE_STEPS as f64;
            DVec2::new(radius * angle.cos(), center_y + radius * angle.sin())
        })
        .collect()
}

fn puzzle(
    spec: &ToothPatternSpec,
    grow: f64,
    depth: f64,
    half_width: f64,
) -> ProfileResult<Vec<DVec2>> {
    let neck_half = spec.tooth_width * PUZZLE_NECK_RATIO / 2.0 + grow;
    let radius = half_width;
    let center_y = depth - radius;
    let join_y = center_y - (radius * radius - neck_half * neck_half).sqrt();
    if join_y < 0.0 {
        return Err(ProfileError::malformed(format!(
            "tooth_depth {} is too shallow for a puzzle bulb of radius {radius}",
            spec.tooth_depth
        )));
    }

    let mut points = vec![DVec2::new(-neck_half, 0.0), DVec2::new(neck_half, 0.0)];
    points.extend(bulb_arc(radius, center_y, neck_half));
    Ok(points)
}

/// Concave neck half-width at `t` in `[0, 1]` from root to waist. The
/// profile interpolates between a straight taper and a quarter-sine dip,
/// weighted by the concave depth percentage.
fn waisted_half_width(base_half: f64, waist_half: f64, concave_pct: f64, t: f64) -> f64 {
    let linear = base_half + (waist_half - base_half) * t;
    let eased = base_half + (waist_half - base_half) * (t * PI / 2.0).sin();
    linear + (eased - linear) * (concave_pct / 100.0)
}

fn puzzle_smooth(
    spec: &ToothPatternSpec,
    grow: f64,
    depth: f64,
    half_width: f64,
) -> ProfileResult<Vec<DVec2>> {
    let neck_half = spec.tooth_width * PUZZLE_NECK_RATIO / 2.0 + grow;
    let radius = half_width;
    let center_y = depth - radius;
    let join_y = center_y - (radius * radius - neck_half * neck_half).sqrt();
    if join_y <= 0.0 {
        return Err(ProfileError::malformed(format!(
            "tooth_depth {} is too shallow for a smooth puzzle neck",
            spec.tooth_depth
        )));
    }

    let mut points = Vec::new();
    // Right flank, root to bulb junction.
    for i in 0..=NECK_SAMPLE_STEPS {
        let t = i as f64 / NECK_SAMPLE_STEPS as f64;
        let half = waisted_half_width(half_width, neck_half, spec.concave_depth_pct, t);
        points.push(DVec2::new(half, join_y * t));
    }
    // Bulb; the first arc sample repeats the junction point.
    points.extend(bulb_arc(radius, center_y, neck_half).into_iter().skip(1));
    // Left flank, bulb junction back to root; the junction itself is the
    // last arc sample.
    for i in (0..NECK_SAMPLE_STEPS).rev() {
        let t = i as f64 / NECK_SAMPLE_STEPS as f64;
        let half = waisted_half_width(half_width, neck_half, spec.concave_depth_pct, t);
        points.push(DVec2::new(-half, join_y * t));
    }
    Ok(points)
}

fn tslot_smooth(spec: &ToothPatternSpec, grow: f64, depth: f64, half_width: f64) -> Vec<DVec2> {
    let stem_half = spec.tooth_width * TSLOT_STEM_RATIO / 2.0 + grow;
    // Same ledge rule as the straight T-slot: ungrown depth, lowered by the
    // grow, so the female head clears the male ledge.
    let stem_depth = spec.tooth_depth * TSLOT_STEM_DEPTH_RATIO - grow;

    let mut points = Vec::new();
    // Right flank, root to stem top.
    for i in 0..=NECK_SAMPLE_STEPS {
        let t = i as f64 / NECK_SAMPLE_STEPS as f64;
        let half = waisted_half_width(half_width, stem_half, spec.concave_depth_pct, t);
        points.push(DVec2::new(half, stem_depth * t));
    }
    // Rectangular head.
    points.push(DVec2::new(half_width, stem_depth));
    points.push(DVec2::new(half_width, depth));
    points.push(DVec2::new(-half_width, depth));
    points.push(DVec2::new(-half_width, stem_depth));
    // Left flank back to the root.
    for i in (0..=NECK_SAMPLE_STEPS).rev() {
        let t = i as f64 / NECK_SAMPLE_STEPS as f64;
        let half = waisted_half_width(half_width, stem_half, spec.concave_depth_pct, t);
        points.push(DVec2::new(-half, stem_depth * t));
    }
    points
}

fn wineglass(
    spec: &ToothPatternSpec,
    grow: f64,
    depth: f64,
    half_width: f64,
) -> ProfileResult<Vec<DVec2>> {
    let waist_half = spec.tooth_width * WINEGLASS_WAIST_RATIO / 2.0 + grow;
    let radius_x = half_width;
    let radius_y = radius_x * spec.aspect_ratio;
    let center_y = depth - radius_y;
    // Parameter angle where the bowl meets the stem at x = +-waist_half.
    let join = (waist_half / radius_x).acos();
    let join_y = center_y - radius_y * join.sin();
    if join_y <= 0.0 {
        return Err(ProfileError::malformed(format!(
            "tooth_depth {} is too shallow for a wineglass bowl (aspect {})",
            spec.tooth_depth, spec.aspect_ratio
        )));
    }

    let mut points = Vec::new();
    // Right stem flank, root to bowl junction.
    for i in 0..=NECK_SAMPLE_STEPS {
        let t = i as f64 / NECK_SAMPLE_STEPS as f64;
        let half = waisted_half_width(half_width, waist_half, spec.concave_depth_pct, t);
        points.push(DVec2::new(half, join_y * t));
    }
    // Bowl, sampled as an elliptic arc from the right junction around the
    // tip to the left junction.
    let start = -join;
    let sweep = PI + 2.0 * join;
    for i in 1..=BULB_SAMPLE_STEPS {
        let angle = start + sweep * i as f64 / BULB_SAMPLE_STEPS as f64;
        let x = radius_x * angle.cos();
        let y = center_y + radius_y * angle.sin();
        points.push(roof_shaped(spec, radius_x, radius_y, center_y, x, y));
    }
    // Left stem flank back to the root.
    for i in (0..NECK_SAMPLE_STEPS).rev() {
        let t = i as f64 / NECK_SAMPLE_STEPS as f64;
        let half = waisted_half_width(half_width, waist_half, spec.concave_depth_pct, t);
        points.push(DVec2::new(-half, join_y * t));
    }
    Ok(points)
}

/// Applies the optional roof ridge to one bowl sample: within the roof zone
/// near the tip, the round bowl is blended toward a straight-sided peak,
/// with the intensity percentage controlling the blend weight. The ridge
/// never leaves the original depth envelope.
fn roof_shaped(
    spec: &ToothPatternSpec,
    radius_x: f64,
    radius_y: f64,
    center_y: f64,
    x: f64,
    y: f64,
) -> DVec2 {
    let intensity = spec.roof_intensity_pct / 100.0;
    let zone = spec.roof_depth_pct / 100.0;
    if intensity <= 0.0 || zone <= 0.0 {
        return DVec2::new(x, y);
    }
    let roof_base_y = center_y + radius_y * (1.0 - zone);
    if y < roof_base_y {
        return DVec2::new(x, y);
    }
    // Half-width of the bowl at the roof base line.
    let base_sin = 1.0 - zone;
    let roof_base_x = radius_x * (1.0 - base_sin * base_sin).sqrt();
    if roof_base_x <= 0.0 {
        return DVec2::new(x, y);
    }
    let tip_y = center_y + radius_y;
    let peak_y = tip_y - (tip_y - roof_base_y) * (x.abs() / roof_base_x).min(1.0);
    DVec2::new(x, y + (peak_y - y) * intensity)
}

// =============================================================================
// TESTS
// =============================================================================

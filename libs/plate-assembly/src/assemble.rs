//! # Segment Geometry Assembler
//!
//! Builds one segment's full solid description: the base plate minus its
//! per-cell socket cutouts, plus male teeth on applicable edges, minus
//! female cavities on applicable edges. Also lays out the combined preview
//! and the per-segment artifact plan.
//!
//! ## Tooth Placement
//!
//! An edge spanning N grid cells gets one tooth or cavity per internal
//! grid-line boundary, at offsets 1..ceil(N)-1 grid units from the edge
//! start. A single-cell edge has no internal boundary, so it gets exactly
//! one instance at the edge midpoint.

use config::constants::{CAVITY_PIERCE_MM, EPSILON_TOLERANCE, PlateConfig};
use plate_grid::{EdgeOverrides, EdgeType, Segment, SegmentEdge, SplitResult};
use plate_profile::{female_outline, male_outline, ToothPatternSpec};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::csg::CsgNode;
use crate::error::AssemblyResult;

// =============================================================================
// PLACEMENT
// =============================================================================

/// One resolved tooth or cavity instance on a segment edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothPlacement {
    /// Edge the instance sits on.
    pub edge: SegmentEdge,
    /// Resolved connector type (never [`EdgeType::None`]).
    pub edge_type: EdgeType,
    /// Distance from the edge start along the edge, in millimetres.
    pub offset_mm: f64,
}

/// Instance offsets along an edge spanning `span_units` grid cells.
pub fn tooth_offsets(span_units: f64, grid_unit_mm: f64) -> Vec<f64> {
    if span_units <= 1.0 {
        return vec![span_units * grid_unit_mm / 2.0];
    }
    let boundaries = span_units.ceil() as u32 - 1;
    (1..=boundaries)
        .map(|k| f64::from(k) * grid_unit_mm)
        .collect()
}

/// All tooth and cavity placements of one segment under the resolved edge
/// types. Edges resolving to `None` contribute nothing.
pub fn tooth_placements(
    segment: &Segment,
    overrides: &EdgeOverrides,
    config: &PlateConfig,
) -> Vec<ToothPlacement> {
    let mut placements = Vec::new();
    for edge in SegmentEdge::ALL {
        let edge_type = overrides.edge_type(segment, edge);
        if edge_type == EdgeType::None {
            continue;
        }
        let span = match edge {
            SegmentEdge::Left | SegmentEdge::Right => segment.grid_units_y,
            SegmentEdge::Front | SegmentEdge::Back => segment.grid_units_x,
        };
        for offset_mm in tooth_offsets(span, config.grid_unit_mm) {
            placements.push(ToothPlacement {
                edge,
                edge_type,
                offset_mm,
            });
        }
    }
    placements
}

// Rotation about Z mapping the tooth's +Y insertion axis onto the edge
// normal: outward for male teeth, inward for female cavities (the cavity
// receives the neighbour's tooth crossing the boundary).
fn edge_rotation_degrees(edge: SegmentEdge, inward: bool) -> f64 {
    let outward = match edge {
        SegmentEdge::Left => 90.0,
        SegmentEdge::Right => -90.0,
        SegmentEdge::Front => 180.0,
        SegmentEdge::Back => 0.0,
    };
    if inward {
        (outward + 180.0) % 360.0
    } else {
        outward
    }
}

fn edge_anchor(edge: SegmentEdge, offset_mm: f64, width_mm: f64, depth_mm: f64) -> (f64, f64) {
    match edge {
        SegmentEdge::Left => (0.0, offset_mm),
        SegmentEdge::Right => (width_mm, offset_mm),
        SegmentEdge::Front => (offset_mm, 0.0),
        SegmentEdge::Back => (offset_mm, depth_mm),
    }
}

// =============================================================================
// SEGMENT SOLID
// =============================================================================

/// Composes the full solid for one segment.
///
/// # Errors
///
/// Propagates [`plate_profile::ProfileError`] for malformed tooth
/// parameters.
pub fn assemble_segment(
    segment: &Segment,
    overrides: &EdgeOverrides,
    tooth: &ToothPatternSpec,
    config: &PlateConfig,
) -> AssemblyResult<CsgNode> {
    let width_mm = segment.grid_units_x * config.grid_unit_mm;
    let depth_mm = segment.grid_units_y * config.grid_unit_mm;

    let plate = CsgNode::square(width_mm, depth_mm).extruded(config.plate_thickness_mm);
    let mut base_children = vec![plate];
    base_children.extend(socket_cutouts(segment, config));
    let base = CsgNode::difference(base_children);

    let mut teeth = Vec::new();
    let mut cavities = Vec::new();
    for placement in tooth_placements(segment, overrides, config) {
        let (x, y) = edge_anchor(placement.edge, placement.offset_mm, width_mm, depth_mm);
        match placement.edge_type {
            EdgeType::Male => {
                let profile = male_outline(tooth)?;
                let node = CsgNode::polygon(profile.outline)
                    .extruded(config.plate_thickness_mm)
                    .rotated_z(edge_rotation_degrees(placement.edge, false))
                    .translated(x, y, 0.0);
                teeth.push(node);
            }
            EdgeType::Female => {
                let pierce = CAVITY_PIERCE_MM + tooth.tolerance;
                let profile = female_outline(tooth)?;
                let node = CsgNode::polygon(profile.outline)
                    .extruded(config.plate_thickness_mm + 2.0 * pierce)
                    .rotated_z(edge_rotation_degrees(placement.edge, true))
                    .translated(x, y, -pierce);
                cavities.push(node);
            }
            EdgeType::None => unreachable!("placements never carry None"),
        }
    }

    debug!(
        segment_x = segment.segment_x,
        segment_y = segment.segment_y,
        teeth = teeth.len(),
        cavities = cavities.len(),
        "segment solid assembled"
    );

    let with_teeth = if teeth.is_empty() {
        base
    } else {
        let mut children = vec![base];
        children.extend(teeth);
        CsgNode::union(children)
    };
    Ok(if cavities.is_empty() {
        with_teeth
    } else {
        let mut children = vec![with_teeth];
        children.extend(cavities);
        CsgNode::difference(children)
    })
}

// One cutout per cell, inset from the cell boundary and open at the top
// face. Fractional edge cells shrink their cutout accordingly; cells too
// small for an opening are skipped.
fn socket_cutouts(segment: &Segment, config: &PlateConfig) -> Vec<CsgNode> {
    let unit = config.grid_unit_mm;
    let inset = config.socket_inset_mm;
    let cells_x = segment.grid_units_x.ceil() as u32;
    let cells_y = segment.grid_units_y.ceil() as u32;

    let mut cutouts = Vec::new();
    for j in 0..cells_y {
        let cell_d = (segment.grid_units_y - f64::from(j)).min(1.0) * unit;
        let inner_d = cell_d - 2.0 * inset;
        for i in 0..cells_x {
            let cell_w = (segment.grid_units_x - f64::from(i)).min(1.0) * unit;
            let inner_w = cell_w - 2.0 * inset;
            if inner_w <= EPSILON_TOLERANCE || inner_d <= EPSILON_TOLERANCE {
                continue;
            }
            cutouts.push(
                CsgNode::square(inner_w, inner_d)
                    .extruded(config.socket_depth_mm + CAVITY_PIERCE_MM)
                    .translated(
                        f64::from(i) * unit + inset,
                        f64::from(j) * unit + inset,
                        config.plate_thickness_mm - config.socket_depth_mm,
                    ),
            );
        }
    }
    cutouts
}

// =============================================================================
// PREVIEW AND ARTIFACT PLAN
// =============================================================================

/// Arranges all segment solids of a split on one shared canvas with a fixed
/// visual gap between neighbours. Presentation only; the fabrication layout
/// is one segment per artifact.
pub fn combined_preview(
    split: &SplitResult,
    overrides: &EdgeOverrides,
    tooth: &ToothPatternSpec,
    config: &PlateConfig,
) -> AssemblyResult<CsgNode> {
    let max_w = f64::from(split.max_segment_units_x) * config.grid_unit_mm;
    let max_d = f64::from(split.max_segment_units_y) * config.grid_unit_mm;

    let mut children = Vec::with_capacity(split.total_segments as usize);
    for segment in split.iter() {
        let solid = assemble_segment(segment, overrides, tooth, config)?;
        let x = f64::from(segment.segment_x) * (max_w + config.preview_gap_mm);
        let y = f64::from(segment.segment_y) * (max_d + config.preview_gap_mm);
        children.push(solid.translated(x, y, 0.0));
    }

    info!(
        segments = split.total_segments,
        gap_mm = config.preview_gap_mm,
        "combined preview assembled"
    );
    Ok(CsgNode::union(children))
}

/// One renderable artifact of the partition, for the external packaging
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentArtifact {
    /// Partition column of the segment.
    pub segment_x: u32,
    /// Partition row of the segment.
    pub segment_y: u32,
    /// Suggested artifact file name.
    pub file_name: String,
}

/// Lists one artifact per segment, row-major.
pub fn artifact_plan(split: &SplitResult) -> Vec<SegmentArtifact> {
    split
        .iter()
        .map(|segment| SegmentArtifact {
            segment_x: segment.segment_x,
            segment_y: segment.segment_y,
            file_name: format!(
                "segment_x{}_y{}.stl",
                segment.segment_x, segment.segment_y
            ),
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use plate_grid::split_for_bed;
    use plate_profile::ToothPattern;

    fn fixture() -> (SplitResult, EdgeOverrides, ToothPatternSpec, PlateConfig) {
        let split = split_for_bed(8.0, 3.0, 220.0, 220.0, 42.0, true).unwrap();
        (
            split,
            EdgeOverrides::new(),
            ToothPatternSpec::for_pattern(ToothPattern::Puzzle),
            PlateConfig::default(),
        )
    }

    #[test]
    fn offsets_fall_on_internal_boundaries() {
        assert_eq!(tooth_offsets(3.0, 42.0), vec![42.0, 84.0]);
        assert_eq!(tooth_offsets(4.5, 42.0), vec![42.0, 84.0, 126.0, 168.0]);
    }

    #[test]
    fn single_cell_edge_gets_one_midpoint_instance() {
        assert_eq!(tooth_offsets(1.0, 42.0), vec![21.0]);
        assert_eq!(tooth_offsets(0.5, 42.0), vec![10.5]);
    }

    #[test]
    fn placements_follow_resolved_edge_types() {
        let (split, overrides, _, config) = fixture();
        let left = split.segment(0, 0).unwrap();
        let placements = tooth_placements(left, &overrides, &config);
        // Only the right edge carries a connector: 3 cells -> 2 teeth.
        assert_eq!(placements.len(), 2);
        for p in &placements {
            assert_eq!(p.edge, SegmentEdge::Right);
            assert_eq!(p.edge_type, EdgeType::Male);
        }
        assert_eq!(placements[0].offset_mm, 42.0);
        assert_eq!(placements[1].offset_mm, 84.0);
    }

    #[test]
    fn male_only_segment_is_a_union_over_the_socketed_base() {
        let (split, overrides, tooth, config) = fixture();
        let left = split.segment(0, 0).unwrap();
        let solid = assemble_segment(left, &overrides, &tooth, &config).unwrap();
        match solid {
            CsgNode::Union { children } => {
                // Base plus two teeth.
                assert_eq!(children.len(), 3);
                match &children[0] {
                    CsgNode::Difference { children } => {
                        // Plate plus 5x3 socket cutouts.
                        assert_eq!(children.len(), 1 + 15);
                    }
                    other => panic!("expected socketed base, got {other:?}"),
                }
            }
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn female_only_segment_is_a_difference() {
        let (split, overrides, tooth, config) = fixture();
        let right = split.segment(1, 0).unwrap();
        let solid = assemble_segment(right, &overrides, &tooth, &config).unwrap();
        match solid {
            CsgNode::Difference { children } => {
                // Socketed base plus two cavities.
                assert_eq!(children.len(), 3);
            }
            other => panic!("expected difference, got {other:?}"),
        }
    }

    #[test]
    fn cavities_pierce_both_plate_faces() {
        let (split, overrides, tooth, config) = fixture();
        let right = split.segment(1, 0).unwrap();
        let solid = assemble_segment(right, &overrides, &tooth, &config).unwrap();
        let CsgNode::Difference { children } = solid else {
            panic!("expected difference");
        };
        let CsgNode::Translate { offset, child } = &children[1] else {
            panic!("expected translated cavity");
        };
        let pierce = CAVITY_PIERCE_MM + tooth.tolerance;
        assert_eq!(offset[2], -pierce);
        let CsgNode::Rotate { child, .. } = child.as_ref() else {
            panic!("expected rotated cavity");
        };
        let CsgNode::LinearExtrude { height, .. } = child.as_ref() else {
            panic!("expected extruded cavity");
        };
        assert_eq!(*height, config.plate_thickness_mm + 2.0 * pierce);
    }

    #[test]
    fn fractional_cells_shrink_their_sockets() {
        let split = split_for_bed(1.5, 1.0, 220.0, 220.0, 42.0, false).unwrap();
        let segment = split.segment(0, 0).unwrap();
        let config = PlateConfig::default();
        let cutouts = socket_cutouts(segment, &config);
        assert_eq!(cutouts.len(), 2);
        let CsgNode::Translate { child, .. } = &cutouts[1] else {
            panic!("expected translated cutout");
        };
        let CsgNode::LinearExtrude { child, .. } = child.as_ref() else {
            panic!("expected extruded cutout");
        };
        let CsgNode::Square { size } = child.as_ref() else {
            panic!("expected square cutout");
        };
        // Half cell minus the inset on both sides.
        assert!((size[0] - (21.0 - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn preview_offsets_segments_by_bed_extent_plus_gap() {
        let (split, overrides, tooth, config) = fixture();
        let preview = combined_preview(&split, &overrides, &tooth, &config).unwrap();
        let CsgNode::Union { children } = preview else {
            panic!("expected union");
        };
        assert_eq!(children.len(), 2);
        let CsgNode::Translate { offset, .. } = &children[1] else {
            panic!("expected translated segment");
        };
        // Second column: 5 cells of 42 mm plus the preview gap.
        assert_eq!(offset[0], 5.0 * 42.0 + config.preview_gap_mm);
        assert_eq!(offset[1], 0.0);
    }

    #[test]
    fn artifact_plan_names_every_segment() {
        let (split, _, _, _) = fixture();
        let plan = artifact_plan(&split);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].file_name, "segment_x0_y0.stl");
        assert_eq!(plan[1].file_name, "segment_x1_y0.stl");
    }

    #[test]
    fn malformed_tooth_parameters_surface_as_errors() {
        let (split, overrides, mut tooth, config) = fixture();
        tooth.tooth_width = -1.0;
        let left = split.segment(0, 0).unwrap();
        let err = assemble_segment(left, &overrides, &tooth, &config).unwrap_err();
        assert!(err.to_string().contains("malformed profile"));
    }
}

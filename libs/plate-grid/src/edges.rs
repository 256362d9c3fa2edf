//! # Edge Assignment
//!
//! Resolves the connector type of every segment edge, combining positional
//! defaults with sparse user overrides.
//!
//! ## Defaults
//!
//! Right and back edges on internal boundaries default to male teeth, left
//! and front edges to female cavities, so adjacent segments pair up without
//! any user input. Overrides are kept in a small association list keyed by
//! value-equal segment coordinates; segment counts stay well under a hundred
//! so a linear scan is fine.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::partition::{Segment, SplitResult};

// =============================================================================
// EDGE TYPES
// =============================================================================

/// Connector type of one segment edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// No connector on this edge.
    None,
    /// Protruding tooth.
    Male,
    /// Receiving cavity.
    Female,
}

impl EdgeType {
    /// Advances one step in the cycle none -> male -> female -> none.
    pub fn cycled(self) -> Self {
        match self {
            EdgeType::None => EdgeType::Male,
            EdgeType::Male => EdgeType::Female,
            EdgeType::Female => EdgeType::None,
        }
    }
}

/// One of the four edges of a segment. `Front` is the low-Y edge, `Back`
/// the high-Y edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentEdge {
    Left,
    Right,
    Front,
    Back,
}

impl SegmentEdge {
    /// All four edges, in the order they are displayed.
    pub const ALL: [SegmentEdge; 4] = [
        SegmentEdge::Left,
        SegmentEdge::Right,
        SegmentEdge::Front,
        SegmentEdge::Back,
    ];
}

// =============================================================================
// OVERRIDES
// =============================================================================

/// User-authored edge types for one segment. At most one entry exists per
/// segment coordinate; all four edges are stored so patching one edge never
/// disturbs the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEdgeOverride {
    pub segment_x: u32,
    pub segment_y: u32,
    pub left: EdgeType,
    pub right: EdgeType,
    pub front: EdgeType,
    pub back: EdgeType,
}

impl SegmentEdgeOverride {
    fn get(&self, edge: SegmentEdge) -> EdgeType {
        match edge {
            SegmentEdge::Left => self.left,
            SegmentEdge::Right => self.right,
            SegmentEdge::Front => self.front,
            SegmentEdge::Back => self.back,
        }
    }

    fn set(&mut self, edge: SegmentEdge, value: EdgeType) {
        match edge {
            SegmentEdge::Left => self.left = value,
            SegmentEdge::Right => self.right = value,
            SegmentEdge::Front => self.front = value,
            SegmentEdge::Back => self.back = value,
        }
    }
}

/// Sparse override list, persisted opaquely inside a larger saved
/// configuration by the caller. Stale entries referencing coordinates that
/// vanished after a repartition are retained but never matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeOverrides {
    entries: Vec<SegmentEdgeOverride>,
}

impl EdgeOverrides {
    /// Empty override list: every edge resolves to its positional default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no overrides are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in insertion order.
    pub fn entries(&self) -> &[SegmentEdgeOverride] {
        &self.entries
    }

    fn find(&self, segment_x: u32, segment_y: u32) -> Option<&SegmentEdgeOverride> {
        self.entries
            .iter()
            .find(|o| o.segment_x == segment_x && o.segment_y == segment_y)
    }

    fn find_mut(&mut self, segment_x: u32, segment_y: u32) -> Option<&mut SegmentEdgeOverride> {
        self.entries
            .iter_mut()
            .find(|o| o.segment_x == segment_x && o.segment_y == segment_y)
    }

    /// Resolves the connector type of one segment edge: the override wins
    /// when one exists, otherwise the positional default applies.
    pub fn edge_type(&self, segment: &Segment, edge: SegmentEdge) -> EdgeType {
        match self.find(segment.segment_x, segment.segment_y) {
            Some(entry) => entry.get(edge),
            None => default_edge_type(segment, edge),
        }
    }

    /// Cycles one edge of a segment to the next connector type. A missing
    /// entry is synthesized from the segment's current defaults first, so
    /// the other three edges keep their resolved values.
    pub fn cycle_edge(&mut self, segment: &Segment, edge: SegmentEdge) {
        if let Some(entry) = self.find_mut(segment.segment_x, segment.segment_y) {
            entry.set(edge, entry.get(edge).cycled());
            return;
        }
        let mut entry = SegmentEdgeOverride {
            segment_x: segment.segment_x,
            segment_y: segment.segment_y,
            left: default_edge_type(segment, SegmentEdge::Left),
            right: default_edge_type(segment, SegmentEdge::Right),
            front: default_edge_type(segment, SegmentEdge::Front),
            back: default_edge_type(segment, SegmentEdge::Back),
        };
        entry.set(edge, entry.get(edge).cycled());
        self.entries.push(entry);
    }

    /// Drops every override, returning all edges to their defaults.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Counts entries whose coordinates no longer exist in the split.
    /// Stale entries are inert, never matched, and deliberately retained;
    /// this lets a caller surface them.
    pub fn stale_count(&self, split: &SplitResult) -> usize {
        let stale = self
            .entries
            .iter()
            .filter(|o| split.segment(o.segment_x, o.segment_y).is_none())
            .count();
        if stale > 0 {
            warn!(stale, "edge overrides reference segments outside the current split");
        }
        stale
    }
}

fn default_edge_type(segment: &Segment, edge: SegmentEdge) -> EdgeType {
    match edge {
        SegmentEdge::Right if segment.has_connector_right => EdgeType::Male,
        SegmentEdge::Back if segment.has_connector_back => EdgeType::Male,
        SegmentEdge::Left if segment.has_connector_left => EdgeType::Female,
        SegmentEdge::Front if segment.has_connector_front => EdgeType::Female,
        _ => EdgeType::None,
    }
}

// =============================================================================
// COMPLEMENTARITY LINT
// =============================================================================

/// A shared boundary whose two sides do not interlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConflict {
    /// Coordinate of the lower-indexed segment.
    pub first: (u32, u32),
    /// Edge of the lower-indexed segment at the boundary.
    pub first_edge: SegmentEdge,
    /// Resolved type on the first side.
    pub first_type: EdgeType,
    /// Coordinate of the higher-indexed segment.
    pub second: (u32, u32),
    /// Resolved type on the second side.
    pub second_type: EdgeType,
}

impl EdgeOverrides {
    /// Lints every internal boundary of a split for complementarity: the
    /// two touching sides must pair a male tooth with a female cavity, or
    /// both carry nothing. Non-blocking; callers decide what to do with the
    /// conflicts.
    pub fn check_complementarity(&self, split: &SplitResult) -> Vec<EdgeConflict> {
        let mut conflicts = Vec::new();
        for segment in split.iter() {
            let (sx, sy) = (segment.segment_x, segment.segment_y);
            if let Some(right) = split.segment(sx + 1, sy) {
                let a = self.edge_type(segment, SegmentEdge::Right);
                let b = self.edge_type(right, SegmentEdge::Left);
                if !pair_interlocks(a, b) {
                    conflicts.push(EdgeConflict {
                        first: (sx, sy),
                        first_edge: SegmentEdge::Right,
                        first_type: a,
                        second: (sx + 1, sy),
                        second_type: b,
                    });
                }
            }
            if let Some(back) = split.segment(sx, sy + 1) {
                let a = self.edge_type(segment, SegmentEdge::Back);
                let b = self.edge_type(back, SegmentEdge::Front);
                if !pair_interlocks(a, b) {
                    conflicts.push(EdgeConflict {
                        first: (sx, sy),
                        first_edge: SegmentEdge::Back,
                        first_type: a,
                        second: (sx, sy + 1),
                        second_type: b,
                    });
                }
            }
        }
        conflicts
    }
}

fn pair_interlocks(a: EdgeType, b: EdgeType) -> bool {
    matches!(
        (a, b),
        (EdgeType::Male, EdgeType::Female)
            | (EdgeType::Female, EdgeType::Male)
            | (EdgeType::None, EdgeType::None)
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::split_for_bed;

    fn two_column_split() -> SplitResult {
        split_for_bed(8.0, 3.0, 220.0, 220.0, 42.0, true).unwrap()
    }

    #[test]
    fn defaults_pair_male_right_with_female_left() {
        let split = two_column_split();
        let overrides = EdgeOverrides::new();
        let left = split.segment(0, 0).unwrap();
        let right = split.segment(1, 0).unwrap();
        assert_eq!(overrides.edge_type(left, SegmentEdge::Right), EdgeType::Male);
        assert_eq!(overrides.edge_type(right, SegmentEdge::Left), EdgeType::Female);
        assert_eq!(overrides.edge_type(left, SegmentEdge::Left), EdgeType::None);
        assert_eq!(overrides.edge_type(left, SegmentEdge::Back), EdgeType::None);
    }

    #[test]
    fn override_takes_precedence_over_default() {
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        let left = split.segment(0, 0).unwrap();
        overrides.cycle_edge(left, SegmentEdge::Right); // male -> female
        assert_eq!(
            overrides.edge_type(left, SegmentEdge::Right),
            EdgeType::Female
        );
    }

    #[test]
    fn cycling_three_times_restores_and_preserves_other_edges() {
        // Scenario: segment (1,0) right edge cycles male -> female -> none
        // -> male while its other edges stay put.
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        let segment = split.segment(1, 0).unwrap();
        assert_eq!(
            overrides.edge_type(segment, SegmentEdge::Right),
            EdgeType::None
        );
        let before: Vec<EdgeType> = [SegmentEdge::Left, SegmentEdge::Front, SegmentEdge::Back]
            .iter()
            .map(|&e| overrides.edge_type(segment, e))
            .collect();

        let mut seen = Vec::new();
        for _ in 0..3 {
            overrides.cycle_edge(segment, SegmentEdge::Right);
            seen.push(overrides.edge_type(segment, SegmentEdge::Right));
        }
        assert_eq!(seen, vec![EdgeType::Male, EdgeType::Female, EdgeType::None]);

        let after: Vec<EdgeType> = [SegmentEdge::Left, SegmentEdge::Front, SegmentEdge::Back]
            .iter()
            .map(|&e| overrides.edge_type(segment, e))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn at_most_one_entry_per_segment() {
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        let segment = split.segment(0, 0).unwrap();
        overrides.cycle_edge(segment, SegmentEdge::Right);
        overrides.cycle_edge(segment, SegmentEdge::Left);
        overrides.cycle_edge(segment, SegmentEdge::Right);
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn clear_returns_everything_to_defaults() {
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        let left = split.segment(0, 0).unwrap();
        overrides.cycle_edge(left, SegmentEdge::Right);
        overrides.clear();
        assert!(overrides.is_empty());
        assert_eq!(overrides.edge_type(left, SegmentEdge::Right), EdgeType::Male);
    }

    #[test]
    fn stale_entries_stay_inert_after_repartition() {
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        let far = split.segment(1, 0).unwrap();
        overrides.cycle_edge(far, SegmentEdge::Left);

        // Recompute a smaller split; (1,0) no longer exists.
        let smaller = split_for_bed(5.0, 3.0, 220.0, 220.0, 42.0, true).unwrap();
        assert_eq!(overrides.stale_count(&smaller), 1);
        assert_eq!(overrides.len(), 1);
        let only = smaller.segment(0, 0).unwrap();
        assert_eq!(overrides.edge_type(only, SegmentEdge::Left), EdgeType::None);
    }

    #[test]
    fn default_boundaries_pass_the_complementarity_lint() {
        let split = split_for_bed(15.0, 15.0, 220.0, 220.0, 42.0, true).unwrap();
        let overrides = EdgeOverrides::new();
        assert!(overrides.check_complementarity(&split).is_empty());
    }

    #[test]
    fn matching_types_on_a_shared_boundary_are_flagged() {
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        // Force (1,0).left from female to male: both sides now male.
        let right = split.segment(1, 0).unwrap();
        overrides.cycle_edge(right, SegmentEdge::Left); // female -> none
        overrides.cycle_edge(right, SegmentEdge::Left); // none -> male
        let conflicts = overrides.check_complementarity(&split);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].first, (0, 0));
        assert_eq!(conflicts[0].first_type, EdgeType::Male);
        assert_eq!(conflicts[0].second_type, EdgeType::Male);
    }

    #[test]
    fn overrides_round_trip_through_serde() {
        let split = two_column_split();
        let mut overrides = EdgeOverrides::new();
        overrides.cycle_edge(split.segment(0, 0).unwrap(), SegmentEdge::Right);
        let json = serde_json::to_string(&overrides).unwrap();
        let back: EdgeOverrides = serde_json::from_str(&json).unwrap();
        assert_eq!(back, overrides);
    }
}

//! # Geometry IR
//!
//! Intermediate representation of the solids handed to the external
//! rendering engine.
//!
//! The vocabulary stays intentionally small: the 2D leaves and the handful
//! of operations the engine's input language needs. All values are fully
//! resolved millimetres; nothing here recomputes layout.

use config::constants::CIRCLE_SEGMENTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A node in the resolved geometry tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CsgNode {
    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================
    /// Axis-aligned rectangle with its corner at the origin.
    Square {
        /// Size as [x, y].
        size: [f64; 2],
    },

    /// Circle centred at the origin.
    Circle {
        /// Radius in millimetres.
        radius: f64,
        /// Tessellation segment count.
        segments: u32,
    },

    /// Closed polygon outline.
    Polygon {
        /// Outline vertices, counter-clockwise.
        points: Vec<DVec2>,
    },

    // =========================================================================
    // OPERATIONS
    // =========================================================================
    /// Extrude a 2D child along +Z.
    LinearExtrude {
        /// Extrusion height in millimetres.
        height: f64,
        child: Box<CsgNode>,
    },

    /// Union of all children.
    Union { children: Vec<CsgNode> },

    /// First child minus all following children.
    Difference { children: Vec<CsgNode> },

    /// Translate a child by an XYZ offset.
    Translate {
        offset: [f64; 3],
        child: Box<CsgNode>,
    },

    /// Rotate a child by XYZ Euler angles in degrees.
    Rotate {
        degrees: [f64; 3],
        child: Box<CsgNode>,
    },
}

impl CsgNode {
    /// Rectangle leaf.
    pub fn square(width: f64, depth: f64) -> Self {
        CsgNode::Square {
            size: [width, depth],
        }
    }

    /// Circle leaf at the standard tessellation.
    pub fn circle(radius: f64) -> Self {
        CsgNode::Circle {
            radius,
            segments: CIRCLE_SEGMENTS,
        }
    }

    /// Polygon leaf.
    pub fn polygon(points: Vec<DVec2>) -> Self {
        CsgNode::Polygon { points }
    }

    /// Extrusion of `self` along +Z.
    pub fn extruded(self, height: f64) -> Self {
        CsgNode::LinearExtrude {
            height,
            child: Box::new(self),
        }
    }

    /// `self` translated by an XYZ offset.
    pub fn translated(self, x: f64, y: f64, z: f64) -> Self {
        CsgNode::Translate {
            offset: [x, y, z],
            child: Box::new(self),
        }
    }

    /// `self` rotated about Z, in degrees.
    pub fn rotated_z(self, degrees: f64) -> Self {
        CsgNode::Rotate {
            degrees: [0.0, 0.0, degrees],
            child: Box::new(self),
        }
    }

    /// Union node, flattening nothing; empty child lists are permitted.
    pub fn union(children: Vec<CsgNode>) -> Self {
        CsgNode::Union { children }
    }

    /// Difference node: the first child minus the rest.
    pub fn difference(children: Vec<CsgNode>) -> Self {
        CsgNode::Difference { children }
    }

    /// Number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        match self {
            CsgNode::Square { .. } | CsgNode::Circle { .. } | CsgNode::Polygon { .. } => 1,
            CsgNode::LinearExtrude { child, .. }
            | CsgNode::Translate { child, .. }
            | CsgNode::Rotate { child, .. } => 1 + child.node_count(),
            CsgNode::Union { children } | CsgNode::Difference { children } => {
                1 + children.iter().map(CsgNode::node_count).sum::<usize>()
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_nest_as_written() {
        let node = CsgNode::square(10.0, 20.0)
            .extruded(5.0)
            .translated(1.0, 2.0, 3.0);
        assert_eq!(node.node_count(), 3);
        match node {
            CsgNode::Translate { offset, child } => {
                assert_eq!(offset, [1.0, 2.0, 3.0]);
                assert!(matches!(*child, CsgNode::LinearExtrude { height, .. } if height == 5.0));
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn node_count_spans_boolean_children() {
        let node = CsgNode::difference(vec![
            CsgNode::square(1.0, 1.0),
            CsgNode::square(2.0, 2.0),
            CsgNode::union(vec![CsgNode::square(3.0, 3.0)]),
        ]);
        assert_eq!(node.node_count(), 5);
    }
}

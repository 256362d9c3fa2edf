//! # Geometry Emission
//!
//! Serializes a [`CsgNode`] tree into the external engine's textual input
//! language (OpenSCAD syntax). Purely mechanical: the computed parameters
//! are the product, the text is transport.

use crate::csg::CsgNode;

/// Renders a geometry tree as engine source text.
pub fn emit_scad(node: &CsgNode) -> String {
    let mut out = String::new();
    emit_node(node, 0, &mut out);
    out
}

fn emit_node(node: &CsgNode, depth: usize, out: &mut String) {
    let pad = "    ".repeat(depth);
    match node {
        CsgNode::Square { size } => {
            out.push_str(&format!(
                "{pad}square(size=[{}, {}]);\n",
                fmt_num(size[0]),
                fmt_num(size[1])
            ));
        }
        CsgNode::Circle { radius, segments } => {
            out.push_str(&format!(
                "{pad}circle(r={}, $fn={segments});\n",
                fmt_num(*radius)
            ));
        }
        CsgNode::Polygon { points } => {
            let list = points
                .iter()
                .map(|p| format!("[{}, {}]", fmt_num(p.x), fmt_num(p.y)))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{pad}polygon(points=[{list}]);\n"));
        }
        CsgNode::LinearExtrude { height, child } => {
            out.push_str(&format!("{pad}linear_extrude(height={}) {{\n", fmt_num(*height)));
            emit_node(child, depth + 1, out);
            out.push_str(&format!("{pad}}}\n"));
        }
        CsgNode::Union { children } => emit_block("union()", children, depth, out),
        CsgNode::Difference { children } => emit_block("difference()", children, depth, out),
        CsgNode::Translate { offset, child } => {
            out.push_str(&format!(
                "{pad}translate([{}, {}, {}]) {{\n",
                fmt_num(offset[0]),
                fmt_num(offset[1]),
                fmt_num(offset[2])
            ));
            emit_node(child, depth + 1, out);
            out.push_str(&format!("{pad}}}\n"));
        }
        CsgNode::Rotate { degrees, child } => {
            out.push_str(&format!(
                "{pad}rotate([{}, {}, {}]) {{\n",
                fmt_num(degrees[0]),
                fmt_num(degrees[1]),
                fmt_num(degrees[2])
            ));
            emit_node(child, depth + 1, out);
            out.push_str(&format!("{pad}}}\n"));
        }
    }
}

fn emit_block(header: &str, children: &[CsgNode], depth: usize, out: &mut String) {
    let pad = "    ".repeat(depth);
    out.push_str(&format!("{pad}{header} {{\n"));
    for child in children {
        emit_node(child, depth + 1, out);
    }
    out.push_str(&format!("{pad}}}\n"));
}

// Fixed decimal places keep the output stable across platforms; trailing
// zeros are trimmed for readability.
fn fmt_num(value: f64) -> String {
    let mut s = format!("{value:.6}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn square_emits_a_single_statement() {
        let text = emit_scad(&CsgNode::square(42.0, 21.5));
        assert_eq!(text, "square(size=[42, 21.5]);\n");
    }

    #[test]
    fn difference_indents_children() {
        let node = CsgNode::difference(vec![
            CsgNode::square(10.0, 10.0).extruded(5.0),
            CsgNode::square(2.0, 2.0).extruded(6.0).translated(1.0, 1.0, -0.5),
        ]);
        let text = emit_scad(&node);
        assert!(text.starts_with("difference() {\n"));
        assert!(text.contains("    linear_extrude(height=5) {\n"));
        assert!(text.contains("        square(size=[10, 10]);\n"));
        assert!(text.contains("    translate([1, 1, -0.5]) {\n"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn circle_carries_its_tessellation() {
        let text = emit_scad(&CsgNode::circle(3.5));
        assert_eq!(text, "circle(r=3.5, $fn=32);\n");
    }

    #[test]
    fn polygon_points_are_listed_in_order() {
        let node = CsgNode::polygon(vec![
            DVec2::new(-5.0, 0.0),
            DVec2::new(5.0, 0.0),
            DVec2::new(0.0, 12.0),
        ]);
        let text = emit_scad(&node);
        assert_eq!(text, "polygon(points=[[-5, 0], [5, 0], [0, 12]]);\n");
    }

    #[test]
    fn rotation_emits_euler_degrees() {
        let node = CsgNode::square(1.0, 1.0).rotated_z(-90.0);
        let text = emit_scad(&node);
        assert!(text.starts_with("rotate([0, 0, -90]) {\n"));
    }

    #[test]
    fn numbers_are_trimmed_but_precise() {
        assert_eq!(fmt_num(5.5), "5.5");
        assert_eq!(fmt_num(5.0), "5");
        assert_eq!(fmt_num(0.123456789), "0.123457");
        assert_eq!(fmt_num(-0.0), "0");
    }
}

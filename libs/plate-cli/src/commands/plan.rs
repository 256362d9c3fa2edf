//! `plan`: show the grid calculation, partition and edge assignment.

use anyhow::Result;
use colored::Colorize;
use plate_assembly::artifact_plan;
use plate_grid::{EdgeOverrides, EdgeType, SegmentEdge};
use serde_json::json;

use crate::LayoutArgs;

use super::layout;

pub fn run(args: &LayoutArgs, as_json: bool) -> Result<()> {
    let (calc, split) = layout(args)?;
    let overrides = EdgeOverrides::new();

    if as_json {
        let value = json!({
            "grid": calc,
            "split": split,
            "artifacts": artifact_plan(&split),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Grid".bold());
    println!(
        "  units: {} x {}  coverage: {:.1} x {:.1} mm  padding: {:.1} / {:.1} mm",
        calc.x.grid_units,
        calc.y.grid_units,
        calc.x.coverage_mm,
        calc.y.coverage_mm,
        calc.x.total_padding_mm,
        calc.y.total_padding_mm,
    );

    println!("{}", "Partition".bold());
    println!(
        "  segments: {} x {} ({} total), bed capacity {} x {} units, split {}",
        split.segments_x,
        split.segments_y,
        split.total_segments,
        split.max_segment_units_x,
        split.max_segment_units_y,
        if split.needs_split {
            "required".yellow()
        } else {
            "not needed".green()
        },
    );

    println!("{}", "Edges".bold());
    for segment in split.iter() {
        let edges = SegmentEdge::ALL
            .iter()
            .map(|&edge| {
                let label = match overrides.edge_type(segment, edge) {
                    EdgeType::None => "-".normal(),
                    EdgeType::Male => "male".blue(),
                    EdgeType::Female => "female".magenta(),
                };
                format!("{edge:?}: {label}")
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "  ({}, {}) {} x {} units  {}",
            segment.segment_x, segment.segment_y, segment.grid_units_x, segment.grid_units_y, edges
        );
    }

    let conflicts = overrides.check_complementarity(&split);
    if !conflicts.is_empty() {
        println!("{}", "Conflicts".bold().red());
        for c in conflicts {
            println!(
                "  {:?}/{:?} at ({}, {}) vs ({}, {})",
                c.first_type, c.second_type, c.first.0, c.first.1, c.second.0, c.second.1
            );
        }
    }
    Ok(())
}

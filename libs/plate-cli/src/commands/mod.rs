//! Subcommand implementations.

pub mod emit;
pub mod plan;
pub mod render;

use anyhow::Result;
use plate_grid::{
    calculate_grid_from_mm, split_for_bed, GridCalculation, GridFillSpec, PaddingAlignment,
    SplitResult,
};

use crate::LayoutArgs;

/// Runs the layout stages shared by every subcommand.
pub fn layout(args: &LayoutArgs) -> Result<(GridCalculation, SplitResult)> {
    let spec = GridFillSpec {
        target_width_mm: args.width,
        target_depth_mm: args.depth,
        grid_unit_mm: args.grid_unit,
        allow_half_cells_x: args.half_cells_x,
        allow_half_cells_y: args.half_cells_y,
        padding_alignment: PaddingAlignment::Center,
    };
    let calc = calculate_grid_from_mm(&spec)?;
    let split = split_for_bed(
        calc.x.grid_units,
        calc.y.grid_units,
        args.bed_width,
        args.bed_depth,
        args.grid_unit,
        !args.no_connectors,
    )?;
    Ok((calc, split))
}

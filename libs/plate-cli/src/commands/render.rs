//! `render`: emit and hand every segment to the external engine.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use config::constants::PlateConfig;
use plate_assembly::{artifact_plan, assemble_segment, emit_scad};
use plate_grid::EdgeOverrides;
use plate_render::Renderer;

use crate::RenderArgs;

use super::layout;

pub async fn run(args: &RenderArgs) -> Result<()> {
    let (_, split) = layout(&args.emit.layout)?;
    let overrides = EdgeOverrides::new();
    let tooth = args.emit.layout.tooth_spec();
    let plate = PlateConfig::default();
    let renderer = Renderer::new(&args.engine);

    fs::create_dir_all(&args.emit.output)
        .with_context(|| format!("creating output directory {}", args.emit.output.display()))?;

    for (segment, artifact) in split.iter().zip(artifact_plan(&split)) {
        let solid = assemble_segment(segment, &overrides, &tooth, &plate)?;
        let output = args.emit.output.join(&artifact.file_name);
        let rendered = renderer
            .render(&emit_scad(&solid), &output)
            .await
            .with_context(|| format!("rendering segment ({}, {})", segment.segment_x, segment.segment_y))?;
        println!("{} {}", "rendered".green(), rendered.path.display());
    }
    Ok(())
}

//! `emit`: write engine source text for every segment and the preview.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use config::constants::PlateConfig;
use plate_assembly::{artifact_plan, assemble_segment, combined_preview, emit_scad};
use plate_grid::EdgeOverrides;

use crate::EmitArgs;

use super::layout;

pub fn run(args: &EmitArgs) -> Result<()> {
    let (_, split) = layout(&args.layout)?;
    let overrides = EdgeOverrides::new();
    let tooth = args.layout.tooth_spec();
    let plate = PlateConfig::default();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    for (segment, artifact) in split.iter().zip(artifact_plan(&split)) {
        let solid = assemble_segment(segment, &overrides, &tooth, &plate)?;
        let path = args
            .output
            .join(artifact.file_name.replace(".stl", ".scad"));
        fs::write(&path, emit_scad(&solid))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("{} {}", "wrote".green(), path.display());
    }

    let preview = combined_preview(&split, &overrides, &tooth, &plate)?;
    let preview_path = args.output.join("preview.scad");
    fs::write(&preview_path, emit_scad(&preview))
        .with_context(|| format!("writing {}", preview_path.display()))?;
    println!("{} {}", "wrote".green(), preview_path.display());
    Ok(())
}

//! plategen: command-line interface for the plate generation pipeline.
//!
//! Sizes a grid for a target footprint, partitions it for the printer bed,
//! and emits or renders the per-segment geometry.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=plate_grid=debug` - layout derivation logging
//! - `RUST_LOG=plate_render=debug` - engine invocation logging
//! - `RUST_LOG=debug` - all debug output
//!
//! # Example
//!
//! ```bash
//! # Show the partition for a 340x130 mm footprint
//! plategen plan --width 340 --depth 130
//!
//! # Write per-segment engine source to ./out
//! plategen emit --width 340 --depth 130 --pattern dovetail -o out
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use plate_profile::{ToothPattern, ToothPatternSpec};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{emit, plan, render};

/// plategen - modular storage plate generator.
///
/// Computes interlocking, bed-sized baseplate segments and hands their
/// geometry to an external CAD engine.
#[derive(Parser)]
#[command(name = "plategen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grid calculation, partition and edge assignment
    Plan(LayoutArgs),
    /// Write engine source text for every segment and the preview
    Emit(EmitArgs),
    /// Emit and render every segment through the external engine
    Render(RenderArgs),
}

#[derive(Args)]
struct LayoutArgs {
    /// Target footprint width in millimetres
    #[arg(long)]
    width: f64,

    /// Target footprint depth in millimetres
    #[arg(long)]
    depth: f64,

    /// Grid unit size in millimetres
    #[arg(long, default_value_t = config::constants::DEFAULT_GRID_UNIT_MM)]
    grid_unit: f64,

    /// Printer bed width in millimetres
    #[arg(long, default_value_t = config::constants::DEFAULT_BED_WIDTH_MM)]
    bed_width: f64,

    /// Printer bed depth in millimetres
    #[arg(long, default_value_t = config::constants::DEFAULT_BED_DEPTH_MM)]
    bed_depth: f64,

    /// Allow a trailing half cell on the X axis
    #[arg(long)]
    half_cells_x: bool,

    /// Allow a trailing half cell on the Y axis
    #[arg(long)]
    half_cells_y: bool,

    /// Disable connectors on internal boundaries
    #[arg(long)]
    no_connectors: bool,

    /// Tooth pattern family
    #[arg(long, value_enum, default_value_t = PatternArg::Puzzle)]
    pattern: PatternArg,

    /// Tooth depth in millimetres
    #[arg(long, default_value_t = config::constants::DEFAULT_TOOTH_DEPTH_MM)]
    tooth_depth: f64,

    /// Tooth width in millimetres
    #[arg(long, default_value_t = config::constants::DEFAULT_TOOTH_WIDTH_MM)]
    tooth_width: f64,

    /// Female cavity clearance in millimetres
    #[arg(long, default_value_t = config::constants::DEFAULT_TOLERANCE_MM)]
    tolerance: f64,
}

#[derive(Args)]
struct EmitArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Output directory for the emitted source files
    #[arg(short, long, default_value = "out")]
    output: PathBuf,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    emit: EmitArgs,

    /// Path to the external CAD engine binary
    #[arg(long, default_value = "openscad")]
    engine: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum PatternArg {
    Rectangular,
    Triangular,
    Dovetail,
    Puzzle,
    Tslot,
    PuzzleSmooth,
    TslotSmooth,
    Wineglass,
}

impl From<PatternArg> for ToothPattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Rectangular => ToothPattern::Rectangular,
            PatternArg::Triangular => ToothPattern::Triangular,
            PatternArg::Dovetail => ToothPattern::Dovetail,
            PatternArg::Puzzle => ToothPattern::Puzzle,
            PatternArg::Tslot => ToothPattern::Tslot,
            PatternArg::PuzzleSmooth => ToothPattern::PuzzleSmooth,
            PatternArg::TslotSmooth => ToothPattern::TslotSmooth,
            PatternArg::Wineglass => ToothPattern::Wineglass,
        }
    }
}

impl LayoutArgs {
    fn tooth_spec(&self) -> ToothPatternSpec {
        let mut spec = ToothPatternSpec::for_pattern(self.pattern.into());
        spec.tooth_depth = self.tooth_depth;
        spec.tooth_width = self.tooth_width;
        spec.tolerance = self.tolerance;
        spec
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Plan(args) => plan::run(&args, cli.json),
        Commands::Emit(args) => emit::run(&args),
        Commands::Render(args) => render::run(&args).await,
    }
}

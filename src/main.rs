mod svg_out;


use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use diagram::config::DiagramConfig;
use diagram::consts::DEFAULT_DECIMALS;
use diagram::page::{PRESET_ANGLES, Page};
use diagram::trig::Evaluator;
use diagram::{DiagramError, DiagramKind, Scene, TrigResult, ViewportSize, project};
use serde::Serialize;
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),
    #[error("invalid viewport {width}x{height}; both sides must be positive")]
    InvalidViewport { width: f64, height: f64 },
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "trigviz", about = "Trigonometric values and diagrams from the command line")]
struct Cli {
    /// Decimal places for displayed values.
    #[arg(long, global = true, env = "TRIGVIZ_DECIMALS", default_value_t = DEFAULT_DECIMALS)]
    decimals: u32,

    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sine, cosine and tangent of one or more angles.
    Eval {
        #[arg(required = true, allow_negative_numbers = true)]
        angles: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Print a diagram scene as JSON.
    Scene(DiagramArgs),
    /// Render a diagram as SVG.
    Svg {
        #[command(flatten)]
        diagram: DiagramArgs,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Preset angles with their values.
    Presets {
        #[arg(long)]
        json: bool,
    },
    /// Page fragment identifiers.
    Pages {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct DiagramArgs {
    /// `triangle` or `circle`.
    kind: DiagramKind,
    /// Angle in degrees.
    #[arg(allow_negative_numbers = true)]
    angle: f64,
    /// Viewport width in pixels; defaults to the diagram's design width.
    #[arg(long)]
    width: Option<f64>,
    /// Viewport height in pixels; defaults to the diagram's design height.
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PageRow {
    fragment: &'static str,
    diagram: Option<DiagramKind>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DiagramConfig::default().with_decimals(cli.decimals)?;
    tracing::debug!(decimals = config.decimals, "config ready");

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Eval { angles, json } => run_eval(&mut out, config.evaluator(), &angles, json),
        Command::Scene(args) => run_scene(&mut out, &config, &args),
        Command::Svg { diagram, output } => run_svg(&mut out, &config, &diagram, output),
        Command::Presets { json } => run_eval(&mut out, config.evaluator(), &PRESET_ANGLES, json),
        Command::Pages { json } => run_pages(&mut out, json),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

// =============================================================
// Commands
// =============================================================

fn run_eval(out: &mut impl Write, evaluator: Evaluator, angles: &[f64], json: bool) -> Result<(), CliError> {
    let results: Vec<TrigResult> = angles.iter().map(|&a| evaluator.evaluate(a)).collect();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
        return Ok(());
    }
    writeln!(out, "{:>10} {:>10} {:>10} {:>10}", "angle", "sin", "cos", "tan")?;
    for r in &results {
        let angle = format!("{}°", diagram::angle::format_degrees(r.angle));
        writeln!(out, "{angle:>10} {:>10} {:>10} {:>10}", r.sine, r.cosine, r.tangent.to_string())?;
    }
    Ok(())
}

fn run_scene(out: &mut impl Write, config: &DiagramConfig, args: &DiagramArgs) -> Result<(), CliError> {
    let scene = build_scene(config, args)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&scene)?)?;
    Ok(())
}

fn run_svg(
    out: &mut impl Write,
    config: &DiagramConfig,
    args: &DiagramArgs,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let scene = build_scene(config, args)?;
    let document = svg_out::to_document(&scene);
    match output {
        Some(path) => {
            svg::save(&path, &document)?;
            tracing::info!(path = %path.display(), primitives = scene.len(), "wrote svg");
        }
        None => writeln!(out, "{document}")?,
    }
    Ok(())
}

fn run_pages(out: &mut impl Write, json: bool) -> Result<(), CliError> {
    let rows: Vec<PageRow> = Page::ALL
        .iter()
        .map(|page| PageRow { fragment: page.fragment(), diagram: page.diagram() })
        .collect();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }
    for row in rows {
        let diagram = row.diagram.map_or_else(|| "-".to_owned(), |kind| kind.to_string());
        writeln!(out, "{:<16} {diagram}", row.fragment)?;
    }
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn build_scene(config: &DiagramConfig, args: &DiagramArgs) -> Result<Scene, CliError> {
    let viewport = viewport_for(config, args)?;
    tracing::debug!(kind = %args.kind, angle = args.angle, width = viewport.width, height = viewport.height, "projecting");
    Ok(project(args.kind, args.angle, viewport, config))
}

fn viewport_for(config: &DiagramConfig, args: &DiagramArgs) -> Result<ViewportSize, CliError> {
    let desired = config.desired(args.kind);
    let width = args.width.unwrap_or(desired.width);
    let height = args.height.unwrap_or(desired.height);
    let viewport = ViewportSize::new(width, height);
    if viewport.is_drawable() { Ok(viewport) } else { Err(CliError::InvalidViewport { width, height }) }
}

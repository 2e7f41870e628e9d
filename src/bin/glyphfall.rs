use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use glyphfall::{
    ColumnInstance, GenerateConfig, MAX_QUALITY_LEVEL, PreviewOpts, QualityFeature, build_columns,
    build_document,
};

#[derive(Parser, Debug)]
#[command(
    name = "glyphfall",
    version,
    about = "Generate the animated glyph cascade SVG (base canvas width 500 with adaptive span)."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the SVG document to stdout or a file.
    Generate(GenerateArgs),
    /// Dump the resolved column layout as JSON.
    Layout(LayoutArgs),
    /// Rasterize the document's initial state to a PNG.
    Frame(FrameArgs),
    /// List quality levels and the effect each one disables.
    Levels,
}

#[derive(Args, Debug)]
struct Knobs {
    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Performance dial. Each increment disables one more effect (0 to 6).
    #[arg(long, allow_negative_numbers = true)]
    nice: Option<i64>,

    /// Minimum glyphs per strand (per column).
    #[arg(long, allow_negative_numbers = true)]
    gps_min: Option<i64>,

    /// Maximum glyphs per strand (per column).
    #[arg(long, allow_negative_numbers = true)]
    gps_max: Option<i64>,

    /// Number of evenly spaced columns.
    #[arg(long, allow_negative_numbers = true)]
    columns_regular: Option<i64>,

    /// Number of irregularly offset columns.
    #[arg(long, allow_negative_numbers = true)]
    columns_irregular: Option<i64>,

    /// Omit the lightning overlay.
    #[arg(long)]
    no_lightning: bool,

    /// Skip the RDF/DC metadata block.
    #[arg(long)]
    no_metadata: bool,
}

impl Knobs {
    fn resolve(&self) -> anyhow::Result<GenerateConfig> {
        let mut cfg = match &self.config {
            Some(path) => GenerateConfig::from_json_file(path)?,
            None => GenerateConfig::default(),
        };

        if let Some(v) = self.nice {
            cfg.nice = v;
        }
        if let Some(v) = self.gps_min {
            cfg.gps_min = v;
        }
        if let Some(v) = self.gps_max {
            cfg.gps_max = v;
        }
        if let Some(v) = self.columns_regular {
            cfg.columns_regular = v;
        }
        if let Some(v) = self.columns_irregular {
            cfg.columns_irregular = v;
        }
        if self.no_lightning {
            cfg.include_lightning = false;
        }
        if self.no_metadata {
            cfg.include_metadata = false;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    knobs: Knobs,

    /// Output SVG path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    knobs: Knobs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    knobs: Knobs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Additional font directory (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Do not load system fonts.
    #[arg(long)]
    no_system_fonts: bool,

    /// Output scale factor.
    #[arg(long)]
    scale: Option<f32>,
}

#[derive(serde::Serialize)]
struct LayoutDump<'a> {
    level: u32,
    canvas_width: f64,
    span_width: f64,
    columns: &'a [ColumnInstance],
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Levels => cmd_levels(),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_output(out: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = args.knobs.resolve()?;
    let svg = build_document(&cfg).to_svg_string();

    match args.out {
        Some(out) => {
            write_output(&out, &svg)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(svg.as_bytes())
                .context("write svg to stdout")?;
        }
    }
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let cfg = args.knobs.resolve()?;
    let layout = build_columns(&cfg.column_request());
    let dump = LayoutDump {
        level: cfg.quality().level(),
        canvas_width: layout.canvas_width,
        span_width: layout.span_width,
        columns: &layout.columns,
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &dump).context("serialize layout JSON")?;
    writeln!(stdout)?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.knobs.resolve()?;
    let svg = build_document(&cfg).to_svg_string();

    let opts = PreviewOpts {
        font_dirs: args.font_dirs,
        skip_system_fonts: args.no_system_fonts,
        scale: args.scale,
    };
    let frame = glyphfall::rasterize(&svg, &opts)?;
    glyphfall::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_levels() -> anyhow::Result<()> {
    println!("  0: keep all visual effects active");
    for feature in QualityFeature::ALL {
        println!("  {}: {}", feature.step(), feature.description());
    }
    println!("(levels above {MAX_QUALITY_LEVEL} are clamped)");
    Ok(())
}

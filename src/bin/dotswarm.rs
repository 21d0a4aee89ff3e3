use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use dotswarm::{
    CpuSurface, EffectKind, EffectRef, MorphMode, PngSequenceSink, Rgb8, SceneConfig, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "dotswarm", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence until the swarm settles (or for a fixed frame count).
    Render(RenderArgs),
    /// List the effect registry.
    Effects,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene config JSON. Flags below override its fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Text to lay out.
    #[arg(long)]
    text: Option<String>,

    /// Effect index or name.
    #[arg(long)]
    effect: Option<EffectRef>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Per-frame step distance.
    #[arg(long)]
    speed: Option<u32>,

    /// `assemble` or `disperse`.
    #[arg(long, value_parser = parse_morph)]
    morph: Option<MorphMode>,

    /// Viewport width in logical pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in logical pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Device pixel ratio.
    #[arg(long)]
    scale: Option<f64>,

    /// Text pixel size.
    #[arg(long)]
    size: Option<f64>,

    /// Background color (`#rrggbb`).
    #[arg(long)]
    background: Option<Rgb8>,

    /// Dot color (`#rrggbb`).
    #[arg(long)]
    color: Option<Rgb8>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix for each frame.
    #[arg(long, default_value = "frame_")]
    prefix: String,

    /// Render exactly this many frames instead of stopping once settled.
    #[arg(long)]
    frames: Option<u64>,

    /// Frame cap when rendering until settled.
    #[arg(long, default_value_t = 600)]
    max_frames: u64,
}

fn parse_morph(s: &str) -> Result<MorphMode, String> {
    MorphMode::from_name(s).ok_or_else(|| format!("expected 'assemble' or 'disperse', got '{s}'"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Effects => cmd_effects(),
    }
}

fn load_config(args: &SceneArgs) -> anyhow::Result<(SceneConfig, PathBuf)> {
    let (mut cfg, base_dir) = match &args.in_path {
        Some(path) => (
            SceneConfig::from_path(path)?,
            path.parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
        ),
        None => (SceneConfig::default(), PathBuf::from(".")),
    };

    if let Some(text) = &args.text {
        cfg.text = text.clone();
    }
    if let Some(effect) = &args.effect {
        cfg.effect = effect.clone();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(speed) = args.speed {
        cfg.speed = speed;
    }
    if let Some(morph) = args.morph {
        cfg.morph = morph;
    }
    if let Some(size) = args.size {
        cfg.text_style.size = size;
    }
    if let Some(bg) = args.background {
        cfg.background = bg;
    }
    if let Some(color) = args.color {
        cfg.color = color;
    }
    cfg.viewport = Viewport {
        width: args.width.unwrap_or(cfg.viewport.width),
        height: args.height.unwrap_or(cfg.viewport.height),
        scale: args.scale.unwrap_or(cfg.viewport.scale),
    };

    Ok((cfg, base_dir))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (cfg, base_dir) = load_config(&args.scene)?;
    let surface = CpuSurface::new(&cfg.viewport)?;
    let mut sess = cfg.build_session(&base_dir, Box::new(surface))?;

    sess.skip_frames(args.frame)?;
    let frame = sess.render_frame()?;

    dotswarm::encode::sink::write_png(&args.out, &frame)
        .with_context(|| format!("render frame {}", args.frame))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (cfg, base_dir) = load_config(&args.scene)?;
    let surface = CpuSurface::new(&cfg.viewport)?;
    let mut sess = cfg.build_session(&base_dir, Box::new(surface))?;

    let mut sink = PngSequenceSink::new(&args.out_dir, args.prefix);
    let stats = match args.frames {
        Some(n) => sess.run(n, &mut sink)?,
        None => sess.run_until_settled(args.max_frames, &mut sink)?,
    };

    match stats.settled_at {
        Some(f) => eprintln!(
            "wrote {} frames to {} (settled at frame {f})",
            stats.frames_rendered,
            args.out_dir.display()
        ),
        None => eprintln!(
            "wrote {} frames to {}",
            stats.frames_rendered,
            args.out_dir.display()
        ),
    }
    Ok(())
}

fn cmd_effects() -> anyhow::Result<()> {
    for kind in EffectKind::ALL {
        println!("{:>2}  {}", kind.index(), kind.name());
    }
    Ok(())
}

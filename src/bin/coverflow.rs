use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use coverflow::{Carousel, CarouselConfig, FrameBuffer, ManualScheduler};

#[derive(Parser, Debug)]
#[command(name = "coverflow", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single resting frame as a PNG.
    Frame(FrameArgs),
    /// Animate a transition and write one PNG per rendered frame.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Directory of cover images (loaded in file name order).
    #[arg(long)]
    covers: PathBuf,

    /// Carousel configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial focus index (clamped).
    #[arg(long, default_value_t = 0)]
    focus: usize,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Target cover index.
    #[arg(long, conflicts_with = "steps", required_unless_present = "steps")]
    to: Option<usize>,

    /// Move this many covers from the initial focus (negative goes back).
    #[arg(long, allow_hyphen_values = true)]
    steps: Option<i64>,
}

const MAX_TICKS: usize = 100_000;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_carousel(args: &CommonArgs, sched: &mut ManualScheduler) -> anyhow::Result<Carousel> {
    let config = match &args.config {
        Some(path) => CarouselConfig::from_path(path)?,
        None => CarouselConfig::default(),
    };

    let covers = coverflow::load_cover_dir(&args.covers, config.cell_width, config.cell_height)
        .with_context(|| format!("load covers from '{}'", args.covers.display()))?;
    tracing::info!(count = covers.len(), dir = %args.covers.display(), "loaded covers");

    let mut carousel = Carousel::new(config, covers)?;
    carousel.set_current(args.focus, sched);
    Ok(carousel)
}

fn write_png(buffer: &FrameBuffer, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut sched = ManualScheduler::new();
    let mut carousel = build_carousel(&args.common, &mut sched)?;
    let report = carousel.on_render_requested();
    tracing::info!(
        focus = carousel.focus(),
        drawn = report.covers_drawn(),
        "rendered frame"
    );

    write_png(carousel.buffer(), &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut sched = ManualScheduler::new();
    let mut carousel = build_carousel(&args.common, &mut sched)?;

    let target = match (args.to, args.steps) {
        (Some(to), _) => to,
        (None, Some(steps)) => (carousel.focus() as i64).saturating_add(steps).max(0) as usize,
        (None, None) => anyhow::bail!("either --to or --steps is required"),
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0usize;
    let mut emit = |carousel: &mut Carousel| -> anyhow::Result<()> {
        carousel.on_render_requested();
        let path = args.out_dir.join(format!("frame_{written:04}.png"));
        write_png(carousel.buffer(), &path)?;
        written += 1;
        Ok(())
    };

    sched.take_render();
    emit(&mut carousel)?;

    if carousel.show_cover(target, &mut sched) {
        let mut ticks = 0usize;
        while sched.is_ticking() {
            ticks += 1;
            if ticks > MAX_TICKS {
                anyhow::bail!("transition did not settle after {MAX_TICKS} ticks");
            }
            carousel.on_tick(&mut sched);
            if sched.take_render() {
                emit(&mut carousel)?;
            }
        }
        tracing::info!(ticks, focus = carousel.focus(), "transition finished");
    } else {
        tracing::info!(to = target, "already at target");
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

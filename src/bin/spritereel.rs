use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "spritereel", version, about = "Render single-row sprite sheets to MP4")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print the derived timeline as JSON without encoding.
    Plan(JobArgs),
    /// Write one composited frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// JSON job file. Flags given alongside it override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sprite sheet image.
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Width of one frame in the sheet, in pixels.
    #[arg(long, value_name = "PX")]
    frame_width: Option<u32>,

    /// First frame to use (1-based).
    #[arg(long)]
    start: Option<u32>,

    /// Last frame to use (1-based, inclusive). Defaults to the last frame in the sheet.
    #[arg(long)]
    end: Option<u32>,

    /// Uniform scale for every frame (1 = original size).
    #[arg(long)]
    scale: Option<f64>,

    /// Output resolution: 720p, 1080p, 2k, 4k or WxH. Defaults to 1080p.
    #[arg(long, value_parser = spritereel::parse_resolution)]
    resolution: Option<spritereel::Canvas>,

    /// Swap the resolution's width and height (portrait video).
    #[arg(long)]
    vertical: bool,

    /// Total video length: seconds, or with an s/m/h suffix. Defaults to 4s.
    #[arg(long, value_parser = spritereel::parse_duration_secs)]
    duration: Option<f64>,

    /// Seconds one pass through the animation takes. Defaults to the total duration.
    #[arg(long, value_parser = spritereel::parse_duration_secs)]
    cycle: Option<f64>,

    /// Repeat the animation instead of freezing on its last frame.
    #[arg(long = "loop")]
    looped: bool,

    /// Output MP4 path. Defaults to the sheet path with an .mp4 extension.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Encoder selection.
    #[arg(long, value_enum)]
    encoder: Option<EncoderChoice>,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Print the render report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Sheet frame to composite (1-based).
    #[arg(long)]
    index: u32,

    /// Output PNG path.
    #[arg(long)]
    png: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncoderChoice {
    /// NVENC first, libx264 if it fails.
    Auto,
    /// NVENC only.
    Hardware,
    /// libx264 only.
    Software,
}

impl From<EncoderChoice> for spritereel::EncoderPreference {
    fn from(choice: EncoderChoice) -> Self {
        match choice {
            EncoderChoice::Auto => Self::Auto,
            EncoderChoice::Hardware => Self::Hardware,
            EncoderChoice::Software => Self::Software,
        }
    }
}

const DEFAULT_DURATION_SECS: f64 = 4.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.cmd {
        Command::Render(args) => cmd_render(args, cli.quiet),
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else if quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn job_config(args: JobArgs) -> anyhow::Result<spritereel::JobConfig> {
    let mut cfg = match &args.config {
        Some(path) => spritereel::JobConfig::from_json_file(path)?,
        None => {
            let sheet = args
                .sheet
                .clone()
                .context("--sheet is required when no --config is given")?;
            let frame_width = args
                .frame_width
                .context("--frame-width is required when no --config is given")?;
            let canvas = match args.resolution {
                Some(c) => c,
                None => spritereel::parse_resolution("1080p")?,
            };
            spritereel::JobConfig::new(
                sheet,
                frame_width,
                canvas,
                args.duration.unwrap_or(DEFAULT_DURATION_SECS),
            )
        }
    };

    if let Some(sheet) = args.sheet {
        cfg.sheet = sheet;
    }
    if let Some(w) = args.frame_width {
        cfg.frame_width = w;
    }
    if args.start.is_some() {
        cfg.start = args.start;
    }
    if args.end.is_some() {
        cfg.end = args.end;
    }
    if let Some(scale) = args.scale {
        cfg.scale = scale;
    }
    if let Some(canvas) = args.resolution {
        cfg.canvas = canvas;
    }
    if args.vertical {
        cfg.canvas = cfg.canvas.swapped();
    }
    if let Some(d) = args.duration {
        cfg.duration_secs = d;
    }
    if args.cycle.is_some() {
        cfg.cycle_secs = args.cycle;
    }
    if args.looped {
        cfg.looped = true;
    }
    if args.out.is_some() {
        cfg.out = args.out;
    }
    if let Some(e) = args.encoder {
        cfg.encoder = e.into();
    }
    if args.no_overwrite {
        cfg.overwrite = false;
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs, quiet: bool) -> anyhow::Result<()> {
    let job = spritereel::RenderJob::from_config(job_config(args.job)?)?;

    let report = job.run_with_progress(|sent, total| {
        if !quiet {
            eprint!("\r- frames {sent}/{total}");
            if sent == total {
                eprintln!();
            }
            let _ = std::io::stderr().flush();
        }
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    if report.fallback_used {
        eprintln!("note: hardware encoder unavailable, used {}", report.codec);
    }
    eprintln!(
        "wrote {} ({} frames @ {:.3} fps)",
        report.plan.out_path.display(),
        report.plan.output_frames,
        report.plan.fps
    );
    Ok(())
}

fn cmd_plan(args: JobArgs) -> anyhow::Result<()> {
    let job = spritereel::RenderJob::from_config(job_config(args)?)?;
    let plan = job.plan()?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = job_config(args.job)?;
    cfg.start = Some(args.index);
    cfg.end = Some(args.index);

    let job = spritereel::RenderJob::from_config(cfg)?;
    let base = job.base_frames()?;
    let frame = base
        .get(0)
        .cloned()
        .context("frame selection produced no frame")?;

    spritereel::ensure_parent_dir(&args.png)?;
    frame
        .into_image()?
        .save_with_format(&args.png, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.png.display()))?;

    eprintln!("wrote {}", args.png.display());
    Ok(())
}

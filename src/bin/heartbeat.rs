use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use heartbeat::{AnimationConfig, CpuRasterizer, HeartAnimation};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heartbeat", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    paths: PathArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every frame as a numbered JPEG.
    Frames,
    /// Reassemble previously saved frames into a looping GIF.
    Gif,
    /// Render the frames, then build the GIF (default).
    All,
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Directory receiving the numbered frames.
    #[arg(long, global = true, default_value = "imgs")]
    out_dir: PathBuf,

    /// Output GIF path.
    #[arg(long, global = true, default_value = "heart.gif")]
    gif: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let cfg = AnimationConfig {
        out_dir: cli.paths.out_dir,
        gif_path: cli.paths.gif,
        ..AnimationConfig::default()
    };
    let anim = HeartAnimation::new(cfg)?;

    match cli.cmd.unwrap_or(Command::All) {
        Command::Frames => cmd_frames(&anim),
        Command::Gif => cmd_gif(&anim),
        Command::All => {
            cmd_frames(&anim)?;
            cmd_gif(&anim)
        }
    }
}

fn cmd_frames(anim: &HeartAnimation) -> anyhow::Result<()> {
    let mut rasterizer = CpuRasterizer::new(anim.config().canvas)?;
    let written = anim.render_sequence(&mut rasterizer)?;
    eprintln!(
        "wrote {} frames to {}",
        written.len(),
        anim.config().out_dir.display()
    );
    Ok(())
}

fn cmd_gif(anim: &HeartAnimation) -> anyhow::Result<()> {
    let frames = anim.export_gif()?;
    eprintln!(
        "wrote {} ({frames} frames)",
        anim.config().gif_path.display()
    );
    Ok(())
}

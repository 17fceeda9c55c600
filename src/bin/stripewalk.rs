use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "stripewalk", version)]
struct Cli {
    /// Log per-step geometry.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize move1..move3 from an idle sprite PNG.
    Frames(FramesArgs),
    /// Print the stripe column offsets for a sprite width as JSON.
    Stripes(StripesArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Idle sprite PNG with a transparent background.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving move1.png, move2.png and move3.png.
    #[arg(long)]
    out_dir: PathBuf,

    /// Transparent margin added around the sprite, in pixels.
    #[arg(long, default_value_t = 0)]
    pad: u32,

    /// Also write sheet.png with idle and the three frames side by side.
    #[arg(long, default_value_t = false)]
    sheet: bool,

    /// Also write manifest.json describing the frames.
    #[arg(long, default_value_t = false)]
    manifest: bool,
}

#[derive(Parser, Debug)]
struct StripesArgs {
    /// Sprite width in pixels.
    #[arg(long)]
    width: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Stripes(args) => cmd_stripes(args),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (mut doc, source) = stripewalk::load_sprite(&args.in_path, args.pad)
        .with_context(|| format!("load sprite '{}'", args.in_path.display()))?;
    let frames = stripewalk::synthesize_document(&mut doc, source)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for id in [frames.move1, frames.move2, frames.move3] {
        let name = doc.layer(id)?.name().to_string();
        let png = stripewalk::encode_layer_png(&doc, id)?;
        write_file(&args.out_dir.join(format!("{name}.png")), &png)?;
    }

    if args.sheet {
        let png = stripewalk::encode_sheet_png(&doc, &frames.sequence())?;
        write_file(&args.out_dir.join("sheet.png"), &png)?;
    }

    if args.manifest {
        let manifest = frames.manifest(&doc)?;
        let json = serde_json::to_vec_pretty(&manifest).context("serialize manifest")?;
        write_file(&args.out_dir.join("manifest.json"), &json)?;
    }

    Ok(())
}

fn cmd_stripes(args: StripesArgs) -> anyhow::Result<()> {
    let columns = stripewalk::stripe_columns(args.width)?;
    println!("{}", serde_json::to_string(&columns)?);
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

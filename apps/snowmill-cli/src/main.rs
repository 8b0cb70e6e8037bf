use anyhow::Context;
use clap::{Parser, Subcommand};
use snowmill_render::{DebugTextRenderer, RenderPass};
use snowmill_viewer::{InputScript, Viewer, ViewerConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snowmill", about = "Headless driver for the snowmill scene viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file (defaults are used for anything missing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info, and the camera start
    Info,
    /// Fly through an input script and print the frames
    Fly {
        /// JSON input script; the built-in tour is used when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print every n-th frame
        #[arg(short, long, default_value = "30")]
        every: u64,
    },
    /// Print the effective configuration as JSON
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ViewerConfig> {
    match path {
        Some(p) => ViewerConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(ViewerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("snowmill v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", snowmill_input::crate_info());
            println!("scene: {}", snowmill_scene::crate_info());
            println!("render: {}", snowmill_render::crate_info());
            println!("viewer: {}", snowmill_viewer::crate_info());

            let viewer = Viewer::new(config)?;
            let cam = viewer.camera();
            let (pitch, yaw) = cam.orientation_angles();
            let p = cam.position();
            let f = cam.front();
            println!(
                "camera: pos=({:.2}, {:.2}, {:.2}) front=({:.3}, {:.3}, {:.3})",
                p.x, p.y, p.z, f.x, f.y, f.z
            );
            println!("camera: pitch={pitch:.1} yaw={yaw:.1}");
        }
        Commands::Fly { script, dt, every } => {
            anyhow::ensure!(dt.is_finite() && dt > 0.0, "--dt must be positive");
            let script = match script {
                Some(path) => InputScript::load(&path)
                    .with_context(|| format!("loading script {}", path.display()))?,
                None => InputScript::demo(),
            };
            let every = every.max(1);

            let mut viewer = Viewer::new(config)?;
            let mut renderer = DebugTextRenderer::new();
            let mut depth_frames = 0u64;
            let rendered = viewer.run(&script, dt, &mut renderer, |frame, text| {
                if frame.pass == RenderPass::DepthMap {
                    depth_frames += 1;
                }
                if frame.index % every == 0 {
                    print!("{text}");
                }
            });

            let cam = viewer.camera();
            let p = cam.position();
            println!(
                "Flew {rendered} of {} frames ({depth_frames} in depth-map view)",
                script.total_frames()
            );
            println!("Final camera: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
            println!(
                "Scene: fog={:.4} snow={} bus_offset={:.2} mill_angle={:.3}",
                viewer.scene().fog().density(),
                viewer.scene().snow().is_active(),
                viewer.scene().bus().offset(),
                viewer.scene().windmill().angle()
            );
        }
        Commands::Config { out } => match out {
            Some(path) => {
                config.validate()?;
                config.save(&path)?;
                tracing::info!(path = %path.display(), "wrote config");
            }
            None => println!("{}", config.to_json()?),
        },
    }

    Ok(())
}

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termrast::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use termrast::render::RasterDomain;
use termrast::{scene, snapshot, Engine, Frustum, RenderConfig, ShadingMode};

/// Rasterize the reference quad into the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Columns in the character grid.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Rows in the character grid.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    #[arg(long, value_enum, default_value_t = ShadingMode::Monochrome)]
    mode: ShadingMode,

    /// Pixels visited per triangle.
    #[arg(long, value_enum, default_value_t = RasterDomain::BoundingBox)]
    domain: RasterDomain,

    /// Also save the depth map as a PNG.
    #[arg(long)]
    png: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            frustum: Frustum::default(),
            shading: self.mode,
            domain: self.domain,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // stdout carries the frame, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();
    tracing::info!(
        width = config.width,
        height = config.height,
        mode = ?config.shading,
        "rendering quad"
    );

    let mut engine = Engine::from_config(&config).context("invalid render configuration")?;
    let stats = engine
        .draw_all(&scene::QUAD_TRIANGLES)
        .context("failed to rasterize scene")?;
    tracing::info!(covered = stats.covered, written = stats.written, "scene rasterized");

    engine
        .render(BufWriter::new(io::stdout().lock()))
        .context("failed to write frame")?;

    if let Some(path) = &args.png {
        snapshot::save_png(engine.frame(), path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        tracing::info!(path = %path.display(), "depth map saved");
    }

    Ok(())
}

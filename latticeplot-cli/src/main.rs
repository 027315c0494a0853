//! Render a lattice point file as a 3D scatter image
//!
//! Usage: `plot3d L INPUT OUTPUT M ELEV AZIM`

use anyhow::{Context, Result};
use clap::Parser;
use latticeplot_core::RenderConfig;
use latticeplot_visualization::Renderer;
use log::debug;
use std::path::PathBuf;

const USAGE: &str = "Usage: [L] [INPUT] [OUTPUT] [M] [ELEV] [AZIM]";

#[derive(Parser, Debug)]
#[command(name = "plot3d", version, about = "Plot a cubic lattice point cloud from a fixed viewpoint")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Lattice size; every axis spans [-0.5, L - 0.5]
    #[arg(value_name = "L")]
    lattice_size: i64,

    /// Text file with one `x y z` row per point
    input: PathBuf,

    /// Image to write; the format follows the extension, PNG when there is none
    output: PathBuf,

    /// Marker area in points²
    #[arg(value_name = "M")]
    marker_size: i64,

    /// Camera elevation in degrees
    #[arg(value_name = "ELEV")]
    elevation: f64,

    /// Camera azimuth in degrees
    #[arg(value_name = "AZIM")]
    azimuth: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // a wrong argument count is answered with the usage line, not an error
    if std::env::args_os().len() != 7 {
        println!("{USAGE}");
        return Ok(());
    }

    let cli = Cli::parse();
    debug!("{cli:?}");

    let config = RenderConfig::new(cli.lattice_size, cli.marker_size, cli.elevation, cli.azimuth)
        .context("invalid render parameters")?;
    Renderer::new(config)
        .render(&cli.input, &cli.output)
        .with_context(|| {
            format!(
                "failed to render {} to {}",
                cli.input.display(),
                cli.output.display()
            )
        })?;

    Ok(())
}

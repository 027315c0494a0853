//! Lattice scatter rendering

use crate::figure::Figure;
use crate::options::{FigureOptions, MarkerStyle};
use crate::output::OutputFormat;
use latticeplot_core::{Bounded, Point3d, PointCloud, RenderConfig, Result};
use log::{info, warn};
use std::path::Path;

/// Renders point clouds into cubic lattice plots
pub struct Renderer {
    config: RenderConfig,
    options: FigureOptions,
}

impl Renderer {
    /// Create a renderer with default figure options
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            options: FigureOptions::default(),
        }
    }

    /// Build the figure for `cloud` without writing anything
    pub fn compose(&self, cloud: &PointCloud<Point3d>, title: &str) -> Figure {
        let range = self.config.axis_range();
        if !cloud.fits_within(&range) {
            warn!("point cloud extends beyond the lattice range [{}, {}]", range.min, range.max);
        }

        let mut figure = Figure::new(self.options.clone());
        let axes = figure.axes_mut();
        axes.view_init(self.config.elevation(), self.config.azimuth());
        axes.set_xlim(range);
        axes.set_ylim(range);
        axes.set_zlim(range);
        axes.set_aspect(self.options.aspect);
        axes.set_title(title);
        axes.scatter(cloud, MarkerStyle::dot(f64::from(self.config.marker_size())));
        figure.tight_layout();
        figure
    }

    /// Load `input`, plot it and save the image to `output`
    ///
    /// The output format is checked before the input is read, and nothing is
    /// written unless loading and encoding both succeed.
    pub fn render<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<()> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let format = OutputFormat::from_path(output, self.options.default_format)?;
        let cloud = latticeplot_io::read_point_cloud(input)?;
        let figure = self.compose(&cloud, &title_from_path(input));
        figure.save_as(output, format)?;
        info!(
            "rendered {} points from {} (L = {})",
            cloud.len(),
            input.display(),
            self.config.lattice_size()
        );
        Ok(())
    }
}

/// File name without directory or extension
pub fn title_from_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Validate the raw parameters and render `input` to `output`
pub fn render<P: AsRef<Path>, Q: AsRef<Path>>(
    lattice_size: i64,
    input: P,
    output: Q,
    marker_size: i64,
    elevation: f64,
    azimuth: f64,
) -> Result<()> {
    let config = RenderConfig::new(lattice_size, marker_size, elevation, azimuth)?;
    Renderer::new(config).render(input, output)
}

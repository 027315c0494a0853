//! Caller-owned figure and 3D axes
//!
//! A [`Figure`] holds every piece of plotting state for one image. Nothing
//! is shared between figures, so independent renders can run side by side.

use crate::camera::{Camera, Projector};
use crate::options::{AspectMode, FigureOptions, MarkerStyle};
use crate::output::OutputFormat;
use crate::raster;
use crate::scene::{Label, Marker, Rect, Scene, ScreenPoint, Segment};
use crate::svg;
use image::RgbImage;
use latticeplot_core::{AxisRange, Point3, Point3d, PointCloud, Result};
use log::{debug, info, warn};
use std::path::Path;

/// Fraction of the title size left between the title and the axes
const TITLE_GAP: f64 = 0.5;

/// One scatter series
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub points: Vec<Point3d>,
    pub style: MarkerStyle,
}

/// 3D axes: limits, aspect, view, title and plotted series
#[derive(Debug, Clone, PartialEq)]
pub struct Axes3D {
    limits: [AxisRange; 3],
    aspect: AspectMode,
    camera: Camera,
    title: Option<String>,
    series: Vec<ScatterSeries>,
}

impl Axes3D {
    fn new(aspect: AspectMode) -> Self {
        let unit = AxisRange { min: 0.0, max: 1.0 };
        Self {
            limits: [unit; 3],
            aspect,
            camera: Camera::default(),
            title: None,
            series: Vec::new(),
        }
    }

    /// Orient the camera, angles in degrees
    pub fn view_init(&mut self, elevation: f64, azimuth: f64) {
        self.camera = Camera::new(elevation, azimuth);
    }

    pub fn set_xlim(&mut self, range: AxisRange) {
        self.limits[0] = range;
    }

    pub fn set_ylim(&mut self, range: AxisRange) {
        self.limits[1] = range;
    }

    pub fn set_zlim(&mut self, range: AxisRange) {
        self.limits[2] = range;
    }

    pub fn set_aspect(&mut self, aspect: AspectMode) {
        self.aspect = aspect;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Add every point of `cloud` as one series
    pub fn scatter(&mut self, cloud: &PointCloud<Point3d>, style: MarkerStyle) {
        self.series.push(ScatterSeries {
            points: cloud.points.clone(),
            style,
        });
    }

    pub fn xlim(&self) -> AxisRange {
        self.limits[0]
    }

    pub fn ylim(&self) -> AxisRange {
        self.limits[1]
    }

    pub fn zlim(&self) -> AxisRange {
        self.limits[2]
    }

    pub fn aspect(&self) -> AspectMode {
        self.aspect
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn series(&self) -> &[ScatterSeries] {
        &self.series
    }

    /// Total number of points over all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    fn in_limits(&self, p: &Point3d) -> bool {
        (0..3).all(|i| self.limits[i].contains(p[i]))
    }

    /// Map data coordinates into the `[-1, 1]³` box
    fn normalize(&self, p: &Point3d) -> Point3d {
        let longest = self.limits.iter().map(AxisRange::span).fold(0.0, f64::max);
        let mut out = Point3::origin();
        for i in 0..3 {
            let span = match self.aspect {
                AspectMode::Equal => longest,
                AspectMode::Auto => self.limits[i].span(),
            };
            out[i] = 2.0 * (p[i] - self.limits[i].center()) / span;
        }
        out
    }
}

/// Layout selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutMode {
    /// Fixed subplot fractions
    Default,
    /// Axes grown to the figure edges minus padding
    Tight,
}

/// Pixel placement of the axes and title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Square the projected data box is framed in
    pub axes: Rect,
    /// Top edge of the title
    pub title_top: f64,
}

/// A figure with a single set of 3D axes
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    options: FigureOptions,
    axes: Axes3D,
    layout: LayoutMode,
}

impl Figure {
    pub fn new(options: FigureOptions) -> Self {
        let axes = Axes3D::new(options.aspect);
        Self {
            options,
            axes,
            layout: LayoutMode::Default,
        }
    }

    pub fn options(&self) -> &FigureOptions {
        &self.options
    }

    pub fn axes(&self) -> &Axes3D {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes3D {
        &mut self.axes
    }

    /// Shrink the margins to the configured padding
    pub fn tight_layout(&mut self) {
        self.layout = LayoutMode::Tight;
    }

    fn title_px(&self) -> f64 {
        self.options.pt_to_px(self.options.title_size_pt)
    }

    /// Compute where the axes and title go
    pub fn layout(&self) -> Layout {
        let (w, h) = self.options.size_px();
        let (w, h) = (f64::from(w), f64::from(h));
        let title = self.title_px();
        let title_band = if self.axes.title.is_some() {
            title * (1.0 + TITLE_GAP)
        } else {
            0.0
        };

        let area = match self.layout {
            LayoutMode::Default => Rect {
                x: 0.125 * w,
                y: 0.12 * h,
                width: 0.775 * w,
                height: 0.77 * h,
            },
            LayoutMode::Tight => {
                let pad = self.options.layout_pad * title;
                Rect {
                    x: pad,
                    y: pad + title_band,
                    width: w - 2.0 * pad,
                    height: h - 2.0 * pad - title_band,
                }
            }
        };

        let axes = area.inscribed_square();
        Layout {
            axes,
            title_top: axes.y - title_band,
        }
    }

    /// Project everything into drawing primitives
    pub fn scene(&self) -> Scene {
        let (width, height) = self.options.size_px();
        let layout = self.layout();
        let projector = Projector::new(&self.axes.camera, self.options.projection);
        let half = 0.5 * layout.axes.width;
        let (cx, cy) = layout.axes.center();

        let to_screen = |p: &Point3d| {
            let (x, y, depth) = projector.project(&self.axes.normalize(p));
            ScreenPoint {
                x: cx + x * half,
                y: cy - y * half,
                depth,
            }
        };

        let mut segments = Vec::new();
        if self.options.draw_box {
            let corner = |i: usize| {
                let pick = |axis: usize| {
                    let range = self.axes.limits[axis];
                    if i & (1 << axis) == 0 { range.min } else { range.max }
                };
                Point3d::new(pick(0), pick(1), pick(2))
            };
            for i in 0..8 {
                for axis in 0..3 {
                    let j = i | (1 << axis);
                    if j != i {
                        segments.push(Segment {
                            from: to_screen(&corner(i)),
                            to: to_screen(&corner(j)),
                            color: self.options.box_color,
                        });
                    }
                }
            }
        }

        let mut markers = Vec::with_capacity(self.axes.point_count());
        let mut clipped = 0;
        for series in &self.axes.series {
            let radius = series.style.radius_px(self.options.dpi);
            for point in &series.points {
                if !self.axes.in_limits(point) {
                    clipped += 1;
                    continue;
                }
                markers.push(Marker {
                    at: to_screen(point),
                    radius,
                    color: series.style.color,
                });
            }
        }
        if clipped > 0 {
            warn!("{clipped} points lie outside the axis limits and were not drawn");
        }
        markers.sort_by(|a, b| a.at.depth.total_cmp(&b.at.depth));

        let labels = self
            .axes
            .title
            .iter()
            .map(|text| Label {
                text: text.clone(),
                center_x: layout.axes.center().0,
                top: layout.title_top,
                size: self.title_px(),
                color: self.options.title_color,
            })
            .collect();

        debug!(
            "scene: {} segments, {} markers, axes at {:?}",
            segments.len(),
            markers.len(),
            layout.axes
        );

        Scene {
            width,
            height,
            background: self.options.background,
            segments,
            markers,
            labels,
        }
    }

    /// Rasterise the figure
    pub fn to_image(&self) -> RgbImage {
        raster::rasterize(&self.scene())
    }

    /// Serialize the figure as SVG
    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.scene())
    }

    /// Encode in memory first so a failed encode leaves no file behind
    pub fn save_as<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<()> {
        let path = path.as_ref();
        let bytes = format.encode(self)?;
        std::fs::write(path, &bytes)?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

//! Fixed figure settings

use crate::output::OutputFormat;
use latticeplot_core::{colors, Rgb};
use serde::{Deserialize, Serialize};

/// How the data cube is projected onto the image plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Pinhole camera placed `distance` normalised units from the cube centre.
    /// The cube spans `[-1, 1]` on every axis after normalisation.
    Perspective { distance: f64 },
    Orthographic,
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective { distance: 10.0 }
    }
}

/// Relative scaling of the three axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectMode {
    /// One data unit has the same length on every axis
    #[default]
    Equal,
    /// Each axis is stretched to fill the box independently
    Auto,
}

/// Colour and area of a scatter series, drawn as a small filled dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: Rgb,
    /// Marker area in points²
    pub size: f64,
}

impl MarkerStyle {
    /// Black dot of the given area
    pub fn dot(size: f64) -> Self {
        Self {
            color: colors::BLACK,
            size,
        }
    }

    /// Disc radius in pixels
    ///
    /// A dot is half the diameter of a full circle marker of the same area.
    pub fn radius_px(&self, dpi: f64) -> f64 {
        let diameter_pt = 0.5 * self.size.sqrt();
        (0.5 * diameter_pt * dpi / 72.0).max(0.5)
    }
}

/// Figure-wide settings
///
/// Defaults: 6.4 x 4.8 in at 100 dpi, white background, perspective view
/// from 10 units, equal aspect, 12 pt title, tight-layout padding of 1.08
/// font heights and a grey bounding-box wireframe. An output path without
/// an extension is written as PNG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureOptions {
    /// Width and height in inches
    pub size_inches: (f64, f64),
    pub dpi: f64,
    pub background: Rgb,
    pub projection: Projection,
    pub aspect: AspectMode,
    pub title_size_pt: f64,
    pub title_color: Rgb,
    /// Padding around the axes under tight layout, in multiples of the title size
    pub layout_pad: f64,
    pub draw_box: bool,
    pub box_color: Rgb,
    /// Format used when the output path has no extension
    #[serde(skip)]
    pub default_format: OutputFormat,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            size_inches: (6.4, 4.8),
            dpi: 100.0,
            background: colors::WHITE,
            projection: Projection::default(),
            aspect: AspectMode::Equal,
            title_size_pt: 12.0,
            title_color: colors::BLACK,
            layout_pad: 1.08,
            draw_box: true,
            box_color: colors::LIGHT_GREY,
            default_format: OutputFormat::default(),
        }
    }
}

impl FigureOptions {
    /// Default figure with a parallel projection
    pub fn orthographic() -> Self {
        Self {
            projection: Projection::Orthographic,
            ..Self::default()
        }
    }

    /// Pixel dimensions of the output
    pub fn size_px(&self) -> (u32, u32) {
        let (w, h) = self.size_inches;
        (
            (w * self.dpi).round().max(1.0) as u32,
            (h * self.dpi).round().max(1.0) as u32,
        )
    }

    /// Points to pixels
    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

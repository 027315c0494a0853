//! Flattened 2D drawing primitives shared by the raster and SVG backends

use latticeplot_core::Rgb;

/// A projected position in pixel space; `depth` grows towards the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// A filled disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub at: ScreenPoint,
    pub radius: f64,
    pub color: Rgb,
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
    pub color: Rgb,
}

/// Horizontally centred text whose top edge sits at `top`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub center_x: f64,
    pub top: f64,
    /// Cap height in pixels
    pub size: f64,
    pub color: Rgb,
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// Largest square centred inside this rectangle
    pub fn inscribed_square(&self) -> Rect {
        let side = self.width.min(self.height).max(0.0);
        let (cx, cy) = self.center();
        Rect {
            x: cx - 0.5 * side,
            y: cy - 0.5 * side,
            width: side,
            height: side,
        }
    }
}

/// Everything needed to paint one figure, in painter's order
///
/// Segments are drawn first, then markers from back to front, then labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
}

//! Point types and related functionality

use nalgebra::{Point3, Vector3};

/// A 3D point with double precision coordinates, as read from numeric tables
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// An RGB colour with 8-bit channels
pub type Rgb = [u8; 3];

/// Named colours used by the renderer
pub mod colors {
    use super::Rgb;

    pub const BLACK: Rgb = [0, 0, 0];
    pub const WHITE: Rgb = [255, 255, 255];
    pub const LIGHT_GREY: Rgb = [204, 204, 204];
}

/// Format an RGB colour as a `#rrggbb` hex string
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

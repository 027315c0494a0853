//! Static rendering of lattice point clouds
//! 
//! This crate turns a point cloud into a 3D scatter image:
//! - Explicit per-render figure state (no global plotting context)
//! - Elevation/azimuth camera with perspective or orthographic projection
//! - `tiny-skia` rasterisation encoded through `image`, plus SVG output

pub mod camera;
pub mod figure;
pub mod glyphs;
pub mod options;
pub mod output;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod svg;

pub use camera::*;
pub use figure::*;
pub use options::*;
pub use output::*;
pub use renderer::*;

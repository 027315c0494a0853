//! I/O operations for point tables
//! 
//! Points are stored as plain numeric text: one point per row, three
//! whitespace separated coordinates per row.

pub mod xyz;

pub use xyz::XyzReader;

use latticeplot_core::{PointCloud, Point3d, Result};
use std::path::Path;

/// Read a point cloud from a numeric table
pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3d>> {
    XyzReader::read_point_cloud(path)
}

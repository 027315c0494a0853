//! Core traits for latticeplot

use crate::{config::AxisRange, point::*, point_cloud::*};

/// Objects with a spatial extent
pub trait Bounded {
    /// Axis-aligned bounding box as `(min, max)`, `None` when empty
    fn bounding_box(&self) -> Option<(Point3d, Point3d)>;

    /// Whether every coordinate lies inside `range` on all three axes
    fn fits_within(&self, range: &AxisRange) -> bool {
        match self.bounding_box() {
            Some((min, max)) => {
                (0..3).all(|i| range.contains(min[i]) && range.contains(max[i]))
            }
            None => true,
        }
    }
}

impl Bounded for PointCloud<Point3d> {
    fn bounding_box(&self) -> Option<(Point3d, Point3d)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let cloud = PointCloud::from_rows([[0.0, 3.0, -1.0], [2.0, 1.0, 4.0]]);
        let (min, max) = cloud.bounding_box().unwrap();
        assert_eq!(min, Point3d::new(0.0, 1.0, -1.0));
        assert_eq!(max, Point3d::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_fits_within_lattice() {
        let range = AxisRange::lattice(3);
        let inside = PointCloud::from_rows([[0.0, 0.0, 0.0], [2.0, 2.0, 2.0]]);
        let outside = PointCloud::from_rows([[0.0, 0.0, 0.0], [3.0, 0.0, 0.0]]);
        assert!(inside.fits_within(&range));
        assert!(!outside.fits_within(&range));
        assert!(PointCloud3d::new().fits_within(&range));
    }
}

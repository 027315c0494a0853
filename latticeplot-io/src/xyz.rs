//! XYZ numeric table support
//!
//! Each data row holds exactly three numeric columns (x, y, z) separated by
//! runs of spaces or tabs. Everything after a `#` is a comment, and lines
//! left empty are skipped.

use latticeplot_core::{Error, PointCloud, Point3d, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Marker that starts a comment
const COMMENT: char = '#';

/// XYZ table reader
pub struct XyzReader;

impl XyzReader {
    /// Read a point cloud from a file
    pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3d>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let cloud = Self::read_from(BufReader::new(file))?;
        debug!("loaded {} points from {}", cloud.len(), path.display());
        Ok(cloud)
    }

    /// Parse a point cloud from in-memory text
    pub fn parse_str(text: &str) -> Result<PointCloud<Point3d>> {
        Self::read_from(text.as_bytes())
    }

    /// Parse a point cloud from any buffered reader
    pub fn read_from<R: BufRead>(reader: R) -> Result<PointCloud<Point3d>> {
        let mut cloud = PointCloud::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let data = strip_comment(&line).trim();
            if data.is_empty() {
                continue;
            }
            cloud.push(Self::parse_line(data, index + 1)?);
        }

        Ok(cloud)
    }

    /// Parse a single data row; `line` is 1-based and only used for errors
    fn parse_line(data: &str, line: usize) -> Result<Point3d> {
        let parts: Vec<&str> = data.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(Error::parse(
                line,
                format!("expected 3 columns (x, y, z), found {}", parts.len()),
            ));
        }

        let mut coords = [0.0; 3];
        for ((coord, part), axis) in coords.iter_mut().zip(&parts).zip(["x", "y", "z"]) {
            *coord = part
                .parse::<f64>()
                .map_err(|_| Error::parse(line, format!("invalid {axis} coordinate {part:?}")))?;
        }

        Ok(Point3d::new(coords[0], coords[1], coords[2]))
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT).map_or(line, |(data, _)| data)
}

//! Validated render configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A closed axis interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Create a range, rejecting empty or non-finite intervals
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::InvalidArgument(format!(
                "axis range [{min}, {max}] must be finite and non-empty"
            )));
        }
        Ok(Self { min, max })
    }

    /// The cubic lattice range `[-0.5, size - 0.5]`
    ///
    /// Cell centres of a lattice of edge `size` sit on the integers
    /// `0..size`, so each cell gets half a unit of margin on both sides.
    pub fn lattice(size: u32) -> Self {
        Self {
            min: -0.5,
            max: f64::from(size) - 0.5,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parameters of a single lattice render
///
/// Constructed once through [`RenderConfig::new`], which enforces every
/// precondition, and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    lattice_size: u32,
    marker_size: u32,
    elevation: f64,
    azimuth: f64,
}

impl RenderConfig {
    /// Validate raw inputs into a configuration
    ///
    /// `lattice_size` and `marker_size` must be positive; the camera angles
    /// may take any finite value in degrees.
    pub fn new(lattice_size: i64, marker_size: i64, elevation: f64, azimuth: f64) -> Result<Self> {
        let lattice_size = positive("lattice size", lattice_size)?;
        let marker_size = positive("marker size", marker_size)?;
        for (name, angle) in [("elevation", elevation), ("azimuth", azimuth)] {
            if !angle.is_finite() {
                return Err(Error::InvalidArgument(format!("{name} must be finite, got {angle}")));
            }
        }

        Ok(Self {
            lattice_size,
            marker_size,
            elevation,
            azimuth,
        })
    }

    pub fn lattice_size(&self) -> u32 {
        self.lattice_size
    }

    pub fn marker_size(&self) -> u32 {
        self.marker_size
    }

    /// Camera elevation in degrees
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Camera azimuth in degrees
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Axis limits shared by x, y and z
    pub fn axis_range(&self) -> AxisRange {
        AxisRange::lattice(self.lattice_size)
    }
}

fn positive(name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(Error::InvalidArgument(format!("{name} must be positive, got {value}")));
    }
    u32::try_from(value)
        .map_err(|_| Error::InvalidArgument(format!("{name} {value} is too large")))
}

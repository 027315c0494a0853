//! Core data structures for latticeplot
//! 
//! This crate provides the fundamental types shared by the loader and the
//! renderer: points, point clouds, the validated render configuration and
//! the common error type.

pub mod point;
pub mod point_cloud;
pub mod config;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use config::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

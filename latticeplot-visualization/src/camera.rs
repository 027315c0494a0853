//! Camera utilities for the 3D axes

use crate::options::Projection;
use nalgebra::{Matrix4, Orthographic3, Perspective3, Point3, Vector3};

/// Radius of the sphere enclosing the normalised `[-1, 1]³` cube
pub const BOX_RADIUS: f64 = 1.732_050_807_568_877_2;

/// Viewing direction given as spherical angles in degrees
///
/// The camera sits on the ray `(cos e cos a, cos e sin a, sin e)` from the
/// cube centre and looks back at it. Any angle is accepted; once the
/// elevation passes ±90° the image is upside down, as when orbiting over
/// the pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Camera {
    /// Create a camera from elevation and azimuth in degrees
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self { elevation, azimuth }
    }

    /// Unit vector from the cube centre towards the eye
    pub fn direction(&self) -> Vector3<f64> {
        let (e, a) = (self.elevation.to_radians(), self.azimuth.to_radians());
        Vector3::new(e.cos() * a.cos(), e.cos() * a.sin(), e.sin())
    }

    /// Screen-up vector, the derivative of the direction w.r.t. elevation
    ///
    /// Always orthogonal to the direction, so looking straight down is not
    /// degenerate, and equals `+z` projected onto the screen for `|e| < 90°`.
    pub fn up(&self) -> Vector3<f64> {
        let (e, a) = (self.elevation.to_radians(), self.azimuth.to_radians());
        Vector3::new(-e.sin() * a.cos(), -e.sin() * a.sin(), e.cos())
    }

    /// World to camera transform for an eye at `distance`
    pub fn view_matrix(&self, distance: f64) -> Matrix4<f64> {
        let eye = Point3::from(self.direction() * distance);
        Matrix4::look_at_rh(&eye, &Point3::origin(), &self.up())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(30.0, -60.0)
    }
}

enum Lens {
    Perspective(Perspective3<f64>),
    Orthographic(Orthographic3<f64>),
}

/// Maps normalised cube coordinates to normalised device coordinates
///
/// The enclosing sphere of the cube always projects inside `[-1, 1]²`, so the
/// framing does not change as the camera orbits.
pub struct Projector {
    view: Matrix4<f64>,
    lens: Lens,
}

impl Projector {
    pub fn new(camera: &Camera, projection: Projection) -> Self {
        let r = BOX_RADIUS;
        match projection {
            Projection::Perspective { distance } => {
                let distance = distance.max(r * 1.01);
                let fovy = 2.0 * (r / distance).asin();
                let near = (distance - r) * 0.5;
                Self {
                    view: camera.view_matrix(distance),
                    lens: Lens::Perspective(Perspective3::new(1.0, fovy, near, distance + 2.0 * r)),
                }
            }
            Projection::Orthographic => {
                let distance = 2.0 * r;
                Self {
                    view: camera.view_matrix(distance),
                    lens: Lens::Orthographic(Orthographic3::new(-r, r, -r, r, 0.5 * r, 4.0 * r)),
                }
            }
        }
    }

    /// Project a point; returns `(x, y)` in device coordinates and the
    /// camera-space depth (larger is nearer to the eye)
    pub fn project(&self, point: &Point3<f64>) -> (f64, f64, f64) {
        let eye_space = self.view.transform_point(point);
        let ndc = match &self.lens {
            Lens::Perspective(p) => p.project_point(&eye_space),
            Lens::Orthographic(o) => o.project_point(&eye_space),
        };
        (ndc.x, ndc.y, eye_space.z)
    }
}

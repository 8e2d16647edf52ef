//! Geometry helpers shared by the renderers
//!
//! Provides the 2-D/3-D vector types, the rotation and projection used by the
//! globe, and the Fibonacci sphere distribution.

use std::f32::consts::PI;

/// Focal length of the pinhole projection.
pub const FOCAL_LENGTH: f32 = 300.0;
/// Distance from the camera plane to the sphere origin.
pub const CAMERA_OFFSET: f32 = 120.0;

/// 2-D point or offset in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 3-D point in model coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the origin.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Rotates a point around the X, then Y, then Z axis.
pub fn rotate_xyz(p: Vec3, rx: f32, ry: f32, rz: f32) -> Vec3 {
    let y1 = p.y * rx.cos() - p.z * rx.sin();
    let z1 = p.y * rx.sin() + p.z * rx.cos();

    let x2 = p.x * ry.cos() + z1 * ry.sin();
    let z2 = -p.x * ry.sin() + z1 * ry.cos();

    let x3 = x2 * rz.cos() - y1 * rz.sin();
    let y3 = x2 * rz.sin() + y1 * rz.cos();

    Vec3::new(x3, y3, z2)
}

/// Projects a rotated point onto the surface about `center`.
///
/// Returns the screen position and the perspective scale. Depth stays the
/// rotated z; callers sort and clip on it.
pub fn project(p: Vec3, center: Vec2) -> (Vec2, f32) {
    let scale = FOCAL_LENGTH / (p.z + CAMERA_OFFSET);
    let screen = Vec2::new(center.x + p.x * scale, center.y + p.y * scale);
    (screen, scale)
}

/// Distributes `count` points evenly over a sphere of `radius` using the
/// golden-angle spiral.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / count as f32).acos();
            let theta = (count as f32 * PI).sqrt() * phi;
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_sphere_points_sit_on_radius() {
        for point in fibonacci_sphere(40, 60.0) {
            assert!((point.length() - 60.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_fibonacci_sphere_spans_poles() {
        let points = fibonacci_sphere(40, 60.0);
        assert!((points[0].z + 60.0).abs() < 1e-3);
        assert!(points.last().map(|p| p.z > 55.0).unwrap_or(false));
    }

    #[test]
    fn test_rotate_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let r = rotate_xyz(p, 0.0, 0.0, 0.0);
        assert_eq!(r, p);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let p = Vec3::new(12.0, -5.0, 9.0);
        let r = rotate_xyz(p, 0.7, 1.3, -0.4);
        assert!((r.length() - p.length()).abs() < 1e-3);
    }

    #[test]
    fn test_project_scales_with_depth() {
        let center = Vec2::new(200.0, 150.0);
        let (near, near_scale) = project(Vec3::new(10.0, 0.0, -60.0), center);
        let (far, far_scale) = project(Vec3::new(10.0, 0.0, 60.0), center);
        assert!(near_scale > far_scale);
        assert!(near.x > far.x);
        assert_eq!(project(Vec3::new(0.0, 0.0, 30.0), center).0, center);
    }
}

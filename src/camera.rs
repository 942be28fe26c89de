use crate::math::{Ray, Vec3};

/// Eye position plus the four world-space corners of the image plane.
/// `alpha` runs left to right, `beta` top to bottom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
}

impl Camera {
    pub fn new(
        origin: Vec3,
        top_left: Vec3,
        top_right: Vec3,
        bottom_left: Vec3,
        bottom_right: Vec3,
    ) -> Camera {
        Camera {
            origin,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Axis-aligned plane at `z = plane_z`, spanning `[-1, 1]` horizontally
    /// and `[-aspect_ratio, aspect_ratio]` vertically.
    pub fn looking_down_z(origin: Vec3, plane_z: f64, aspect_ratio: f64) -> Camera {
        Camera::new(
            origin,
            Vec3::new(-1.0, aspect_ratio, plane_z),
            Vec3::new(1.0, aspect_ratio, plane_z),
            Vec3::new(-1.0, -aspect_ratio, plane_z),
            Vec3::new(1.0, -aspect_ratio, plane_z),
        )
    }

    pub fn point_on_plane(&self, alpha: f64, beta: f64) -> Vec3 {
        let top = self.top_left.lerp(self.top_right, alpha);
        let bottom = self.bottom_left.lerp(self.bottom_right, alpha);
        top.lerp(bottom, beta)
    }

    /// Primary ray leaving the image plane, pointing away from the eye.
    pub fn get_ray(&self, alpha: f64, beta: f64) -> Ray {
        let point = self.point_on_plane(alpha, beta);
        Ray::new(point, point - self.origin)
    }
}

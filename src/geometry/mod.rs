use crate::math::Ray;

mod sphere;

pub use sphere::Sphere;

pub trait Primitive {
    /// Hit parameter of the nearest intersection in front of the ray origin.
    fn intersect(&self, r: Ray) -> Option<f64>;
}

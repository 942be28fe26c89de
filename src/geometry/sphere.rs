use crate::geometry::Primitive;
use crate::material::Material;
use crate::math::{Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, material: Material) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }
}

impl Primitive for Sphere {
    // Only the smaller root is considered, so a ray starting inside the
    // sphere reports a miss.
    fn intersect(&self, r: Ray) -> Option<f64> {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        let b = 2.0 * (r.direction * oc);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b + discriminant_sqrt) / (2.0 * a);
        let t2 = (-b - discriminant_sqrt) / (2.0 * a);
        let time = t1.min(t2);
        if time < 0.0 {
            return None;
        }
        Some(time)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sphere(center: Vec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Material::default())
    }

    #[test]
    fn test_ray_through_center() {
        let s = sphere(Vec3::new(2.0, 2.0, 2.0), 2.0);
        let origin = Vec3::new(-3.0, 1.0, 0.5);
        let r = Ray::new(origin, (s.center - origin).normalized());

        let t = s.intersect(r).expect("ray through the center must hit");
        let expected = (origin - s.center).norm() - s.radius;
        assert!((t - expected).abs() < 1e-9, "{} {}", t, expected);
    }

    #[test]
    fn test_unnormalized_direction() {
        let s = sphere(Vec3::ZERO, 1.0);
        let r = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -8.0));

        let t = s.intersect(r).unwrap();
        assert!((t - 0.5).abs() < 1e-12, "{}", t);
        let hit = r.point_at_parameter(t);
        assert!((hit - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-12, "{:?}", hit);
    }

    #[test]
    fn test_random_through_center() {
        for _ in 0..500 {
            let center = Vec3::new(
                rand::random::<f64>() * 10.0 - 5.0,
                rand::random::<f64>() * 10.0 - 5.0,
                rand::random::<f64>() * 10.0 - 5.0,
            );
            let radius = rand::random::<f64>() * 2.0 + 0.1;
            let s = sphere(center, radius);
            let distance = radius + 1.0 + rand::random::<f64>() * 10.0;
            let origin = center + Vec3::new(0.3, -0.7, 0.2).normalized() * distance;
            let r = Ray::new(origin, center - origin);

            let t = s.intersect(r).unwrap();
            let hit_distance = (r.point_at_parameter(t) - origin).norm();
            let expected = (origin - center).norm() - radius;
            assert!(
                (hit_distance - expected).abs() < 1e-9,
                "{} {}",
                hit_distance,
                expected
            );
        }
    }

    #[test]
    fn test_miss_when_closest_approach_exceeds_radius() {
        let s = sphere(Vec3::ZERO, 1.0);
        for i in 0..100 {
            let offset = 1.0 + 0.01 + i as f64 * 0.1;
            let r = Ray::new(Vec3::new(offset, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
            assert!(s.intersect(r).is_none(), "offset {}", offset);
        }
    }

    #[test]
    fn test_behind_origin_is_a_miss() {
        let s = sphere(Vec3::ZERO, 1.0);
        let r = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(s.intersect(r).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_is_a_miss() {
        let s = sphere(Vec3::ZERO, 1.0);
        let r = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!(s.intersect(r).is_none());
    }

    #[test]
    fn test_normal_at() {
        let s = sphere(Vec3::new(1.0, 0.0, 0.0), 2.0);
        assert_eq!(s.normal_at(Vec3::new(3.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
    }
}

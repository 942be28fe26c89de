#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::RenderSettings;
use crate::geometry::Primitive;
use crate::math::{RGBColor, Ray, Vec3};
use crate::scene::Scene;

/// Offset applied to reflected ray origins so they do not re-hit the surface
/// they leave.
pub const REFLECTION_OFFSET: Vec3 = Vec3::new(0.0001, 0.0001, 0.0001);

/// Whitted-style shader: Phong direct lighting with hard shadows plus
/// depth-bounded mirror reflection.
pub struct Tracer<'a> {
    scene: &'a Scene,
    background: RGBColor,
    max_depth: usize,
    // deepest recursion level reached so far
    #[cfg(test)]
    deepest: AtomicUsize,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, background: RGBColor, max_depth: usize) -> Self {
        Tracer {
            scene,
            background,
            max_depth,
            #[cfg(test)]
            deepest: AtomicUsize::new(0),
        }
    }

    pub fn from_settings(scene: &'a Scene, settings: &RenderSettings) -> Self {
        Tracer::new(scene, settings.background(), settings.max_depth())
    }

    // index of the nearest sphere and its hit time. ties keep the earlier sphere.
    fn nearest_hit(&self, ray: Ray) -> Option<(usize, f64)> {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, sphere) in self.scene.spheres.iter().enumerate() {
            if let Some(time) = sphere.intersect(ray) {
                match nearest {
                    Some((_, nearest_time)) if time >= nearest_time => {}
                    _ => nearest = Some((index, time)),
                }
            }
        }
        nearest
    }

    /// Whether any sphere other than `shaded` sits between the shadow ray's
    /// origin (t = 0) and the light (t = 1).
    pub fn occluded(&self, shaded: usize, shadow_ray: Ray) -> bool {
        self.scene
            .spheres
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != shaded)
            .filter_map(|(_, sphere)| sphere.intersect(shadow_ray))
            .any(|time| time > 0.0 && time < 1.0)
    }

    pub fn ray_color(&self, ray: Ray, depth: usize) -> RGBColor {
        debug_assert!(depth <= self.max_depth, "{} > {}", depth, self.max_depth);
        #[cfg(test)]
        self.deepest.fetch_max(depth, Ordering::Relaxed);

        let (index, time) = match self.nearest_hit(ray) {
            Some(hit) => hit,
            None => return self.background,
        };
        let sphere = &self.scene.spheres[index];
        let material = &sphere.material;

        let mut color = material.ambient * self.scene.ambient;

        let point = ray.point_at_parameter(time);
        let normal = sphere.normal_at(point);

        for light in self.scene.lights.iter() {
            let to_light = light.position - point;
            let light_vec = to_light.normalized();
            let normal_light_dot = normal * light_vec;

            if normal_light_dot < 0.0 {
                continue;
            }

            if self.occluded(index, Ray::new(point, to_light)) {
                continue;
            }

            color += material.diffuse * light.diffuse * normal_light_dot;

            let reflect = normal * (2.0 * normal_light_dot) - light_vec;
            let view = (self.scene.camera.origin - point).normalized();
            let specular = (reflect * view).powf(material.shininess);
            color += light.specular * material.specular * specular;
        }

        if depth < self.max_depth {
            let v = (-ray.direction).normalized();
            let reflect = normal * (2.0 * (v * normal)) - v;
            let reflected = Ray::new(point + REFLECTION_OFFSET, reflect);

            color += self.ray_color(reflected, depth + 1) * material.reflectivity;
        }

        color.clamp()
    }
}

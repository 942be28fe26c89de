use crate::camera::Camera;
use crate::geometry::Sphere;
use crate::material::Material;
use crate::math::{RGBColor, Vec3};

/// Point light without attenuation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
}

impl Light {
    pub const fn new(position: Vec3, diffuse: RGBColor, specular: RGBColor) -> Light {
        Light {
            position,
            diffuse,
            specular,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub ambient: RGBColor,
}

impl Scene {
    pub fn new(
        camera: Camera,
        spheres: Vec<Sphere>,
        lights: Vec<Light>,
        ambient: RGBColor,
    ) -> Scene {
        Scene {
            camera,
            spheres,
            lights,
            ambient,
        }
    }

    /// Row of five glossy balls over a mirrored floor, with a line of small
    /// purple balls in front. `aspect_ratio` is height over width.
    pub fn reference(aspect_ratio: f64) -> Scene {
        let highlight = RGBColor::new(0.9, 0.9, 0.9);
        let mirror = RGBColor::new(0.8, 0.8, 0.8);
        let green_mirror = RGBColor::new(0.8, 0.9, 0.8);
        let purple = RGBColor::new(0.6, 0.2, 0.6);

        let mut spheres = vec![
            // floor
            Sphere::new(
                Vec3::new(0.0, -200.0, -17.0),
                200.0,
                Material::new(
                    RGBColor::from(0.3),
                    RGBColor::from(0.5),
                    RGBColor::ZERO,
                    0.0,
                    RGBColor::WHITE,
                ),
            ),
            // red
            Sphere::new(
                Vec3::new(-3.0, 1.0, -4.5),
                1.0,
                Material::glossy(RGBColor::new(0.6, 0.2, 0.2), highlight, 200.0, mirror),
            ),
            // yellow
            Sphere::new(
                Vec3::new(-1.5, 2.75, -4.5),
                1.0,
                Material::glossy(RGBColor::new(0.6, 0.6, 0.2), highlight, 200.0, mirror),
            ),
            // green
            Sphere::new(
                Vec3::new(0.0, 1.0, -4.5),
                1.0,
                Material::glossy(RGBColor::new(0.2, 0.6, 0.2), highlight, 200.0, mirror),
            ),
            // cyan
            Sphere::new(
                Vec3::new(1.5, 2.75, -4.5),
                1.0,
                Material::glossy(RGBColor::new(0.2, 0.6, 0.6), highlight, 200.0, mirror),
            ),
            // blue
            Sphere::new(
                Vec3::new(3.0, 1.0, -4.5),
                1.0,
                Material::glossy(RGBColor::new(0.1, 0.2, 0.6), highlight, 200.0, green_mirror),
            ),
        ];
        for x in [2.0, 2.25, 2.5, 2.75, 3.0] {
            spheres.push(Sphere::new(
                Vec3::new(x, 0.0, -1.5),
                0.2,
                Material::glossy(purple, highlight, 200.0, green_mirror),
            ));
        }

        let lights = vec![
            Light::new(
                Vec3::new(0.0, 0.0, 2.0),
                RGBColor::from(0.1),
                RGBColor::from(0.1),
            ),
            Light::new(
                Vec3::new(0.0, 2.0, 1.0),
                RGBColor::from(0.8),
                RGBColor::from(0.8),
            ),
        ];

        Scene::new(
            Camera::looking_down_z(Vec3::new(0.0, 0.0, 2.0), 1.0, aspect_ratio),
            spheres,
            lights,
            RGBColor::from(0.3),
        )
    }
}

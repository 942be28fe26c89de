use crate::math::RGBColor;

/// Phong surface description.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Material {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
    /// Phong exponent applied to the reflection/view cosine.
    pub shininess: f64,
    /// Per-channel weight of the mirror reflection.
    pub reflectivity: RGBColor,
}

impl Material {
    pub const fn new(
        ambient: RGBColor,
        diffuse: RGBColor,
        specular: RGBColor,
        shininess: f64,
        reflectivity: RGBColor,
    ) -> Material {
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity,
        }
    }

    /// Ambient and diffuse share one color, the usual setup for the
    /// reference scene's glossy balls.
    pub const fn glossy(
        color: RGBColor,
        specular: RGBColor,
        shininess: f64,
        reflectivity: RGBColor,
    ) -> Material {
        Material::new(color, color, specular, shininess, reflectivity)
    }
}

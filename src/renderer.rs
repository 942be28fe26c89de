use log::{debug, trace};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::config::RenderSettings;
use crate::film::Film;
use crate::integrator::Tracer;
use crate::math::{lerp, RGBColor};
use crate::scene::Scene;

/// Average of a `samples x samples` grid of rays through pixel `(x, y)`.
pub fn sample_pixel(
    tracer: &Tracer,
    camera: &Camera,
    settings: &RenderSettings,
    x: usize,
    y: usize,
) -> RGBColor {
    let (w, h) = (settings.width() as f64, settings.height() as f64);
    let (min_alpha, max_alpha) = (x as f64 / w, (x + 1) as f64 / w);
    let (min_beta, max_beta) = (y as f64 / h, (y + 1) as f64 / h);

    let n = settings.samples();
    let mut color = RGBColor::ZERO;
    for sample_x in 0..n {
        for sample_y in 0..n {
            let alpha = lerp(min_alpha, max_alpha, sample_x as f64 / n as f64);
            let beta = lerp(min_beta, max_beta, sample_y as f64 / n as f64);
            color += tracer.ray_color(camera.get_ray(alpha, beta), 0);
        }
    }
    color / (n * n) as f64
}

pub fn render(scene: &Scene, settings: &RenderSettings) -> Film<RGBColor> {
    render_with(scene, settings, |_| {})
}

/// Renders rows in parallel on the current rayon pool. `on_row` is called
/// once per finished row, from whichever worker rendered it.
pub fn render_with<F>(scene: &Scene, settings: &RenderSettings, on_row: F) -> Film<RGBColor>
where
    F: Fn(usize) + Sync,
{
    debug!(
        "rendering {}x{}, {} spheres, {} lights, {} samples per pixel",
        settings.width(),
        settings.height(),
        scene.spheres.len(),
        scene.lights.len(),
        settings.samples() * settings.samples()
    );
    let tracer = Tracer::from_settings(scene, settings);
    let mut film = Film::new(settings.width(), settings.height(), RGBColor::ZERO);

    film.buffer
        .par_chunks_mut(settings.width())
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = sample_pixel(&tracer, &scene.camera, settings, x, y);
            }
            trace!("row {} done", y);
            on_row(y);
        });

    film
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::geometry::Sphere;
    use crate::material::Material;
    use crate::math::Vec3;
    use crate::scene::Light;

    fn single_sphere_scene() -> Scene {
        Scene::new(
            Camera::looking_down_z(Vec3::new(0.0, 0.0, 5.0), 4.0, 1.0),
            vec![Sphere::new(
                Vec3::ZERO,
                1.0,
                Material::new(
                    RGBColor::from(0.2),
                    RGBColor::from(0.6),
                    RGBColor::from(0.9),
                    50.0,
                    RGBColor::from(0.5),
                ),
            )],
            vec![Light::new(
                Vec3::new(0.0, 0.0, 10.0),
                RGBColor::from(0.8),
                RGBColor::from(0.8),
            )],
            RGBColor::from(0.3),
        )
    }

    fn empty_scene() -> Scene {
        Scene::new(
            Camera::looking_down_z(Vec3::new(0.0, 0.0, 5.0), 4.0, 1.0),
            vec![],
            vec![],
            RGBColor::from(0.3),
        )
    }

    #[test]
    fn test_center_hits_and_corner_misses() {
        let scene = single_sphere_scene();
        for background in [RGBColor::BLACK, RGBColor::new(0.5, 0.25, 0.125)] {
            let settings = RenderSettings::new(9, 9).unwrap().with_background(background);
            let film = render(&scene, &settings);

            assert_ne!(film.at(4, 4), background);
            assert!(film.at(4, 4).r > 0.0);
            for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
                assert_eq!(film.at(x, y), background, "corner {} {}", x, y);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = Scene::reference(0.5);
        let settings = RenderSettings::new(24, 12).unwrap();

        let first = render(&scene, &settings);
        let second = render(&scene, &settings);
        assert_eq!(first, second);

        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| render(&scene, &settings));
        assert_eq!(first, single);
    }

    #[test]
    fn test_empty_scene_is_background() {
        let scene = empty_scene();
        let settings = RenderSettings::new(1, 1).unwrap();
        assert_eq!(render(&scene, &settings).buffer, vec![RGBColor::BLACK]);

        let background = RGBColor::new(0.5, 0.25, 0.125);
        let settings = settings.with_background(background);
        assert_eq!(render(&scene, &settings).buffer, vec![background]);
    }

    #[test]
    fn test_reference_scene_shows_floor_and_balls() {
        let scene = Scene::reference(0.5);
        let settings = RenderSettings::new(40, 20).unwrap();
        let film = render(&scene, &settings);

        assert_eq!(film.buffer.len(), 40 * 20);
        // the floor fills the bottom rows
        let floor = film.at(20, 19);
        assert!(floor.r > 0.0 && floor.g > 0.0 && floor.b > 0.0, "{:?}", floor);
        for pixel in film.buffer.iter() {
            for channel in [pixel.r, pixel.g, pixel.b] {
                assert!((0.0..=255.0).contains(&channel), "{:?}", pixel);
            }
        }
    }

    #[test]
    fn test_row_callback() {
        let scene = empty_scene();
        let settings = RenderSettings::new(3, 7).unwrap();
        let rows = AtomicUsize::new(0);
        render_with(&scene, &settings, |_| {
            rows.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(rows.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_sample_pixel_averages_samples() {
        let scene = empty_scene();
        let background = RGBColor::new(0.5, 0.5, 0.5);
        let settings = RenderSettings::new(2, 2).unwrap().with_background(background);
        let tracer = Tracer::from_settings(&scene, &settings);
        for samples in 0..5 {
            let settings = settings.with_samples(samples);
            let color = sample_pixel(&tracer, &scene.camera, &settings, 1, 1);
            assert_eq!(color, background, "{} samples", samples);
        }
    }
}

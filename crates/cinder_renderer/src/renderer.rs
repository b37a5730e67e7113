//! Frame driver.
//!
//! Iterates over every pixel, generates the camera ray, hands it to the
//! configured estimator and writes the result into the pixel buffer.
//! Pixels share no mutable state, so visitation order never changes the
//! output.

use crate::{
    Camera, Color, DirectLighting, GeometryQuery, Integrator, IntegratorKind, Material,
    PointLight, SeedPolicy, StochasticPath,
};

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Which estimator strategy evaluates camera rays
    pub integrator: IntegratorKind,
    /// Bounce cap for the stochastic path integrator
    pub max_bounces: u32,
    /// Background radiance for escaped paths
    pub background: Color,
    /// The scene's point light (direct-lighting estimator)
    pub light: PointLight,
    /// Seeding policy for per-path random sources
    pub seed: SeedPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorKind::StochasticPath,
            max_bounces: 8,
            background: Color::splat(0.5),
            light: PointLight::default(),
            seed: SeedPolicy::default(),
        }
    }
}

impl RenderConfig {
    /// Instantiate the configured estimator strategy.
    pub fn build_integrator(&self) -> Box<dyn Integrator> {
        match self.integrator {
            IntegratorKind::StochasticPath => {
                Box::new(StochasticPath::new(self.max_bounces, self.background))
            }
            IntegratorKind::DirectLighting => Box::new(DirectLighting::new(self.light)),
        }
    }
}

/// Simple image buffer for storing render output.
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black. Zero-sized images are a
    /// contract violation.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "zero-sized pixel buffer");
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render a single pixel.
///
/// Builds the per-path random source from the seeding policy, generates
/// the camera ray through the pixel center and evaluates the estimator.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    camera: &Camera,
    scene: &dyn GeometryQuery,
    materials: &[Material],
    integrator: &dyn Integrator,
    seed: SeedPolicy,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Color {
    let mut rng = seed.rng_for_pixel(x, y);
    let ray = camera.primary_ray(x, y, width, height);
    integrator.radiance(scene, materials, ray, &mut rng)
}

/// Render the entire frame sequentially.
///
/// This is the single-threaded baseline; see `render_parallel` for the
/// bucketed version.
pub fn render(
    camera: &Camera,
    scene: &dyn GeometryQuery,
    materials: &[Material],
    config: &RenderConfig,
    buffer: &mut PixelBuffer,
) {
    let integrator = config.build_integrator();

    log::info!(
        "rendering {}x{} with {:?}",
        buffer.width,
        buffer.height,
        config.integrator
    );
    let start = std::time::Instant::now();

    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let color = render_pixel(
                camera,
                scene,
                materials,
                integrator.as_ref(),
                config.seed,
                x,
                y,
                buffer.width,
                buffer.height,
            );
            buffer.set(x, y, color);
        }
    }

    log::info!("rendered in {:?}", start.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Hit;
    use crate::Ray;
    use cinder_math::{Interval, Vec3};

    struct EmptyScene;

    impl GeometryQuery for EmptyScene {
        fn intersect(&self, _ray: &Ray, _t: Interval) -> Option<Hit> {
            None
        }

        fn occluded(&self, _origin: Vec3, _direction: Vec3, _t: Interval) -> bool {
            false
        }

        fn shading_normal(&self, _hit: &Hit) -> Vec3 {
            Vec3::Y
        }
    }

    #[test]
    fn test_pixel_buffer_roundtrip() {
        let mut buffer = PixelBuffer::new(4, 3);

        buffer.set(2, 1, Color::new(1.0, 2.0, 3.0));

        assert_eq!(buffer.get(2, 1), Color::new(1.0, 2.0, 3.0));
        assert_eq!(buffer.get(0, 0), Color::ZERO);
    }

    #[test]
    #[should_panic(expected = "zero-sized")]
    fn test_zero_sized_buffer_panics() {
        let _ = PixelBuffer::new(0, 16);
    }

    #[test]
    fn test_empty_scene_renders_flat_background() {
        let camera = Camera::new();
        let config = RenderConfig::default();
        let mut buffer = PixelBuffer::new(8, 6);

        render(&camera, &EmptyScene, &[], &config, &mut buffer);

        for y in 0..buffer.height {
            for x in 0..buffer.width {
                assert_eq!(buffer.get(x, y), config.background);
            }
        }
    }

    #[test]
    fn test_direct_lighting_config_renders_black_on_empty_scene() {
        let camera = Camera::new();
        let config = RenderConfig {
            integrator: IntegratorKind::DirectLighting,
            ..Default::default()
        };
        let mut buffer = PixelBuffer::new(4, 4);

        render(&camera, &EmptyScene, &[], &config, &mut buffer);

        assert_eq!(buffer.get(0, 0), Color::ZERO);
        assert_eq!(buffer.get(3, 3), Color::ZERO);
    }
}

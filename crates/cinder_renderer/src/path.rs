//! Multi-bounce stochastic path integrator.

use crate::sampler::gen_f32;
use crate::sampling::{cosine_sample_hemisphere, safe_normal};
use crate::{Color, GeometryQuery, Integrator, Material, Ray};
use cinder_math::Interval;
use rand::RngCore;

/// Offset applied along the outgoing direction when respawning a bounce
/// ray, keeps it from re-hitting the surface it just left.
const SELF_INTERSECT_EPSILON: f32 = 3e-5;

/// Monte Carlo estimator that follows a ray through a fixed number of
/// diffuse bounces.
///
/// Each traced path carries an accumulated `color` and a throughput `mask`.
/// The accumulation order is deliberate and load-bearing: the running mask
/// is banked into `color` *before* the surface color and cosine term
/// modulate it (see `radiance`). The loop always runs to the bounce cap
/// while geometry keeps being hit; there is no early exit on a near-zero
/// mask.
#[derive(Debug, Clone, Copy)]
pub struct StochasticPath {
    /// Fixed bounce cap
    pub max_bounces: u32,
    /// Radiance assigned to rays that escape the scene
    pub background: Color,
}

impl StochasticPath {
    pub fn new(max_bounces: u32, background: Color) -> Self {
        Self {
            max_bounces,
            background,
        }
    }
}

impl Default for StochasticPath {
    /// Eight bounces against a flat gray background.
    fn default() -> Self {
        Self {
            max_bounces: 8,
            background: Color::splat(0.5),
        }
    }
}

impl Integrator for StochasticPath {
    fn radiance(
        &self,
        scene: &dyn GeometryQuery,
        materials: &[Material],
        ray: Ray,
        rng: &mut dyn RngCore,
    ) -> Color {
        let mut color = Color::ZERO;
        let mut mask = Color::ONE;
        let mut ray = ray;

        for _ in 0..self.max_bounces {
            let Some(hit) = scene.intersect(&ray, Interval::NONNEGATIVE) else {
                return color + mask * self.background;
            };

            let normal = safe_normal(scene.shading_normal(&hit));

            let u1 = gen_f32(rng);
            let u2 = gen_f32(rng);
            let new_dir = cosine_sample_hemisphere(normal, u1, u2);

            // The running throughput is banked before the surface modulates
            // it; the cosine term stays folded into the mask
            color += mask;
            mask *= materials[hit.surface as usize].base_color;
            mask *= new_dir.dot(normal);

            let hit_point = ray.at(hit.t);
            ray = Ray::new(hit_point + SELF_INTERSECT_EPSILON * new_dir, new_dir);
        }

        color
    }
}

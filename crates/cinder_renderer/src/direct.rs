//! Direct-lighting estimator for a single point light.

use crate::sampling::safe_normal;
use crate::{Color, GeometryQuery, Integrator, Material, PointLight, Ray};
use cinder_math::Interval;
use rand::RngCore;

/// Near-end of the shadow segment, in units of the unnormalized to-light
/// vector. Keeps the segment from re-hitting the shaded surface.
const SHADOW_EPSILON: f32 = 1e-3;

/// One-bounce estimator: shading plus a shadow test toward a fixed point
/// light. Does not recurse.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLighting {
    pub light: PointLight,
}

impl DirectLighting {
    pub fn new(light: PointLight) -> Self {
        Self { light }
    }
}

impl Integrator for DirectLighting {
    fn radiance(
        &self,
        scene: &dyn GeometryQuery,
        materials: &[Material],
        ray: Ray,
        _rng: &mut dyn RngCore,
    ) -> Color {
        let Some(hit) = scene.intersect(&ray, Interval::NONNEGATIVE) else {
            // Escaped rays see no light at all here
            return Color::ZERO;
        };

        let point = ray.at(hit.t);
        let to_light = self.light.to_light(point);
        let wi = to_light.normalize_or_zero();
        let normal = safe_normal(scene.shading_normal(&hit));

        let incident = self.light.incident(point);
        let brdf = materials[hit.surface as usize].brdf();
        let cos_theta = normal.dot(wi).max(0.0);

        // Shadow segment spans from just off the surface to the light
        // itself, parameterized over the unnormalized to-light vector
        let visibility = if scene.occluded(point, to_light, Interval::new(SHADOW_EPSILON, 1.0)) {
            0.0
        } else {
            1.0
        };

        incident * brdf * cos_theta * visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Hit;
    use cinder_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// One horizontal surface at y = 0, hit by any downward ray, with a
    /// switch that blocks the path to the light.
    struct FloorScene {
        blocked: bool,
    }

    impl GeometryQuery for FloorScene {
        fn intersect(&self, ray: &Ray, t: Interval) -> Option<Hit> {
            if ray.direction().y >= 0.0 {
                return None;
            }
            let hit_t = -ray.origin().y / ray.direction().y;
            t.surrounds(hit_t).then_some(Hit {
                t: hit_t,
                surface: 0,
                primitive: 0,
                u: 0.0,
                v: 0.0,
            })
        }

        fn occluded(&self, _origin: Vec3, _direction: Vec3, _t: Interval) -> bool {
            self.blocked
        }

        fn shading_normal(&self, _hit: &Hit) -> Vec3 {
            Vec3::Y
        }
    }

    fn downward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_lit_point_below_light_is_positive() {
        let materials = [Material::new(Color::splat(0.8))];
        let integrator = DirectLighting::default();
        let mut rng = StdRng::seed_from_u64(0);

        let scene = FloorScene { blocked: false };
        let color = integrator.radiance(&scene, &materials, downward_ray(), &mut rng);

        assert!(color.x > 0.0);
        assert!(color.y > 0.0);
        assert!(color.z > 0.0);
    }

    #[test]
    fn test_occluder_kills_the_contribution() {
        let materials = [Material::new(Color::splat(0.8))];
        let integrator = DirectLighting::default();
        let mut rng = StdRng::seed_from_u64(0);

        let scene = FloorScene { blocked: true };
        let color = integrator.radiance(&scene, &materials, downward_ray(), &mut rng);

        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_miss_returns_black() {
        let materials = [Material::new(Color::ONE)];
        let integrator = DirectLighting::default();
        let mut rng = StdRng::seed_from_u64(0);

        let scene = FloorScene { blocked: false };
        let upward = Ray::new(Vec3::ZERO, Vec3::Y);
        let color = integrator.radiance(&scene, &materials, upward, &mut rng);

        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_light_behind_surface_clamps_to_zero() {
        // Move the light below the floor; the clamped cosine zeroes the
        // contribution without going negative
        let light = PointLight::new(Vec3::new(0.0, -5.0, 0.0), Color::ONE);
        let materials = [Material::new(Color::splat(0.8))];
        let integrator = DirectLighting::new(light);
        let mut rng = StdRng::seed_from_u64(0);

        let scene = FloorScene { blocked: false };
        let color = integrator.radiance(&scene, &materials, downward_ray(), &mut rng);

        assert_eq!(color, Color::ZERO);
    }
}

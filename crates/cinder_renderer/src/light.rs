//! Point light source.

use crate::Color;
use cinder_math::Vec3;

/// Floor for the squared light distance, keeps the inverse-square falloff
/// finite when a hit point coincides with the light.
const MIN_DIST_SQUARED: f32 = 1e-12;

/// An isotropic point light with inverse-square falloff.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// World-space position of the light
    pub position: Vec3,
    /// Emitted power per channel
    pub power: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vec3, power: Color) -> Self {
        Self { position, power }
    }

    /// Vector from `point` to the light position.
    #[inline]
    pub fn to_light(&self, point: Vec3) -> Vec3 {
        self.position - point
    }

    /// Incident radiance arriving at `point`, before any visibility or
    /// cosine weighting.
    pub fn incident(&self, point: Vec3) -> Color {
        let dist_squared = self.to_light(point).length_squared().max(MIN_DIST_SQUARED);
        self.power / dist_squared
    }
}

impl Default for PointLight {
    /// Unit-power light just above the scene origin.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.4, 0.0),
            power: Color::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_square_falloff() {
        let light = PointLight::new(Vec3::ZERO, Color::ONE);

        let near = light.incident(Vec3::new(1.0, 0.0, 0.0));
        let far = light.incident(Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(near.x, 1.0);
        assert_eq!(far.x, 0.25);
    }

    #[test]
    fn test_coincident_point_stays_finite() {
        let light = PointLight::default();
        let incident = light.incident(light.position);

        assert!(incident.x.is_finite());
        assert!(incident.x > 0.0);
    }
}

//! Surface materials and the diffuse reflectance model.

use cinder_math::Vec3;
use std::f32::consts::PI;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Display-gamma exponent applied when decoding stored base colors.
const GAMMA: f32 = 2.2;

/// An ideal diffuse surface material.
///
/// Materials are immutable and live in a table ordered by surface
/// registration, so the surface id of a hit indexes its material directly.
/// Indexing with an unregistered surface id is a contract violation and
/// panics.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Stored base reflectance color, each channel in [0, 1]
    pub base_color: Color,
}

impl Material {
    /// Create a new material with the given base color.
    pub fn new(base_color: Color) -> Self {
        Self { base_color }
    }

    /// Evaluate the Lambertian BRDF for this material.
    ///
    /// The stored color is gamma-decoded per channel (exponent 2.2) and
    /// divided by pi, yielding energy-conserving diffuse reflectance.
    pub fn brdf(&self) -> Color {
        Color::new(
            self.base_color.x.powf(GAMMA),
            self.base_color.y.powf(GAMMA),
            self.base_color.z.powf(GAMMA),
        ) / PI
    }
}

//! Hemisphere sampling for diffuse bounces.

use cinder_math::{Onb, Vec3};
use std::f32::consts::TAU;

/// Map two uniform numbers in [0, 1) to a cosine-weighted direction in the
/// hemisphere around `normal` (unit length).
///
/// The polar angle comes from `u1`, the cosine-weighted elevation from
/// `u2`; directions near the normal are proportionally more likely, which
/// is the variance-reducing match for a Lambertian surface.
pub fn cosine_sample_hemisphere(normal: Vec3, u1: f32, u2: f32) -> Vec3 {
    let phi = TAU * u1;
    let r = u2.sqrt();

    let frame = Onb::from_normal(normal);
    frame
        .local(Vec3::new(phi.cos() * r, phi.sin() * r, (1.0 - u2).sqrt()))
        .normalize()
}

/// Normalize an interpolated shading normal.
///
/// Degenerate attribute data (near zero-length normals) falls back to
/// world-up; shading must always proceed to a pixel value.
pub fn safe_normal(n: Vec3) -> Vec3 {
    if n.length_squared() > 1e-12 {
        n.normalize()
    } else {
        Vec3::Y
    }
}

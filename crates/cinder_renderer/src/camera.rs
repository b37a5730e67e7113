//! Camera for primary ray generation.

use crate::Ray;
use cinder_math::{Affine3A, Vec3};

/// Pinhole camera with a fixed pose.
///
/// Maps integer pixel coordinates to world-space rays through the pixel
/// center. Generation is a pure function of pixel coordinates, image
/// resolution and the stored pose, so identical inputs always produce
/// bit-identical rays.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in degrees
    vfov: f32,
    /// Camera-to-world transform; rotation is identity in the default
    /// pose, only the translation varies
    camera_to_world: Affine3A,
}

impl Camera {
    /// Create a camera in the default pose.
    pub fn new() -> Self {
        Self {
            vfov: 34.5159,
            camera_to_world: Affine3A::from_translation(Vec3::new(0.0, 0.8, 4.5)),
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set the camera-to-world transform.
    pub fn with_transform(mut self, camera_to_world: Affine3A) -> Self {
        self.camera_to_world = camera_to_world;
        self
    }

    /// Generate the world-space ray through the center of pixel (x, y).
    ///
    /// `width` and `height` must be positive. The ray is meant to be
    /// intersected over [0, +inf).
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        debug_assert!(width > 0 && height > 0);

        let ndc_x = (x as f32 + 0.5) / width as f32;
        let ndc_y = (y as f32 + 0.5) / height as f32;

        let tan_half_fov = (self.vfov.to_radians() / 2.0).tan();
        let aspect = width as f32 / height as f32;

        // Pixel center on the view plane at z = -1
        let px = (2.0 * ndc_x - 1.0) * aspect * tan_half_fov;
        let py = (1.0 - 2.0 * ndc_y) * tan_half_fov;

        let origin = self.camera_to_world.transform_point3(Vec3::ZERO);
        let view_point = self
            .camera_to_world
            .transform_point3(Vec3::new(px, py, -1.0));

        Ray::new(origin, view_point - origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

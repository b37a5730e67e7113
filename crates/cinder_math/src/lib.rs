// Re-export glam for convenience
pub use glam::*;

// Cinder math types
mod interval;
mod onb;

pub use interval::Interval;
pub use onb::Onb;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_affine_translation() {
        let xform = Affine3A::from_translation(Vec3::new(0.0, 0.8, 4.5));
        let p = xform.transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(0.0, 0.8, 4.5));
    }
}

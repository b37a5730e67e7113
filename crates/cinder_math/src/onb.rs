//! Orthonormal basis around a surface normal.

use glam::Vec3;

/// A local orthonormal coordinate frame with `w` aligned to a unit normal.
///
/// Used to lift hemisphere sample directions from the canonical frame into
/// world space. The reference axis for building the tangents is world-up,
/// falling back to world-right when the normal is nearly parallel to up.
#[derive(Debug, Clone, Copy)]
pub struct Onb {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Onb {
    /// Build a frame around `normal`, which must be unit length.
    pub fn from_normal(normal: Vec3) -> Self {
        let w = normal;
        let reference = if w.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
        let u = reference.cross(w).normalize();
        let v = w.cross(u);
        Self { u, v, w }
    }

    /// Transform a direction from the local frame into world space.
    #[inline]
    pub fn local(&self, a: Vec3) -> Vec3 {
        a.x * self.u + a.y * self.v + a.z * self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(onb: &Onb) {
        assert!((onb.u.length() - 1.0).abs() < 1e-5);
        assert!((onb.v.length() - 1.0).abs() < 1e-5);
        assert!((onb.w.length() - 1.0).abs() < 1e-5);
        assert!(onb.u.dot(onb.v).abs() < 1e-5);
        assert!(onb.u.dot(onb.w).abs() < 1e-5);
        assert!(onb.v.dot(onb.w).abs() < 1e-5);
    }

    #[test]
    fn test_onb_orthonormal_for_generic_normal() {
        let n = Vec3::new(0.3, -0.4, 0.8).normalize();
        assert_orthonormal(&Onb::from_normal(n));
    }

    #[test]
    fn test_onb_survives_up_aligned_normal() {
        // Normal parallel to the default reference axis triggers the
        // world-right fallback
        let onb = Onb::from_normal(Vec3::Y);
        assert_orthonormal(&onb);
        assert_eq!(onb.w, Vec3::Y);

        let onb = Onb::from_normal(-Vec3::Y);
        assert_orthonormal(&onb);
    }

    #[test]
    fn test_onb_local_recovers_w() {
        let n = Vec3::new(0.0, 0.0, 1.0);
        let onb = Onb::from_normal(n);
        assert_eq!(onb.local(Vec3::new(0.0, 0.0, 1.0)), n);
    }
}

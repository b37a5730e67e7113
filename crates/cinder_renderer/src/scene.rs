//! Geometry query port.
//!
//! The integrators never walk geometry themselves; they consume a narrow
//! query interface backed by an already-built acceleration structure. The
//! scene is immutable during rendering, so the trait is `Send + Sync` and
//! queries may run concurrently from worker threads.

use crate::Ray;
use cinder_math::{Interval, Vec3};

/// Record of the nearest ray-surface intersection.
///
/// A `Hit` always refers to a registered surface; "no hit" is modeled as
/// `None` at the query boundary, never as a sentinel id.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Id of the hit surface, index-aligned with the material table
    pub surface: u32,
    /// Id of the hit primitive within the surface
    pub primitive: u32,
    /// Barycentric coordinates of the hit on the primitive
    pub u: f32,
    pub v: f32,
}

/// Nearest-hit, occlusion and attribute-interpolation queries against a
/// fully built scene.
pub trait GeometryQuery: Send + Sync {
    /// Find the nearest intersection of `ray` with the scene, restricted to
    /// ray parameters inside `t`.
    fn intersect(&self, ray: &Ray, t: Interval) -> Option<Hit>;

    /// Any-hit test over a bounded segment. The interval is expressed in
    /// units of `direction`, which need not be normalized.
    fn occluded(&self, origin: Vec3, direction: Vec3, t: Interval) -> bool;

    /// Interpolate the per-vertex shading normal at `hit`.
    ///
    /// The returned normal is not required to be unit length; callers
    /// normalize before shading.
    fn shading_normal(&self, hit: &Hit) -> Vec3;
}

//! Radiance estimator strategies.
//!
//! The frame driver is generic over how a camera ray turns into radiance.
//! Two strategies exist: the multi-bounce stochastic path integrator and
//! the single-light direct-lighting estimator. They are deliberately kept
//! as distinct, clearly named strategies; their behaviors differ and
//! neither subsumes the other.

use crate::{Color, GeometryQuery, Material, Ray};
use rand::RngCore;

/// A radiance estimator.
///
/// Implementations only read the scene and material table, so one
/// estimator instance may evaluate paths from many worker threads.
pub trait Integrator: Send + Sync {
    /// Evaluate the radiance arriving along `ray`.
    fn radiance(
        &self,
        scene: &dyn GeometryQuery,
        materials: &[Material],
        ray: Ray,
        rng: &mut dyn RngCore,
    ) -> Color;
}

/// Selectable estimator strategy for the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Multi-bounce stochastic path integrator
    StochasticPath,
    /// One-bounce point-light evaluation, no recursion
    DirectLighting,
}

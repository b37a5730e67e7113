//! Cinder renderer - CPU light transport.
//!
//! The computational core of an offline renderer: given a scene queryable
//! for ray intersections and a table of surface materials, it estimates
//! per-pixel radiance and writes it into a caller-owned pixel buffer.
//!
//! Scene construction, acceleration structures, display and image encoding
//! all live outside this crate; geometry is consumed through the
//! [`GeometryQuery`] port.

mod ray;
mod scene;
mod material;
mod light;
mod sampler;
mod sampling;
mod camera;
mod integrator;
mod path;
mod direct;
mod renderer;
mod bucket;

pub use ray::Ray;
pub use scene::{GeometryQuery, Hit};
pub use material::{Color, Material};
pub use light::PointLight;
pub use sampler::{gen_f32, SeedPolicy};
pub use sampling::{cosine_sample_hemisphere, safe_normal};
pub use camera::Camera;
pub use integrator::{Integrator, IntegratorKind};
pub use path::StochasticPath;
pub use direct::DirectLighting;
pub use renderer::{render, render_pixel, PixelBuffer, RenderConfig};
pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};

/// Re-export common math types from cinder_math
pub use cinder_math::{Affine3A, Interval, Onb, Vec3};

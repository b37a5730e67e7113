//! Bucket-based tile rendering.
//!
//! Divides the image into rectangular buckets that are rendered
//! independently and in parallel using rayon. Every bucket owns a disjoint
//! pixel region and every path's random source is derived from its pixel
//! coordinates, so the parallel output is identical to the sequential one.

use crate::renderer::render_pixel;
use crate::{
    Camera, Color, GeometryQuery, Integrator, Material, PixelBuffer, RenderConfig, SeedPolicy,
};
use rayon::prelude::*;

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Generate the grid of buckets covering a width x height image, in
/// scanline order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order within the bucket
    pub pixels: Vec<Color>,
}

/// Render a single bucket to a vector of colors.
#[allow(clippy::too_many_arguments)]
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &dyn GeometryQuery,
    materials: &[Material],
    integrator: &dyn Integrator,
    seed: SeedPolicy,
    image_width: u32,
    image_height: u32,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            let color = render_pixel(
                camera,
                scene,
                materials,
                integrator,
                seed,
                global_x,
                global_y,
                image_width,
                image_height,
            );
            pixels.push(color);
        }
    }

    pixels
}

/// Render the entire frame with one rayon task per bucket.
pub fn render_parallel(
    camera: &Camera,
    scene: &dyn GeometryQuery,
    materials: &[Material],
    config: &RenderConfig,
    buffer: &mut PixelBuffer,
) {
    let (width, height) = (buffer.width, buffer.height);
    let integrator = config.build_integrator();
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    log::info!(
        "rendering {}x{} with {:?} across {} buckets",
        width,
        height,
        config.integrator,
        buckets.len()
    );
    let start = std::time::Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(
                bucket,
                camera,
                scene,
                materials,
                integrator.as_ref(),
                config.seed,
                width,
                height,
            );
            log::debug!("bucket {} finished", bucket.index);
            BucketResult {
                bucket: *bucket,
                pixels,
            }
        })
        .collect();

    for result in &results {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                buffer.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    log::info!("rendered in {:?}", start.elapsed());
}

//! Render a small analytic sphere scene with both estimators.
//!
//! The renderer core only consumes the `GeometryQuery` port; this example
//! stands in for the external scene collaborator with a brute-force sphere
//! intersector and prints frame statistics instead of writing a file.

use cinder_renderer::{
    render_parallel, Camera, Color, GeometryQuery, Hit, IntegratorKind, Interval, Material,
    PixelBuffer, Ray, RenderConfig, Vec3,
};

/// A sphere in world space; its index doubles as the surface id.
struct Sphere {
    center: Vec3,
    radius: f32,
}

/// Brute-force sphere list implementing the geometry query port.
///
/// Shading normals are smuggled through the hit's barycentric slots: `u`
/// and `v` carry the world normal's x and z, the primitive id carries the
/// sign of y.
struct SphereScene {
    spheres: Vec<Sphere>,
}

impl SphereScene {
    fn hit_sphere(sphere: &Sphere, ray: &Ray, t: Interval) -> Option<f32> {
        let oc = sphere.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - sphere.radius * sphere.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let mut root = (h - sqrtd) / a;
        if !t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t.surrounds(root) {
                return None;
            }
        }
        Some(root)
    }
}

impl GeometryQuery for SphereScene {
    fn intersect(&self, ray: &Ray, t: Interval) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        let mut closest = t.max;

        for (index, sphere) in self.spheres.iter().enumerate() {
            let window = Interval::new(t.min, closest);
            if let Some(root) = Self::hit_sphere(sphere, ray, window) {
                closest = root;
                let normal = (ray.at(root) - sphere.center) / sphere.radius;
                nearest = Some(Hit {
                    t: root,
                    surface: index as u32,
                    primitive: u32::from(normal.y < 0.0),
                    u: normal.x,
                    v: normal.z,
                });
            }
        }

        nearest
    }

    fn occluded(&self, origin: Vec3, direction: Vec3, t: Interval) -> bool {
        let ray = Ray::new(origin, direction);
        self.spheres
            .iter()
            .any(|sphere| Self::hit_sphere(sphere, &ray, t).is_some())
    }

    fn shading_normal(&self, hit: &Hit) -> Vec3 {
        let y_squared = (1.0 - hit.u * hit.u - hit.v * hit.v).max(0.0);
        let sign = if hit.primitive == 0 { 1.0 } else { -1.0 };
        Vec3::new(hit.u, sign * y_squared.sqrt(), hit.v)
    }
}

fn mean_luminance(buffer: &PixelBuffer) -> f32 {
    let sum: f32 = buffer
        .pixels
        .iter()
        .map(|c| (c.x + c.y + c.z) / 3.0)
        .sum();
    sum / buffer.pixels.len() as f32
}

fn main() {
    env_logger::init();

    let scene = SphereScene {
        spheres: vec![
            // Ground
            Sphere {
                center: Vec3::new(0.0, -1000.0, 0.0),
                radius: 1000.0,
            },
            Sphere {
                center: Vec3::new(-0.6, 0.3, 0.0),
                radius: 0.3,
            },
            Sphere {
                center: Vec3::new(0.6, 0.4, 0.0),
                radius: 0.4,
            },
        ],
    };
    let materials = [
        Material::new(Color::splat(0.5)),
        Material::new(Color::new(0.8, 0.3, 0.2)),
        Material::new(Color::new(0.2, 0.4, 0.8)),
    ];

    let camera = Camera::new();
    let mut buffer = PixelBuffer::new(160, 120);

    let path_config = RenderConfig::default();
    render_parallel(&camera, &scene, &materials, &path_config, &mut buffer);
    println!(
        "stochastic path: {}x{} mean luminance {:.4}",
        buffer.width,
        buffer.height,
        mean_luminance(&buffer)
    );

    let direct_config = RenderConfig {
        integrator: IntegratorKind::DirectLighting,
        ..Default::default()
    };
    render_parallel(&camera, &scene, &materials, &direct_config, &mut buffer);
    println!(
        "direct lighting: {}x{} mean luminance {:.4}",
        buffer.width,
        buffer.height,
        mean_luminance(&buffer)
    );
}

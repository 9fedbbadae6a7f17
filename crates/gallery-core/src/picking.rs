use crate::camera::Camera;
use glam::{Vec2, Vec3, Vec4};

#[inline]
/// Compute a world-space ray from pixel coordinates inside the viewport.
///
/// - `viewport`: width/height in pixels
/// - `px`: pointer position in pixels, origin top-left
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(camera: &Camera, viewport: Vec2, px: Vec2) -> (Vec3, Vec3) {
    let width = viewport.x.max(1.0);
    let height = viewport.y.max(1.0);
    let ndc_x = (2.0 * px.x / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * px.y / height);
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the closest position hit by the ray, treating each as a sphere.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    positions: &[Vec3],
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, center) in positions.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

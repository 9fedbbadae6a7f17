// Host-side tests for screen rays and hit testing.

use gallery_core::picking::{pick_nearest, ray_sphere, screen_to_world_ray};
use gallery_core::Camera;
use glam::{Vec2, Vec3};

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!((t.unwrap() - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn center_pixel_looks_at_the_target() {
    let camera = Camera::default();
    let (ro, rd) = screen_to_world_ray(&camera, Vec2::new(800.0, 800.0), Vec2::new(400.0, 400.0));
    assert_eq!(ro, camera.eye);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn screen_axes_map_to_world_axes() {
    let camera = Camera::default();
    let viewport = Vec2::new(800.0, 800.0);
    let (_, right) = screen_to_world_ray(&camera, viewport, Vec2::new(700.0, 400.0));
    let (_, up) = screen_to_world_ray(&camera, viewport, Vec2::new(400.0, 100.0));
    assert!(right.x > 0.0);
    assert!(up.y > 0.0);
    assert!((right.length() - 1.0).abs() < 1e-5);
}

#[test]
fn nearest_hit_wins() {
    let positions = [
        Vec3::new(0.0, 0.0, -2.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(3.0, 0.0, 0.0),
    ];
    let hit = pick_nearest(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &positions, 0.35);
    assert_eq!(hit, Some(1));
    let miss = pick_nearest(Vec3::new(0.0, 5.0, 5.0), Vec3::NEG_Z, &positions, 0.35);
    assert_eq!(miss, None);
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::Z, &[], 1.0), None);
}

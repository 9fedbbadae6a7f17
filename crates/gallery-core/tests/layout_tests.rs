// Host-side tests for the point distributions.

use gallery_core::layout::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_vec_near(a: Vec3, b: Vec3, tol: f32) {
    assert!((a - b).length() <= tol, "expected {b:?}, got {a:?}");
}

#[test]
fn sphere_points_lie_on_the_radius() {
    for &radius in &[0.5_f32, 2.0, 10.0] {
        for count in 1..=64 {
            for (i, p) in generate_sphere_layout(count, radius).iter().enumerate() {
                let err = (p.length() - radius).abs();
                assert!(
                    err <= radius * 1e-5,
                    "count={count} radius={radius} i={i}: |p|={} ",
                    p.length()
                );
            }
        }
    }
}

#[test]
fn sphere_layout_is_deterministic() {
    let a = generate_sphere_layout(15, 2.0);
    let b = generate_sphere_layout(15, 2.0);
    assert_eq!(a, b);
}

#[test]
fn sphere_layout_first_item_sits_on_the_pole() {
    let positions = generate_sphere_layout(15, 2.0);
    assert_eq!(positions.len(), 15);
    assert_vec_near(positions[0], Vec3::new(0.0, 2.0, 0.0), 1e-6);
}

#[test]
fn sphere_layout_descends_from_the_pole() {
    let positions = generate_sphere_layout(32, 1.0);
    for pair in positions.windows(2) {
        assert!(pair[1].y < pair[0].y, "y should decrease monotonically");
    }
}

#[test]
fn sphere_layout_of_zero_is_empty() {
    assert!(generate_sphere_layout(0, 2.0).is_empty());
}

#[test]
fn scatter_stays_inside_its_box() {
    let radius = 2.0;
    let positions = generate_scatter_layout(500, radius);
    assert_eq!(positions.len(), 500);
    for p in positions {
        assert!(p.x.abs() <= 1.5 * radius);
        assert!(p.y.abs() <= 1.5 * radius);
        assert!(p.z.abs() <= 0.75 * radius);
    }
}

#[test]
fn seeded_scatter_is_reproducible() {
    let a = generate_scatter_layout_with(15, 2.0, &mut StdRng::seed_from_u64(7));
    let b = generate_scatter_layout_with(15, 2.0, &mut StdRng::seed_from_u64(7));
    let c = generate_scatter_layout_with(15, 2.0, &mut StdRng::seed_from_u64(8));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn grid_for_reference_count_runs_out_of_rings() {
    // 3 rows of 4, 5 and 4 points
    let positions = generate_grid_layout(15, 2.0);
    assert_eq!(positions.len(), 13);
    for p in &positions {
        assert!((p.length() - 2.0).abs() < 1e-5);
    }
    let s = std::f32::consts::FRAC_1_SQRT_2 * 2.0;
    assert_vec_near(positions[0], Vec3::new(s, s, 0.0), 1e-5);
}

#[test]
fn grid_truncates_the_last_ring() {
    // 2 rows of at least 3 points each, stopped after 4
    let positions = generate_grid_layout(4, 1.0);
    assert_eq!(positions.len(), 4);
    let first_ring_y = positions[0].y;
    assert!(positions[..3].iter().all(|p| (p.y - first_ring_y).abs() < 1e-6));
    assert!(positions[3].y < 0.0);
}

#[test]
fn grid_single_item_sits_on_the_equator() {
    let positions = generate_grid_layout(1, 3.0);
    assert_eq!(positions.len(), 1);
    assert_vec_near(positions[0], Vec3::new(3.0, 0.0, 0.0), 1e-5);
}

#[test]
fn grid_of_zero_is_empty() {
    assert!(generate_grid_layout(0, 2.0).is_empty());
}

#[test]
fn layout_kind_dispatches_to_generators() {
    assert_eq!(
        LayoutKind::Fibonacci.generate(9, 1.5),
        generate_sphere_layout(9, 1.5)
    );
    assert_eq!(LayoutKind::Grid.generate(9, 1.5), generate_grid_layout(9, 1.5));
    assert_eq!(LayoutKind::default(), LayoutKind::Fibonacci);
}

#[test]
fn spherical_to_cartesian_uses_y_up() {
    use std::f64::consts::FRAC_PI_2;
    assert_vec_near(spherical_to_cartesian(1.0, 0.0, 0.0), Vec3::Y, 1e-6);
    assert_vec_near(spherical_to_cartesian(1.0, 0.0, FRAC_PI_2), Vec3::X, 1e-6);
    assert_vec_near(spherical_to_cartesian(1.0, FRAC_PI_2, FRAC_PI_2), Vec3::Z, 1e-6);
}

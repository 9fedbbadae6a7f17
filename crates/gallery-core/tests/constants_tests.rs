// Host-side tests for constants and the defaults built from them.

use gallery_core::constants::*;
use gallery_core::{reference_catalog, GalleryConfig};
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SPHERE_RADIUS > 0.0);
    assert!(FOCUS_STAND_OFF > 0.0);
    assert!(TRANSITION_MS > 0);
    assert!(FORMATION_FULL_DISTANCE_PX > 0.0);
    assert!(FORMATION_DECAY_INTERVAL_MS > 0);
    assert!(FORMATION_DECAY_STEP > 0.0 && FORMATION_DECAY_STEP < 1.0);
    assert!((0.0..=1.0).contains(&ORBIT_DAMPING));

    // opacities
    assert!(NODE_OPACITY_DIMMED < NODE_OPACITY_IDLE);
    assert!(NODE_OPACITY_IDLE <= NODE_OPACITY_HOVERED);
    assert!(NODE_OPACITY_HOVERED <= 1.0);
    assert!(NODE_HOVER_SCALE > 1.0);

    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(HOME_EYE.length() > SPHERE_RADIUS + FOCUS_STAND_OFF);
    assert!(DELAUNAY_NEIGHBORS <= DELAUNAY_CANDIDATES);
    assert!(ORBIT_MIN_POLAR > 0.0);
}

#[test]
fn catalog_matches_the_item_count() {
    assert_eq!(reference_catalog().len(), MEDIA_COUNT);
}

#[test]
fn default_config_uses_the_constants() {
    let config = GalleryConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.radius, SPHERE_RADIUS);
    assert_eq!(config.transition.duration, Duration::from_millis(800));
    assert_eq!(config.transition.stand_off, 1.5);
    assert_eq!(config.formation.idle_grace, Duration::from_secs(5));
    assert_eq!(config.formation.decay_interval, Duration::from_millis(50));
    assert_eq!(config.camera.home_eye, HOME_EYE);
    assert!((config.camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

// Host-side tests for the view mode machine: selection, navigation and
// formation progress gating.

use gallery_core::{CameraCommand, FormationParams, ViewMode, ViewModeMachine};
use instant::Instant;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn machine(now: Instant) -> ViewModeMachine {
    ViewModeMachine::new(15, FormationParams::default(), now)
}

#[test]
fn starts_in_overview_with_nothing_selected() {
    let m = machine(Instant::now());
    assert_eq!(m.mode(), ViewMode::Overview);
    assert_eq!(m.selected(), None);
    assert_eq!(m.formation_progress(), 0.0);
}

#[test]
fn select_starts_a_transition_and_freezes_progress() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    m.pointer_moved(4000.0, 0.0, t0);
    assert!((m.formation_progress() - 0.4).abs() < 1e-6);

    assert_eq!(m.select(3), Some(CameraCommand::FocusOn(3)));
    assert_eq!(m.mode(), ViewMode::Transitioning);
    assert!(m.is_selected(3));

    m.pointer_moved(5000.0, 0.0, t0 + ms(10));
    m.advance(ms(20_000), t0 + ms(20_000));
    assert!((m.formation_progress() - 0.4).abs() < 1e-6);

    m.transition_complete(t0 + ms(800));
    assert_eq!(m.mode(), ViewMode::Focused);
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut m = machine(Instant::now());
    assert_eq!(m.select(15), None);
    assert_eq!(m.select(usize::MAX), None);
    assert_eq!(m.mode(), ViewMode::Overview);
    assert_eq!(m.selected(), None);
}

#[test]
fn reselecting_the_same_item_is_a_no_op() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    m.select(5);
    assert_eq!(m.select(5), None);
    m.transition_complete(t0);
    assert_eq!(m.select(5), None);
    assert_eq!(m.mode(), ViewMode::Focused);
}

#[test]
fn next_and_previous_need_a_selection() {
    let mut m = machine(Instant::now());
    assert_eq!(m.next(), None);
    assert_eq!(m.previous(), None);
    assert_eq!(m.mode(), ViewMode::Overview);
    assert_eq!(m.selected(), None);
}

#[test]
fn navigation_wraps_in_both_directions() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    m.select(14);
    m.transition_complete(t0);
    assert_eq!(m.next(), Some(CameraCommand::FocusOn(0)));
    assert_eq!(m.mode(), ViewMode::Transitioning);
    assert_eq!(m.previous(), Some(CameraCommand::FocusOn(14)));
    assert_eq!(m.previous(), Some(CameraCommand::FocusOn(13)));
}

#[test]
fn close_returns_home_once() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    assert_eq!(m.close(), None);

    m.select(2);
    m.transition_complete(t0);
    assert_eq!(m.close(), Some(CameraCommand::ReturnHome));
    assert_eq!(m.mode(), ViewMode::Transitioning);
    assert_eq!(m.selected(), None);
    assert_eq!(m.close(), None);

    m.transition_complete(t0 + ms(800));
    assert_eq!(m.mode(), ViewMode::Overview);
}

#[test]
fn close_while_focusing_deselects_immediately() {
    let mut m = machine(Instant::now());
    m.select(7);
    assert_eq!(m.close(), Some(CameraCommand::ReturnHome));
    assert_eq!(m.selected(), None);
    assert_eq!(m.mode(), ViewMode::Transitioning);
}

#[test]
fn idle_grace_restarts_when_the_overview_returns() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    m.pointer_moved(4000.0, 0.0, t0);
    m.select(1);
    m.transition_complete(t0 + ms(800));
    m.close();

    let back = t0 + ms(30_000);
    m.transition_complete(back);
    assert_eq!(m.mode(), ViewMode::Overview);

    m.advance(ms(4000), back + ms(4000));
    assert!((m.formation_progress() - 0.4).abs() < 1e-6);

    m.advance(ms(1000), back + ms(5000));
    m.advance(ms(100), back + ms(5100));
    assert!((m.formation_progress() - 0.38).abs() < 1e-5);
}

#[test]
fn orbit_interaction_holds_off_decay() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    m.pointer_moved(3000.0, 0.0, t0);
    m.orbit_interaction(t0 + ms(4500));
    m.advance(ms(5000), t0 + ms(5000));
    m.advance(ms(1000), t0 + ms(6000));
    assert!((m.formation_progress() - 0.3).abs() < 1e-6);
}

#[test]
fn item_count_changes_only_in_a_settled_overview() {
    let t0 = Instant::now();
    let mut m = machine(t0);
    assert!(m.set_item_count(13));
    assert_eq!(m.item_count(), 13);
    assert_eq!(m.select(13), None);

    m.select(12);
    assert!(!m.set_item_count(15));
    assert_eq!(m.item_count(), 13);
}

#[test]
fn completion_outside_a_transition_is_ignored() {
    let mut m = machine(Instant::now());
    m.transition_complete(Instant::now());
    assert_eq!(m.mode(), ViewMode::Overview);
}

#[test]
fn degenerate_formation_params_keep_progress_in_range() {
    let t0 = Instant::now();
    let params = FormationParams {
        full_distance_px: 0.0,
        decay_interval: Duration::ZERO,
        ..FormationParams::default()
    };
    let mut m = ViewModeMachine::new(15, params, t0);
    m.pointer_moved(0.0, 0.0, t0);
    assert_eq!(m.formation_progress(), 0.0);
    m.advance(ms(10_000), t0 + ms(10_000));
    assert_eq!(m.formation_progress(), 0.0);
}

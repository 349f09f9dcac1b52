// Host-side tests for raw input capture.

use vessel_core::input::*;
use vessel_core::*;

fn fresh() -> AnimationState {
    AnimationState::new(DyeState::for_viewport(Viewport::new(1000.0, 800.0)), 0.0)
}

#[test]
fn pointer_move_normalizes_to_unit_square() {
    let mut s = fresh();
    on_pointer_move(&mut s, 0.0, 800.0, Viewport::new(1000.0, 800.0));
    assert_eq!(s.pointer.px, -1.0);
    assert_eq!(s.pointer.py, 1.0);
    on_pointer_move(&mut s, 500.0, 400.0, Viewport::new(1000.0, 800.0));
    assert_eq!((s.pointer.px, s.pointer.py), (0.0, 0.0));
    assert_eq!((s.pointer.x, s.pointer.y), (500.0, 400.0));
}

#[test]
fn pointer_move_with_zero_viewport_stays_finite() {
    let mut s = fresh();
    on_pointer_move(&mut s, 3.0, 4.0, Viewport::new(0.0, 0.0));
    assert!(s.pointer.px.is_finite() && s.pointer.py.is_finite());
}

#[test]
fn pointer_move_bumps_intensity_up_to_one() {
    let mut s = fresh();
    on_pointer_move(&mut s, 1.0, 1.0, Viewport::new(10.0, 10.0));
    assert!((s.dye.intensity - POINTER_INTENSITY_STEP).abs() < 1e-6);
    for _ in 0..200 {
        on_pointer_move(&mut s, 1.0, 1.0, Viewport::new(10.0, 10.0));
    }
    assert_eq!(s.dye.intensity, 1.0);
}

#[test]
fn scroll_sets_target_only() {
    let mut s = fresh();
    on_scroll(&mut s, 640.0);
    assert_eq!(s.scroll.target, 640.0);
    assert_eq!(s.scroll.current(), 0.0);
    s.scroll.advance(SCROLL_DAMPING);
    assert!((s.scroll.current() - 640.0 * SCROLL_DAMPING).abs() < 1e-3);
}

#[test]
fn hover_enter_snaps_and_overrides() {
    let mut s = fresh();
    let hue = on_hover_enter(&mut s, "#00ff00").unwrap();
    assert_eq!(hue, 120.0);
    assert_eq!(s.dye.hue, 120.0);
    assert_eq!(s.hue_source, HueSource::Override(120.0));
    on_hover_leave(&mut s);
    assert_eq!(s.hue_source, HueSource::ScrollRamp);
    // leaving does not move the hue by itself
    assert_eq!(s.dye.hue, 120.0);
}

#[test]
fn hover_with_bad_swatch_leaves_state_alone() {
    let mut s = fresh();
    let before = s.dye;
    assert!(on_hover_enter(&mut s, "teal").is_err());
    assert_eq!(s.dye, before);
    assert_eq!(s.hue_source, HueSource::ScrollRamp);
}

#[test]
fn new_state_parks_pointer_under_dye() {
    let s = fresh();
    assert_eq!(s.pointer.x, 500.0);
    assert_eq!(s.pointer.y, 360.0);
    assert_eq!(s.scroll.current(), s.scroll.target);
}

#[test]
fn pointer_alone_saturates_within_56_moves() {
    let mut s = fresh();
    let vp = Viewport::new(100.0, 100.0);
    let mut last = s.dye.intensity;
    for _ in 0..56 {
        on_pointer_move(&mut s, 50.0, 50.0, vp);
        assert!(s.dye.intensity >= last);
        last = s.dye.intensity;
    }
    assert_eq!(s.dye.intensity, 1.0);
}

#[test]
fn hover_with_signed_swatch_leaves_state_alone() {
    let mut s = fresh();
    let before = s.dye;
    assert!(on_hover_enter(&mut s, "+f+f+f").is_err());
    assert_eq!(s.dye, before);
    assert_eq!(s.hue_source, HueSource::ScrollRamp);
}

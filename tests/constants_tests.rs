// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use vessel_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_rates_are_fractions() {
    for rate in [DYE_FOLLOW_RATE, SCROLL_DAMPING, HUE_EASE_RATE] {
        assert!(rate > 0.0 && rate < 1.0);
    }
    assert!(POINTER_INTENSITY_STEP > 0.0 && POINTER_INTENSITY_STEP < 1.0);
    assert!(SCROLL_INTENSITY_FLOOR > 0.0 && SCROLL_INTENSITY_FLOOR <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hue_ramp_is_in_range() {
    assert!(HUE_STOPS.len() >= 2);
    assert!(HUE_STOPS.iter().all(|h| (0.0..360.0).contains(h)));
    assert_eq!(HUE_STOPS[0], DEFAULT_HUE);
    assert!(RAMP_PROGRESS_MAX < 1.0 && RAMP_PROGRESS_MAX > 0.99);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dye_gradient_fits_its_canvas() {
    assert!(DYE_RADIUS_BASE > 0.0);
    assert!(DYE_RADIUS_BASE + DYE_RADIUS_SPAN <= 1.0);
    assert!(DYE_MID_STOP > 0.0 && DYE_MID_STOP < 1.0);
    assert!((0.0..=1.0).contains(&DEFAULT_DYE_X_FRAC));
    assert!((0.0..=1.0).contains(&DEFAULT_DYE_Y_FRAC));
    assert!(TINT_ALPHA > 0.0 && TINT_ALPHA < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_vessel() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 90.0);
    // the vessel sits around the origin, well inside the view distance
    assert!(CAMERA_EYE[2] > CAMERA_NEAR && CAMERA_EYE[2] < CAMERA_FAR);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(FLOOR_Y < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn materials_are_valid_colors() {
    for c in VESSEL_COLOR.iter().chain(FLOOR_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    assert!(FLOOR_COLOR[3] < 1.0);
    assert_eq!(VESSEL_COLOR[3], 1.0);
    assert!((0.0..=1.0).contains(&VESSEL_ROUGHNESS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rail_and_page_contract() {
    assert!(RAIL_WHEEL_FACTOR > 0.0);
    assert!(RAIL_PAGE_FRACTION > 0.0 && RAIL_PAGE_FRACTION <= 1.0);
    assert!(ACCENT_VAR.starts_with("--") && TINT_VAR.starts_with("--"));
    assert!(!DYE_STORAGE_KEY.is_empty());
    assert!(DEFAULT_PARALLAX_DEPTH > 0.0);
}

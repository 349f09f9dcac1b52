// Host-side tests for hue derivation and blending.

use vessel_core::*;

fn state_with_hue(hue: f32) -> AnimationState {
    AnimationState::new(
        DyeState {
            intensity: 0.0,
            x: 0.0,
            y: 0.0,
            hue,
        },
        0.0,
    )
}

#[test]
fn color_to_hue_primaries() {
    assert_eq!(color_to_hue("#ff0000"), Ok(0.0));
    assert_eq!(color_to_hue("#00ff00"), Ok(120.0));
    assert_eq!(color_to_hue("#0000ff"), Ok(240.0));
    // magenta lands on a negative sector and must wrap
    assert_eq!(color_to_hue("#ff00ff"), Ok(300.0));
}

#[test]
fn color_to_hue_accepts_missing_hash_and_whitespace() {
    assert_eq!(color_to_hue("00ff00"), Ok(120.0));
    assert_eq!(color_to_hue("  #0000FF "), Ok(240.0));
}

#[test]
fn color_to_hue_grey_is_zero() {
    assert_eq!(color_to_hue("#808080"), Ok(0.0));
}

#[test]
fn color_to_hue_rejects_bad_swatches() {
    assert_eq!(color_to_hue(""), Err(SwatchError::Empty));
    assert_eq!(color_to_hue("   "), Err(SwatchError::Empty));
    assert!(matches!(color_to_hue("#fff"), Err(SwatchError::Malformed(_))));
    assert!(matches!(color_to_hue("#gg0000"), Err(SwatchError::Malformed(_))));
    assert!(matches!(color_to_hue("#ff00ff00"), Err(SwatchError::Malformed(_))));
    assert!(matches!(color_to_hue("rgb(1,2,3)"), Err(SwatchError::Malformed(_))));
    // signs are not hex digits
    assert!(matches!(color_to_hue("#+f0000"), Err(SwatchError::Malformed(_))));
    assert!(matches!(color_to_hue("+f+f+f"), Err(SwatchError::Malformed(_))));
    assert!(matches!(color_to_hue("#-10000"), Err(SwatchError::Malformed(_))));
}

#[test]
fn normalize_hue_wraps_into_range() {
    assert_eq!(normalize_hue(-30.0), 330.0);
    assert_eq!(normalize_hue(720.0), 0.0);
    assert_eq!(normalize_hue(359.5), 359.5);
    assert_eq!(normalize_hue(f32::NAN), 0.0);
    assert_eq!(normalize_hue(f32::INFINITY), 0.0);
    let tiny = normalize_hue(-1e-7);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn scroll_progress_is_clamped() {
    assert!((scroll_progress(500.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_progress(0.0, 0.0), 0.0);
    assert_eq!(scroll_progress(2000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-50.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f32::NAN, 1000.0), 0.0);
    // page shorter than the viewport: height floors at 1
    assert_eq!(scroll_progress(0.5, -300.0), 0.5);
}

#[test]
fn scroll_hue_interpolates_between_stops() {
    assert_eq!(scroll_hue(&HUE_STOPS, 0.0), 210.0);
    assert!((scroll_hue(&HUE_STOPS, 0.5) - 105.5).abs() < 1e-3);
    // the end of the page stays inside the last segment
    let end = scroll_hue(&HUE_STOPS, 1.0);
    assert!((end - 230.0).abs() < 0.1, "end hue {end}");
    assert_eq!(scroll_hue(&HUE_STOPS, -1.0), 210.0);
}

#[test]
fn scroll_hue_degenerate_ramps() {
    assert_eq!(scroll_hue(&[], 0.4), DEFAULT_HUE);
    assert_eq!(scroll_hue(&[42.0], 0.4), 42.0);
}

#[test]
fn time_of_day_accent_bands() {
    let hue = |h| time_of_day_accent(h).hue;
    assert_eq!(hue(0), 230.0);
    assert_eq!(hue(4), 230.0);
    assert_eq!(hue(5), 215.0);
    assert_eq!(hue(10), 215.0);
    assert_eq!(hue(11), 186.0);
    assert_eq!(hue(16), 186.0);
    assert_eq!(hue(17), 25.0);
    assert_eq!(hue(20), 25.0);
    assert_eq!(hue(21), 230.0);
    assert_eq!(hue(23), 230.0);
    assert_eq!(time_of_day_accent(12).color, "#35c8d2");
}

#[test]
fn ambient_css_formats() {
    assert_eq!(accent_css(209.6), "hsl(210 64% 58%)");
    assert_eq!(tint_css(210.0), "hsla(210.00, 52%, 74%, 0.18)");
    let style = AmbientStyle::from_swatch(" #35c8d2", 184.0);
    assert_eq!(style.accent, "#35c8d2");
    assert_eq!(style.tint, tint_css(184.0));
}

#[test]
fn blender_rejects_bad_ramps() {
    assert_eq!(
        ColorBlender::new(&[10.0]).unwrap_err(),
        BlendError::TooFewStops(1)
    );
    assert_eq!(
        ColorBlender::new(&[0.0, 400.0]).unwrap_err(),
        BlendError::StopOutOfRange {
            index: 1,
            value: 400.0
        }
    );
    assert!(ColorBlender::new(&[0.0, 359.0]).is_ok());
}

#[test]
fn override_beats_scroll_ramp() {
    let blender = ColorBlender::default();
    assert_eq!(blender.target_hue(HueSource::Override(42.0), 0.5), 42.0);
    assert_eq!(
        blender.target_hue(HueSource::ScrollRamp, 0.5),
        blender.ramp_hue(0.5)
    );
}

#[test]
fn blend_eases_toward_target() {
    let blender = ColorBlender::default();
    let mut state = state_with_hue(210.0);
    state.hue_source = HueSource::Override(110.0);
    blender.blend(&mut state, 0.0);
    assert!((state.dye.hue - 202.0).abs() < 1e-4);
    for _ in 0..400 {
        blender.blend(&mut state, 0.0);
    }
    assert!((state.dye.hue - 110.0).abs() < 0.01);
}

#[test]
fn blend_holds_at_rest() {
    let blender = ColorBlender::default();
    let mut state = state_with_hue(210.0);
    blender.blend(&mut state, 0.0);
    assert_eq!(state.dye.hue, 210.0);
    assert_eq!(state.dye.intensity, 0.0);
}

#[test]
fn blend_raises_intensity_floor_only() {
    let blender = ColorBlender::default();
    let mut state = state_with_hue(210.0);
    state.dye.intensity = 0.1;
    blender.blend(&mut state, 0.5);
    assert!((state.dye.intensity - 0.45).abs() < 1e-6);
    // scrolling back up never lowers it
    blender.blend(&mut state, 0.0);
    assert!((state.dye.intensity - 0.45).abs() < 1e-6);
    state.dye.intensity = 0.99;
    blender.blend(&mut state, 1.0);
    assert!(state.dye.intensity <= 1.0);
}

#[test]
fn hue_stays_in_range_for_any_progress_sequence() {
    let blender = ColorBlender::default();
    let mut state = state_with_hue(359.9);
    for i in 0..2000 {
        // wander back and forth, including out-of-range samples
        let p = ((i as f32 * 0.37).sin() * 1.3).clamp(-0.2, 1.2);
        blender.blend(&mut state, scroll_progress(p * 1000.0, 1000.0));
        assert!((0.0..360.0).contains(&state.dye.hue), "hue {}", state.dye.hue);
    }
}

#[test]
fn hover_leave_error_decays_geometrically() {
    let blender = ColorBlender::default();
    let mut state = state_with_hue(210.0);
    vessel_core::input::on_hover_enter(&mut state, "#00ff00").unwrap();
    vessel_core::input::on_hover_leave(&mut state);
    let e0 = 210.0 - state.dye.hue;
    for n in 1..=10 {
        blender.blend(&mut state, 0.0);
        let expected = e0 * (1.0 - HUE_EASE_RATE).powi(n);
        assert!((210.0 - state.dye.hue - expected).abs() < 1e-3);
    }
}

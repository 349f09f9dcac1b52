//! Raw input capture.
//!
//! These functions only record samples; derived values (smoothed scroll,
//! blended hue, eased dye position) are produced by the frame loop.

use crate::color::{color_to_hue, SwatchError};
use crate::constants::POINTER_INTENSITY_STEP;
use crate::state::{AnimationState, HueSource, Viewport};

/// Record a pointer position and bump the dye intensity.
pub fn on_pointer_move(state: &mut AnimationState, x: f32, y: f32, viewport: Viewport) {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    state.pointer.x = x;
    state.pointer.y = y;
    state.pointer.px = (x / w) * 2.0 - 1.0;
    state.pointer.py = (y / h) * 2.0 - 1.0;
    state.dye.intensity = (state.dye.intensity + POINTER_INTENSITY_STEP).min(1.0);
}

#[inline]
pub fn on_scroll(state: &mut AnimationState, offset: f32) {
    state.scroll.target = offset;
}

/// Snap the hue to a hovered swatch and hold it there until the hover ends.
///
/// On error the state is left untouched.
pub fn on_hover_enter(state: &mut AnimationState, swatch: &str) -> Result<f32, SwatchError> {
    let hue = color_to_hue(swatch)?;
    state.dye.hue = hue;
    state.hue_source = HueSource::Override(hue);
    Ok(hue)
}

#[inline]
pub fn on_hover_leave(state: &mut AnimationState) {
    state.hue_source = HueSource::ScrollRamp;
}

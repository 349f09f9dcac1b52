//! The dye field: a pointer-following radial gradient.

use crate::color::AmbientStyle;
use crate::constants::*;
use crate::state::{ease_to, AnimationState, DyeState};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: String,
}

/// Everything a 2D surface needs to paint one frame of the dye.
#[derive(Clone, Debug, PartialEq)]
pub struct DyeGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: [GradientStop; 3],
}

/// Ease the dye center toward the latest pointer sample.
pub fn follow_pointer(state: &mut AnimationState, rate: f32) {
    state.dye.x = ease_to(state.dye.x, state.pointer.x, rate);
    state.dye.y = ease_to(state.dye.y, state.pointer.y, rate);
}

pub fn dye_radius(intensity: f32, width: f32, height: f32) -> f32 {
    width.max(height) * (DYE_RADIUS_BASE + intensity * DYE_RADIUS_SPAN)
}

pub fn dye_gradient(dye: &DyeState, width: f32, height: f32) -> DyeGradient {
    let hue = dye.hue;
    let i = dye.intensity;
    DyeGradient {
        center: Vec2::new(dye.x, dye.y),
        radius: dye_radius(i, width, height),
        stops: [
            GradientStop {
                offset: 0.0,
                color: format!("hsla({:.2}, 72%, 60%, {:.4})", hue, 0.09 + i * 0.14),
            },
            GradientStop {
                offset: DYE_MID_STOP,
                color: format!("hsla({:.2}, 64%, 70%, {:.4})", hue, 0.05 + i * 0.1),
            },
            GradientStop {
                offset: 1.0,
                color: format!("hsla({:.2}, 70%, 80%, 0)", hue),
            },
        ],
    }
}

/// Vertical parallax shift for an element at `depth`.
#[inline]
pub fn parallax_offset(scroll_current: f32, depth: f32) -> f32 {
    -(scroll_current * depth)
}

/// Side effects the frame loop performs on the surrounding page.
pub trait PageHost {
    /// Scrollable height of the document (content height minus viewport).
    fn scrollable_height(&self) -> f32;
    /// Backing size of the dye canvas, or `None` when the page has none.
    fn dye_surface_size(&self) -> Option<(f32, f32)>;
    fn paint_dye(&mut self, gradient: &DyeGradient);
    fn publish_ambient(&mut self, style: &AmbientStyle);
    fn apply_parallax(&mut self, scroll_current: f32);
    /// Re-measure surfaces after a viewport change.
    fn resize(&mut self);
}

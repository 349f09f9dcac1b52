//! Per-page animation state.
//!
//! Everything the frame loop mutates lives in [`AnimationState`], which is
//! owned by the scheduler and lent to components by `&mut`. None of these
//! types reference platform APIs, so the whole state machine runs on the host
//! in tests.

use crate::constants::{DEFAULT_DYE_X_FRAC, DEFAULT_DYE_Y_FRAC, DEFAULT_HUE};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Latest raw pointer sample plus its projection into `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub px: f32,
    pub py: f32,
}

/// Smoothed page scroll.
///
/// `current` has no setter: it only moves through [`ScrollState::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    current: f32,
    pub target: f32,
}

impl ScrollState {
    /// Start at rest at `offset`.
    pub fn at(offset: f32) -> Self {
        Self {
            current: offset,
            target: offset,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Move `current` a `rate` fraction of the way toward `target`.
    pub fn advance(&mut self, rate: f32) {
        self.current = ease_to(self.current, self.target, rate);
    }
}

/// The ambient glow: where it sits, what hue it is and how strong.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DyeState {
    pub intensity: f32,
    pub x: f32,
    pub y: f32,
    pub hue: f32,
}

impl DyeState {
    /// Defaults for a page of the given size.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            intensity: 0.0,
            x: viewport.width * DEFAULT_DYE_X_FRAC,
            y: viewport.height * DEFAULT_DYE_Y_FRAC,
            hue: DEFAULT_HUE,
        }
    }
}

/// Which signal drives the target hue.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HueSource {
    #[default]
    ScrollRamp,
    Override(f32),
}

#[derive(Clone, Debug)]
pub struct AnimationState {
    pub pointer: PointerSample,
    pub scroll: ScrollState,
    pub dye: DyeState,
    pub hue_source: HueSource,
    /// Scroll progress derived during the last frame, in `[0, 1]`.
    pub scroll_progress: f32,
}

impl AnimationState {
    /// Fresh state around a (possibly restored) dye, with the pointer parked
    /// under the dye center and the scroll at rest.
    pub fn new(dye: DyeState, scroll_offset: f32) -> Self {
        Self {
            pointer: PointerSample {
                x: dye.x,
                y: dye.y,
                px: 0.0,
                py: 0.0,
            },
            scroll: ScrollState::at(scroll_offset),
            dye,
            hue_source: HueSource::ScrollRamp,
            scroll_progress: 0.0,
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track a resized mount. Degenerate sizes keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }
}

/// `current + (target - current) * rate`.
#[inline]
pub fn ease_to(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

//! Hue and intensity blending.
//!
//! Three signals feed the dye color: the time of day (a one-off seed at
//! startup), the scroll position (a piecewise-linear hue ramp) and hover
//! swatches (an override that wins while the hover lasts). The blender eases
//! the live hue toward whichever target currently has precedence.

use crate::constants::*;
use crate::state::{ease_to, AnimationState, HueSource};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SwatchError {
    #[error("swatch is empty")]
    Empty,
    #[error("swatch `{0}` is not a six-digit hex color")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum BlendError {
    #[error("a hue ramp needs at least two stops (got {0})")]
    TooFewStops(usize),
    #[error("hue stop {index} is outside [0, 360): {value}")]
    StopOutOfRange { index: usize, value: f32 },
}

/// Accent seeded from the visitor's local hour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAccent {
    pub color: &'static str,
    pub hue: f32,
}

pub fn time_of_day_accent(hour: u32) -> TimeAccent {
    match hour {
        5..=10 => TimeAccent {
            color: "#5b8def",
            hue: 215.0,
        },
        11..=16 => TimeAccent {
            color: "#35c8d2",
            hue: 186.0,
        },
        17..=20 => TimeAccent {
            color: "#f09a57",
            hue: 25.0,
        },
        _ => TimeAccent {
            color: "#4458b8",
            hue: 230.0,
        },
    }
}

/// Wrap any finite angle into `[0, 360)`. Non-finite input maps to 0.
#[inline]
pub fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Fraction of the scrollable page that has been scrolled, in `[0, 1]`.
#[inline]
pub fn scroll_progress(scroll_current: f32, scrollable_height: f32) -> f32 {
    let max = scrollable_height.max(1.0);
    let p = scroll_current / max;
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Piecewise-linear hue across `stops` at `progress`.
pub fn scroll_hue(stops: &[f32], progress: f32) -> f32 {
    match stops.len() {
        0 => return DEFAULT_HUE,
        1 => return stops[0],
        _ => {}
    }
    let progress = if progress.is_finite() { progress } else { 0.0 };
    let segments = (stops.len() - 1) as f32;
    let scaled = progress.clamp(0.0, RAMP_PROGRESS_MAX) * segments;
    let seg = scaled.floor();
    let local = scaled - seg;
    let seg = seg as usize;
    let start = stops[seg];
    let end = stops[(seg + 1).min(stops.len() - 1)];
    start + (end - start) * local
}

/// Hue in whole degrees of a `#rrggbb` swatch (leading `#` optional).
pub fn color_to_hue(swatch: &str) -> Result<f32, SwatchError> {
    let trimmed = swatch.trim();
    if trimmed.is_empty() {
        return Err(SwatchError::Empty);
    }
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let malformed = || SwatchError::Malformed(swatch.to_string());
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| malformed())
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let mut h = 0.0;
    if d != 0.0 {
        h = if max == r {
            ((g - b) / d) % 6.0
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
    }
    Ok(normalize_hue((h * 60.0).round()))
}

/// The two page-wide styling values derived from the dye hue.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientStyle {
    pub accent: String,
    pub tint: String,
}

impl AmbientStyle {
    pub fn from_hue(hue: f32) -> Self {
        Self {
            accent: accent_css(hue),
            tint: tint_css(hue),
        }
    }

    /// Accent pinned to a hovered swatch, tint following its hue.
    pub fn from_swatch(swatch: &str, hue: f32) -> Self {
        Self {
            accent: swatch.trim().to_string(),
            tint: tint_css(hue),
        }
    }
}

pub fn accent_css(hue: f32) -> String {
    format!(
        "hsl({} {}% {}%)",
        hue.round() as i32,
        ACCENT_SATURATION,
        ACCENT_LIGHTNESS
    )
}

pub fn tint_css(hue: f32) -> String {
    format!(
        "hsla({:.2}, {}%, {}%, {})",
        hue, TINT_SATURATION, TINT_LIGHTNESS, TINT_ALPHA
    )
}

#[derive(Clone, Debug)]
pub struct ColorBlender {
    stops: Vec<f32>,
}

impl Default for ColorBlender {
    fn default() -> Self {
        Self {
            stops: HUE_STOPS.to_vec(),
        }
    }
}

impl ColorBlender {
    pub fn new(stops: &[f32]) -> Result<Self, BlendError> {
        if stops.len() < 2 {
            return Err(BlendError::TooFewStops(stops.len()));
        }
        if let Some((index, &value)) = stops
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0 || **v >= 360.0)
        {
            return Err(BlendError::StopOutOfRange { index, value });
        }
        Ok(Self {
            stops: stops.to_vec(),
        })
    }

    pub fn ramp_hue(&self, progress: f32) -> f32 {
        scroll_hue(&self.stops, progress)
    }

    /// Override wins over the ramp.
    pub fn target_hue(&self, source: HueSource, progress: f32) -> f32 {
        match source {
            HueSource::Override(hue) => hue,
            HueSource::ScrollRamp => self.ramp_hue(progress),
        }
    }

    /// One frame of blending: ease the hue, then raise the intensity floor.
    pub fn blend(&self, state: &mut AnimationState, progress: f32) {
        let target = self.target_hue(state.hue_source, progress);
        let dye = &mut state.dye;
        dye.hue = normalize_hue(ease_to(dye.hue, target, HUE_EASE_RATE));
        dye.intensity = dye
            .intensity
            .max(progress * SCROLL_INTENSITY_FLOOR)
            .min(1.0);
    }
}

// Shared tuning constants for the dye field and the vessel. Rates are per frame.

// Easing
pub const DYE_FOLLOW_RATE: f32 = 0.06; // dye center chases the pointer
pub const SCROLL_DAMPING: f32 = 0.11; // smoothed scroll chases the scroll target
pub const HUE_EASE_RATE: f32 = 0.08; // blended hue chases its target

// Intensity
pub const POINTER_INTENSITY_STEP: f32 = 0.018; // added per pointer move event
pub const SCROLL_INTENSITY_FLOOR: f32 = 0.9; // floor = progress * this

// Hue ramp across the page: dawn, day, evening, night
pub const HUE_STOPS: [f32; 4] = [210.0, 186.0, 25.0, 230.0];
pub const RAMP_PROGRESS_MAX: f32 = 0.9999; // keeps the last segment index in range

// Dye state defaults (fractions of the viewport)
pub const DEFAULT_HUE: f32 = 210.0;
pub const DEFAULT_DYE_X_FRAC: f32 = 0.5;
pub const DEFAULT_DYE_Y_FRAC: f32 = 0.45;

// Dye gradient
pub const DYE_RADIUS_BASE: f32 = 0.28; // of max(canvas w, h)
pub const DYE_RADIUS_SPAN: f32 = 0.62; // extra radius at full intensity
pub const DYE_MID_STOP: f32 = 0.55;

// Ambient styling variables
pub const ACCENT_SATURATION: f32 = 64.0;
pub const ACCENT_LIGHTNESS: f32 = 58.0;
pub const TINT_SATURATION: f32 = 52.0;
pub const TINT_LIGHTNESS: f32 = 74.0;
pub const TINT_ALPHA: f32 = 0.18;

// Parallax
pub const DEFAULT_PARALLAX_DEPTH: f32 = 0.08; // when an element has no data-depth

// Vessel profile
pub const PROFILE_POINTS: usize = 41;
pub const LATHE_SEGMENTS: u32 = 120;
pub const FLOOR_RADIUS: f32 = 1.65;
pub const FLOOR_SEGMENTS: u32 = 80;

// Deformation envelope: peaks at y = -ENVELOPE_CENTER_OFFSET
pub const ENVELOPE_CENTER_OFFSET: f32 = 0.06;
pub const ENVELOPE_BAND_SCALE: f32 = 1.35;

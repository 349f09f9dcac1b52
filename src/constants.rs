// Page contract and scene tuning for the web frontend.

// Mount points
pub const DYE_CANVAS_ID: &str = "dye-canvas";
pub const VESSEL_MOUNT_ID: &str = "vessel-3d";

// Selectors and classes
pub const PARALLAX_SELECTOR: &str = ".parallax";
pub const HOVER_ITEM_SELECTOR: &str = ".journal-item";
pub const RAIL_SELECTOR: &str = ".journal-list";
pub const RAIL_NAV_SELECTOR: &str = "[data-journal-nav]";
pub const NO_3D_CLASS: &str = "no-3d"; // set on <body> when the vessel cannot render

// Styling variables on the document element
pub const ACCENT_VAR: &str = "--accent";
pub const TINT_VAR: &str = "--page-tint";

// Durable dye record
pub const DYE_STORAGE_KEY: &str = "vessel-dye-state-v2";

// Journal rail
pub const RAIL_WHEEL_FACTOR: f64 = 0.9; // vertical wheel delta -> horizontal scroll
pub const RAIL_PAGE_FRACTION: f64 = 0.82; // nav button step, fraction of rail width

// Camera
pub const CAMERA_FOV_DEG: f32 = 34.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.95, 5.2];
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const INITIAL_ASPECT: f32 = 4.0 / 3.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Lighting
pub const HEMI_SKY: [f32; 3] = [1.0, 1.0, 1.0];
pub const HEMI_GROUND: [f32; 3] = [0.851, 0.851, 0.871]; // #d9d9de
pub const HEMI_INTENSITY: f32 = 1.1;
pub const KEY_LIGHT_POS: [f32; 3] = [2.4, 2.8, 3.2];
pub const KEY_LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.15;
pub const RIM_LIGHT_POS: [f32; 3] = [-2.6, 1.3, -2.2];
pub const RIM_LIGHT_COLOR: [f32; 3] = [0.725, 0.827, 1.0]; // #b9d3ff
pub const RIM_LIGHT_INTENSITY: f32 = 0.5;

// Materials
pub const VESSEL_COLOR: [f32; 4] = [0.976, 0.976, 0.973, 1.0]; // #f9f9f8
pub const VESSEL_ROUGHNESS: f32 = 0.35;
pub const FLOOR_COLOR: [f32; 4] = [0.91, 0.91, 0.91, 0.38]; // #e8e8e8 at 38%
pub const FLOOR_Y: f32 = -1.1;

// Web-side rendering and layout constants.

// Display
pub const MAX_PIXEL_RATIO: f64 = 2.0; // device pixel ratio is capped here
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Points
pub const MIN_POINT_SIZE_PX: f32 = 1.0; // attenuated sprites never shrink below this

// Model texture fallback
pub const WHITE_TEXEL: [u8; 4] = [255, 255, 255, 255];

// Debug panel
pub const GUI_PANEL_ID: &str = "galaxy-gui";
pub const GUI_SUMMARY: &str = "Galaxy";

//! Application constants and configuration

pub const APP_NAME: &str = "Hexagon Draw Test";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WINDOW_TITLE: &str = "Hexagon Draw Test";
pub const INITIAL_WINDOW_SIZE: [f32; 2] = [768.0, 768.0];

/// Hexagon size in logical pixels; does not follow the window size
pub const HEXAGON_SIZE: f32 = 256.0;
pub const HEXAGON_PEN_WIDTH: f32 = 2.0;

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE_PREFIX: &str = "hexagon-draw-test.log";

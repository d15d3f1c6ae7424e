//! Application configuration.
//!
//! This module defines the CLI/environment configuration surface and the
//! fixed constants (map geometry, font search paths) used elsewhere.

mod constants;
mod types;

pub use constants::{
    DEFAULT_GEO_API_URL, DEFAULT_MAP_API_URL, FONT_CANDIDATES, MAP_HEIGHT, MAP_WIDTH, MAP_ZOOM,
};
pub use types::{Config, LogFormat, LogLevel};

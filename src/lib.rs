//! ipgeo-bot library: IP geolocation over Telegram
//!
//! This library implements a Telegram bot that accepts an IPv4 address,
//! queries the ip-api.com geolocation API, and replies with a formatted,
//! localized summary. When the answer carries coordinates, it also sends a
//! static map image, falling back to a locally rendered placeholder when the
//! map provider is unavailable.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use ipgeo_bot::{run_bot, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["ipgeo-bot", "--bot-token", "123:abc"]);
//! run_bot(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod bot;
pub mod config;
pub mod error_handling;
pub mod geolocate;
pub mod initialization;
pub mod reply;
pub mod staticmap;
pub mod validate;

// Re-export public API
pub use bot::handlers::{handle_text, BotState, Reply};
pub use bot::run_bot;
pub use config::{Config, LogFormat, LogLevel};
pub use geolocate::{GeoClient, GeoInfo};
pub use reply::format_geo_reply;
pub use staticmap::{render_placeholder, MapClient};
pub use validate::is_valid_ipv4;

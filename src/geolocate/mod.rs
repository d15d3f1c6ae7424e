//! Geolocation lookups via the ip-api.com JSON API.
//!
//! One HTTP GET per validated IP, no retries. Textual fields come back
//! localized according to the configured language hint.

mod client;
mod types;

pub use client::GeoClient;
pub use types::GeoInfo;

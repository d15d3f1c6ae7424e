//! Geolocation response model.

use serde::Deserialize;

/// One geolocation answer from the provider.
///
/// Everything except `status` is optional: the provider omits fields it has
/// no data for, and on `status == "fail"` only `message` and `query` are
/// populated. Constructed per request and discarded once the reply is sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoInfo {
    /// `"success"` or `"fail"`.
    #[serde(default)]
    pub status: String,

    /// Provider error message, present on failure.
    pub message: Option<String>,

    /// The IP address the answer is about.
    pub query: Option<String>,

    /// Country name, localized.
    pub country: Option<String>,

    /// Region/state name, localized.
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,

    /// City name, localized.
    pub city: Option<String>,

    /// Internet service provider name.
    pub isp: Option<String>,

    /// Organization name.
    pub org: Option<String>,

    /// Autonomous system number and name, e.g. `"AS15169 Google LLC"`.
    #[serde(rename = "as")]
    pub asn: Option<String>,

    /// Latitude in decimal degrees.
    pub lat: Option<f64>,

    /// Longitude in decimal degrees.
    pub lon: Option<f64>,

    /// IANA timezone name.
    pub timezone: Option<String>,

    /// Postal code.
    pub zip: Option<String>,
}

impl GeoInfo {
    /// Whether the provider reported a successful lookup.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Returns `(lat, lon)` when both are present.
    ///
    /// `Some(0.0)` counts as a coordinate; only a genuinely absent field
    /// disables the map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

//! Static map API client.

use std::time::Duration;

use anyhow::{bail, Result};
use log::{debug, warn};
use reqwest::StatusCode;

use crate::config::{MAP_HEIGHT, MAP_WIDTH, MAP_ZOOM};
use crate::staticmap::placeholder::render_placeholder;

/// Client for the static map API.
///
/// Requests a fixed-size dark map tile with a red marker at the given
/// coordinates. Any failure (missing key, transport error, non-200 status,
/// timeout) is downgraded to a locally rendered placeholder; the user never
/// sees a map failure.
#[derive(Debug, Clone)]
pub struct MapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl MapClient {
    /// Creates a new client for the given API base URL.
    ///
    /// `api_key` being `None` disables the remote call entirely; every fetch
    /// then renders the placeholder. `timeout` bounds the whole map request
    /// including body download.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
            timeout,
        }
    }

    /// Fetches a map image for the given coordinates. Never fails.
    ///
    /// On HTTP 200 returns the provider's raw image bytes; on any other
    /// outcome returns the placeholder rendering.
    pub async fn fetch_map(&self, lat: f64, lon: f64) -> Vec<u8> {
        let Some(key) = self.api_key.as_deref() else {
            debug!("No map API key configured, rendering placeholder");
            return render_placeholder(lat, lon);
        };

        match self.try_fetch(key, lat, lon).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Static map fetch failed, falling back to placeholder: {e:#}");
                render_placeholder(lat, lon)
            }
        }
    }

    async fn try_fetch(&self, key: &str, lat: f64, lon: f64) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", key.to_string()),
                ("l", "map".to_string()),
                ("size", format!("{MAP_WIDTH},{MAP_HEIGHT}")),
                ("theme", "dark".to_string()),
                ("z", MAP_ZOOM.to_string()),
                // Marker point is longitude-first
                ("pt", format!("{lon},{lat},pm2rdm")),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            bail!("map API HTTP {}", status);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            bail!("map API returned an empty body");
        }
        Ok(bytes.to_vec())
    }
}

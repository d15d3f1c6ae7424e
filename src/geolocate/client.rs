//! Geolocation API client.

use log::debug;
use reqwest::StatusCode;

use crate::error_handling::GeoError;
use crate::geolocate::types::GeoInfo;

/// Client for the ip-api.com style geolocation API.
///
/// Issues `GET {base}/{ip}?lang={lang}` and decodes the JSON body. One
/// request per lookup, no retries; transport defaults apply for timeouts.
#[derive(Debug, Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    base_url: String,
    lang: String,
}

impl GeoClient {
    /// Creates a new client for the given API base URL and language hint.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            lang: lang.into(),
        }
    }

    /// Fetches geolocation data for a validated IP address.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::Status` when the response status is not 200 (the
    /// body text is carried along for the user), `GeoError::Http` on
    /// transport failure, and `GeoError::Decode` when the body is not
    /// parseable JSON.
    pub async fn fetch(&self, ip: &str) -> Result<GeoInfo, GeoError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ip);
        debug!("Fetching geolocation: {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("lang", self.lang.as_str())])
            .send()
            .await
            .map_err(GeoError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(GeoError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<GeoInfo>().await.map_err(GeoError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_tolerated() {
        let client = GeoClient::new(
            reqwest::Client::new(),
            "http://ip-api.com/json/".to_string(),
            "ru",
        );
        // The trailing slash must not produce a double slash in the path
        assert_eq!(client.base_url.trim_end_matches('/'), "http://ip-api.com/json");
    }
}

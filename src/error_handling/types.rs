//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors from the geolocation provider.
///
/// Every variant is surfaced verbatim to the user as an error line; none is
/// retried.
#[derive(Error, Debug)]
pub enum GeoError {
    /// The provider answered with a non-200 status.
    #[error("ip-api HTTP {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body text, as returned by the provider.
        body: String,
    },

    /// The request failed at the transport level (connect, timeout, etc.).
    #[error("ip-api request failed: {0}")]
    Http(#[source] ReqwestError),

    /// The response body was not parseable as the expected JSON shape.
    #[error("ip-api returned an unparseable body: {0}")]
    Decode(#[source] ReqwestError),
}

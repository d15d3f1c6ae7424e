//! Configuration types and CLI options.
//!
//! Every field can be set by flag or environment variable; a `.env` file is
//! loaded by the binary before parsing, so secrets never have to live in the
//! source tree.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_GEO_API_URL, DEFAULT_MAP_API_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Bot configuration, parsed from CLI arguments and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// Telegram bot API token
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Base URL of the geolocation API
    #[arg(long, env = "GEO_API_URL", default_value = DEFAULT_GEO_API_URL)]
    pub geo_api_url: String,

    /// Language hint sent to the geolocation API (localizes country/region names)
    #[arg(long, env = "GEO_API_LANG", default_value = "ru")]
    pub geo_api_lang: String,

    /// Base URL of the static map API
    #[arg(long, env = "MAP_API_URL", default_value = DEFAULT_MAP_API_URL)]
    pub map_api_url: String,

    /// Static map API key. When absent the bot skips the remote map call and
    /// renders the placeholder image directly.
    #[arg(long, env = "MAP_API_KEY", hide_env_values = true)]
    pub map_api_key: Option<String>,

    /// Total timeout for a static map fetch, in seconds
    #[arg(long, env = "MAP_TIMEOUT_SECONDS", default_value_t = 15)]
    pub map_timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

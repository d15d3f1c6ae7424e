//! Application initialization and resource setup.
//!
//! Functions to initialize shared resources: the logger and the HTTP client
//! used by both API clients. All initialization functions return proper error
//! types for error handling.

mod client;
mod logger;

pub use client::init_http_client;
pub use logger::init_logger_with;

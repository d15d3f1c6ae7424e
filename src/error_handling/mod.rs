//! Error handling.
//!
//! Defines the error taxonomy used across the application. Validation
//! failures are deliberately not errors: a bad IP address is answered with a
//! format hint before any downstream call is made, and map fetch failures are
//! downgraded to a locally rendered placeholder instead of surfacing.

mod types;

pub use types::{GeoError, InitializationError};

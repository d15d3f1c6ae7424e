//! Static map images.
//!
//! Fetches a map tile for a coordinate pair from the static map API, falling
//! back to a locally rendered placeholder when the provider is unreachable,
//! answers non-200, or no API key is configured. The map path never fails:
//! every branch produces valid PNG bytes.

mod client;
mod placeholder;

pub use client::MapClient;
pub use placeholder::render_placeholder;

//! Fixed application constants.

/// Default base URL of the geolocation API. The queried IP is appended as a
/// path segment: `{base}/{ip}`.
pub const DEFAULT_GEO_API_URL: &str = "http://ip-api.com/json";

/// Default base URL of the static map API.
pub const DEFAULT_MAP_API_URL: &str = "https://static-maps.yandex.ru/v1";

/// Width of requested and locally rendered map images, in pixels.
pub const MAP_WIDTH: u32 = 400;

/// Height of requested and locally rendered map images, in pixels.
pub const MAP_HEIGHT: u32 = 300;

/// Zoom level for static map requests.
pub const MAP_ZOOM: u8 = 9;

/// Candidate TTF font paths for the placeholder renderer, in priority order.
///
/// The first path that loads wins. When none loads the placeholder is drawn
/// without text (background and marker only).
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

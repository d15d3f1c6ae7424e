//! Locally rendered placeholder map.

use std::fs;
use std::io::Cursor;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut};
use log::{debug, error, warn};

use crate::config::{FONT_CANDIDATES, MAP_HEIGHT, MAP_WIDTH};

const BACKGROUND: Rgb<u8> = Rgb([38, 42, 51]);
const TEXT_COLOR: Rgb<u8> = Rgb([220, 223, 228]);
const HINT_COLOR: Rgb<u8> = Rgb([140, 146, 158]);
const MARKER_COLOR: Rgb<u8> = Rgb([214, 69, 65]);

/// Minimal valid PNG (1x1, transparent) returned if in-memory encoding of
/// the placeholder ever fails. Keeps the "always a valid image" contract.
const FALLBACK_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Renders a 400x300 placeholder image for the given coordinates.
///
/// Drawn when the remote map provider cannot be used: dark background, title
/// line, latitude/longitude to 4 decimal places, a hint line, and a circular
/// marker glyph. Text is drawn with the first loadable font from
/// `FONT_CANDIDATES`; when none loads, the image keeps the background and
/// marker only. Never fails.
pub fn render_placeholder(lat: f64, lon: f64) -> Vec<u8> {
    let mut img = RgbImage::from_pixel(MAP_WIDTH, MAP_HEIGHT, BACKGROUND);

    // Marker glyph below the text block: a ring drawn as two filled circles
    let center = (MAP_WIDTH as i32 / 2, MAP_HEIGHT as i32 * 2 / 3);
    draw_filled_circle_mut(&mut img, center, 12, MARKER_COLOR);
    draw_filled_circle_mut(&mut img, center, 5, BACKGROUND);

    match load_font() {
        Some(font) => {
            let title = PxScale::from(26.0);
            let body = PxScale::from(18.0);
            draw_text_mut(&mut img, TEXT_COLOR, 24, 36, title, &font, "Карта недоступна");
            draw_text_mut(
                &mut img,
                TEXT_COLOR,
                24,
                84,
                body,
                &font,
                &format!("Широта: {lat:.4}"),
            );
            draw_text_mut(
                &mut img,
                TEXT_COLOR,
                24,
                110,
                body,
                &font,
                &format!("Долгота: {lon:.4}"),
            );
            draw_text_mut(
                &mut img,
                HINT_COLOR,
                24,
                148,
                body,
                &font,
                "Попробуйте запросить карту позже.",
            );
        }
        None => {
            warn!("No usable TTF font found, rendering placeholder without text");
        }
    }

    encode_png(img)
}

/// Loads the first usable font from the candidate list.
fn load_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                debug!("Placeholder font: {}", path);
                return Some(font);
            }
            Err(e) => {
                debug!("Skipping unparseable font {}: {}", path, e);
            }
        }
    }
    None
}

fn encode_png(img: RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    match image::DynamicImage::ImageRgb8(img).write_to(&mut buf, image::ImageFormat::Png) {
        Ok(()) => buf.into_inner(),
        Err(e) => {
            // Should not happen for an in-memory buffer; keep the contract anyway
            error!("Failed to encode placeholder PNG: {}", e);
            FALLBACK_PNG.to_vec()
        }
    }
}

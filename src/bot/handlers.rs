//! Message handlers.
//!
//! The whole pipeline lives here as transport-free functions: a handler takes
//! the inbound text and returns a [`Reply`] description; the dispatcher in
//! `bot::run` performs the actual sends. This keeps validation, lookup,
//! formatting, and the map fallback testable without Telegram.

use log::error;

use crate::geolocate::GeoClient;
use crate::reply::format_geo_reply;
use crate::staticmap::MapClient;
use crate::validate::is_valid_ipv4;

/// Help text for `/start` and the welcome message.
pub const START_TEXT: &str = "Введите IPv4-адрес в формате x.x.x.x, где x от 0 до 255.";

/// Progress message sent while the lookup is in flight; edited in place with
/// the final answer.
pub const SEARCHING_TEXT: &str = "Ищу информацию по этому IP…";

const EMPTY_INPUT_TEXT: &str =
    "Вы отправили пустое сообщение. Введите IPv4-адрес в формате x.x.x.x.";

const INVALID_INPUT_TEXT: &str =
    "Это не похоже на корректный IPv4-адрес.\nФормат: x.x.x.x, где x от 0 до 255.";

/// Shared per-process handler dependencies.
///
/// Nothing here is mutable: each inbound message is handled independently
/// and no state is retained between messages.
#[derive(Debug, Clone)]
pub struct BotState {
    /// Geolocation API client.
    pub geo: GeoClient,
    /// Static map API client.
    pub map: MapClient,
}

/// Outbound reply description produced by a handler.
///
/// Exactly one `Reply` is produced per inbound message; the transport layer
/// sends the text first and, when present, the photo after it.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A single text message.
    Text(String),
    /// A text message followed by one photo.
    TextWithPhoto {
        /// The text part, sent (or edited in) first.
        text: String,
        /// PNG bytes for the photo part.
        png: Vec<u8>,
    },
}

impl Reply {
    /// The text part of the reply, whichever shape it has.
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) => text,
            Reply::TextWithPhoto { text, .. } => text,
        }
    }
}

/// Handles one inbound text message and produces the reply for it.
///
/// Pipeline: trim → validate → geolocation fetch → format → optional map.
/// Validation failures short-circuit with a format hint and make no
/// downstream call. Provider errors are surfaced verbatim as an error line.
/// A map is attached only when the successful answer carries both
/// coordinates; map failures degrade to the placeholder inside
/// [`MapClient::fetch_map`], so this function itself never fails.
pub async fn handle_text(state: &BotState, text: &str) -> Reply {
    let ip = text.trim();

    if ip.is_empty() {
        return Reply::Text(EMPTY_INPUT_TEXT.to_string());
    }

    if !is_valid_ipv4(ip) {
        return Reply::Text(INVALID_INPUT_TEXT.to_string());
    }

    match state.geo.fetch(ip).await {
        Ok(info) => {
            let text = format_geo_reply(&info);
            if info.is_success() {
                if let Some((lat, lon)) = info.coordinates() {
                    let png = state.map.fetch_map(lat, lon).await;
                    return Reply::TextWithPhoto { text, png };
                }
            }
            Reply::Text(text)
        }
        Err(e) => {
            error!("Geolocation lookup for {} failed: {}", ip, e);
            Reply::Text(format!("Произошла ошибка при запросе к ip-api: {e}"))
        }
    }
}

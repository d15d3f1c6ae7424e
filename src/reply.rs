//! Reply formatting.
//!
//! Pure functions that turn a geolocation answer into the user-facing text
//! block. Field presence is independently optional; joins skip absent or
//! empty members so no stray separators appear.

use crate::geolocate::GeoInfo;

/// Fallback used when the provider fails without an error message.
const UNKNOWN_ERROR: &str = "unknown error";

/// Shown when a successful answer carries no usable fields at all.
const NO_USEFUL_DATA: &str = "Не удалось получить полезную информацию по этому IP.";

/// Formats a geolocation answer as a human-readable text block.
///
/// On provider failure, returns a single error line embedding the provider's
/// message. Otherwise emits one line per present field, in a fixed order:
/// IP, location, provider, AS, coordinates, timezone, postal code. Empty
/// strings count as absent, matching what ip-api returns for unknown fields.
pub fn format_geo_reply(info: &GeoInfo) -> String {
    if !info.is_success() {
        let message = info
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(UNKNOWN_ERROR);
        return format!("Запрос к ip-api не удался: {message}");
    }

    let mut lines = Vec::new();

    if let Some(query) = present(&info.query) {
        lines.push(format!("IP: {query}"));
    }

    let location = join_present(&[&info.country, &info.region_name, &info.city]);
    if !location.is_empty() {
        lines.push(format!("Локация: {location}"));
    }

    let provider = join_present(&[&info.isp, &info.org]);
    if !provider.is_empty() {
        lines.push(format!("Провайдер: {provider}"));
    }

    if let Some(asn) = present(&info.asn) {
        lines.push(format!("AS: {asn}"));
    }

    if let Some((lat, lon)) = info.coordinates() {
        lines.push(format!("Координаты: {lat}, {lon}"));
    }

    if let Some(timezone) = present(&info.timezone) {
        lines.push(format!("Часовой пояс: {timezone}"));
    }

    if let Some(zip) = present(&info.zip) {
        lines.push(format!("Почтовый индекс: {zip}"));
    }

    if lines.is_empty() {
        return NO_USEFUL_DATA.to_string();
    }

    lines.join("\n")
}

/// Returns the value when it is present and non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Joins the present, non-empty members with `", "`.
fn join_present(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .filter_map(|f| present(f))
        .collect::<Vec<_>>()
        .join(", ")
}

//! Turning the model's place list into a Google Maps directions link.

use tracing::trace;

use crate::ai::prompts::LOCATION_DELIMITER;

pub const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Split a delimited place list into names.
///
/// Segments are trimmed and empty ones dropped. Order is kept as emitted and
/// duplicates are not removed.
pub fn parse_locations(text: &str) -> Vec<String> {
    let locations: Vec<String> = text
        .split(LOCATION_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    trace!(count = locations.len(), "parsed locations");
    locations
}

/// Encode one path component: spaces become `+`, other reserved characters
/// are percent-encoded.
pub fn encode_component(text: &str) -> String {
    urlencoding::encode(text).replace("%20", "+")
}

/// Build a directions link visiting each location in `city`.
///
/// Returns an empty string when there are no locations.
pub fn maps_link(city: &str, locations: &[String]) -> String {
    if locations.is_empty() {
        return String::new();
    }
    let city = encode_component(city);
    let segments: Vec<String> = locations
        .iter()
        .map(|loc| format!("{},{}", encode_component(loc), city))
        .collect();
    format!("{MAPS_DIRECTIONS_URL}{}", segments.join("/"))
}

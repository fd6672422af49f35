//! Color normalization shared by the extractor and the utility compiler

use once_cell::sync::Lazy;
use regex::Regex;

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rgba?\(\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})")
        .expect("valid rgb() pattern")
});

/// Properties whose values are normalized from `rgb()` to hex on extraction
pub const COLOR_PROPERTIES: &[&str] = &["color", "background-color", "border-color", "outline-color"];

pub fn is_color_property(property: &str) -> bool {
    COLOR_PROPERTIES.contains(&property)
}

/// Convert `rgb(r, g, b)` / `rgba(r, g, b, a)` to lowercase `#rrggbb`.
///
/// The alpha channel is dropped. Returns `None` when the value has no
/// recognizable rgb() channel triple.
pub fn rgb_to_hex(value: &str) -> Option<String> {
    let captures = RGB_FUNCTION.captures(value)?;
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for index in 1..=3 {
        let channel: u32 = captures.get(index)?.as_str().parse().ok()?;
        hex.push_str(&format!("{:02x}", channel.min(255)));
    }
    Some(hex)
}

/// Normalize an rgb()/rgba() value to hex, leaving anything else untouched
pub fn normalize_color(value: &str) -> String {
    if value.starts_with("rgb") {
        if let Some(hex) = rgb_to_hex(value) {
            return hex;
        }
    }
    value.to_string()
}

// File: crates/gantt-core/src/color.rs
// Summary: Shorthand hex color normalisation to 8-digit RGBA.

use tracing::warn;

/// Expand a CSS-like hex color into upper-case `RRGGBBAA`.
///
/// Accepted shapes:
/// - `RGB`      → `RRGGBBFF`
/// - `RGBA`     → `RRGGBBAA`
/// - `RRGGBB`   → `RRGGBBFF`
/// - `RRGGBBAA` → unchanged
///
/// Other lengths are upper-cased and passed through. Characters are not
/// validated; use [`is_hex_color`] first if strict input is required.
pub fn normalize_color(color: &str) -> String {
    let chars: Vec<char> = color.chars().collect();
    let expanded: String = match chars.len() {
        3 => chars.iter().flat_map(|&c| [c, c]).chain("FF".chars()).collect(),
        4 => chars.iter().flat_map(|&c| [c, c]).collect(),
        6 => format!("{color}FF"),
        _ => color.to_string(),
    };

    if !chars.iter().all(char::is_ascii_hexdigit) {
        warn!(color, "color contains non-hex characters; passing through");
    }

    expanded.to_uppercase()
}

/// True when `color` is 3, 4, 6 or 8 hex digits.
pub fn is_hex_color(color: &str) -> bool {
    matches!(color.len(), 3 | 4 | 6 | 8) && color.chars().all(|c| c.is_ascii_hexdigit())
}

/// First six digits (`RRGGBB`) of a normalised color.
pub fn rgb_part(color: &str) -> &str {
    color.get(..6).unwrap_or(color)
}

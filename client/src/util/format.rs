//! Display formatting for product cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Maximum description length shown on a card before truncation.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 140;

/// Format a price with a dollar sign and two decimals, e.g. `$12.50`.
pub fn format_price(price: f64) -> String {
    if price.is_finite() { format!("${price:.2}") } else { "$0.00".to_owned() }
}

/// Truncate a description to `max_chars` characters, appending an ellipsis
/// when anything was cut. Cuts on a word boundary when one is available.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => cut[..idx].trim_end(),
        _ => cut.as_str(),
    };
    format!("{trimmed}…")
}

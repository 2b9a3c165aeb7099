//! Utility functions and helpers

/// Render a number the way a browser number input displays it
///
/// Integral values drop the fractional part (`2.0` becomes `"2"`),
/// non-finite values render as `NaN`, `Infinity` or `-Infinity`.
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        // -0 displays as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Format a number with a fixed number of decimal places
pub fn format_fixed(value: f64, places: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", places, value)
    } else {
        number_to_text(value)
    }
}

/// Escape text for safe inclusion in HTML content and attribute values
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

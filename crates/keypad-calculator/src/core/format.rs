//! Conversions between `display` text and numbers

/// Parses operand text as shown on the display.
///
/// Partial numerals such as `"3."` are accepted. Text that is not a number
/// at all reads as `0`; the engine never produces such text.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim();
    let numeral = trimmed.strip_suffix('.').unwrap_or(trimmed);
    match numeral.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Renders a number for the display.
///
/// Produces the shortest text that parses back to the same value, never in
/// exponent notation. Negative zero is shown as `0`.
#[must_use]
pub fn stringify(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Rounds `value` to `precision` fractional digits using its exact decimal
/// expansion, so noise like `0.30000000000000004` collapses to `0.3`.
#[must_use]
pub fn round_to(value: f64, precision: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.precision$}").parse().unwrap_or(value)
}

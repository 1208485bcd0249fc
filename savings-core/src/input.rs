//! Parsing of locale-formatted numeric form input.

use rust_decimal::Decimal;

/// Parses numeric form text where either `,` or `.` may be the decimal
/// separator.
///
/// The comma is normalized to a decimal point before parsing, so `"1234,5"`
/// and `"1234.5"` are equivalent. Empty, whitespace-only or malformed input
/// (including mixed thousands grouping like `"1.234,5"`) yields zero rather
/// than an error; the estimator's input guard then turns a zero required
/// field into the prompt state. Malformed non-empty input is logged.
pub fn parse_decimal(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %raw, "unparseable numeric input, treating as zero: {}", e);
        Decimal::ZERO
    })
}

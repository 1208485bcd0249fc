//! Currency output formatting.
//!
//! Both calculator variants present euro amounts in German number format
//! (`1.234.567 €`), rounded to whole euros, so there is a single formatter
//! regardless of the message locale.

use rust_decimal::Decimal;

use crate::calculations::common::round_whole_euros;

/// Placeholder shown where no amount is available.
pub const PLACEHOLDER: &str = "—";

/// Formats an amount as whole euros in de-DE style: thousands separated by
/// `.`, a non-breaking space, then the euro sign.
pub fn format_eur(value: Decimal) -> String {
    let rounded = round_whole_euros(value).normalize();
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();
    let grouped = group_thousands(&digits);
    if negative {
        format!("-{grouped}\u{a0}€")
    } else {
        format!("{grouped}\u{a0}€")
    }
}

/// Formats an optional amount, using the em-dash placeholder when absent.
pub fn format_eur_opt(value: Option<Decimal>) -> String {
    value.map(format_eur).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

//! Shared numeric helpers for the savings calculation.

use rust_decimal::Decimal;

/// Rounds a currency amount to whole euros using half-up rounding.
///
/// Midpoints round away from zero, matching everyday invoice rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::round_whole_euros;
///
/// assert_eq!(round_whole_euros(dec!(1799.4)), dec!(1799));
/// assert_eq!(round_whole_euros(dec!(1799.5)), dec!(1800));
/// assert_eq!(round_whole_euros(dec!(-0.5)), dec!(-1));
/// ```
pub fn round_whole_euros(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps `value` into `[min, max]`.
pub fn clamp(
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Decimal {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

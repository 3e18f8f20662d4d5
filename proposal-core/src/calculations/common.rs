//! Shared rounding helpers.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoints go away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole number using the same half-up rule.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(237.5)), dec!(238));
/// assert_eq!(round_whole(dec!(237.4)), dec!(237));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

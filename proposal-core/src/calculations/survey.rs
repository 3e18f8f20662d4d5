//! Pipe-length derivation for the survey list.

use rust_decimal::Decimal;

use crate::calculations::common::round_whole;

/// Total pipe length for a surveyed room: `area * pipe_density`, rounded
/// half-away-from-zero to a whole meter.
///
/// The rounding rule is fixed: a midpoint such as 23.75 m² at 10 m/m²
/// (237.5 m) rounds up to 238 m.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_core::calculations::pipe_length;
///
/// assert_eq!(pipe_length(dec!(23.75), dec!(10)), dec!(238));
/// assert_eq!(pipe_length(dec!(0), dec!(6.6)), dec!(0));
/// ```
pub fn pipe_length(
    area: Decimal,
    pipe_density: Decimal,
) -> Decimal {
    round_whole(area * pipe_density)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn pipe_length_rounds_midpoint_up() {
        let result = pipe_length(dec!(23.75), dec!(10));

        assert_eq!(result, dec!(238));
    }

    #[test]
    fn pipe_length_rounds_below_midpoint_down() {
        let result = pipe_length(dec!(10.52), dec!(6.6)); // 69.432

        assert_eq!(result, dec!(69));
    }

    #[test]
    fn pipe_length_zero_area_is_zero() {
        let result = pipe_length(dec!(0), dec!(6.6));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn pipe_length_zero_density_is_zero() {
        let result = pipe_length(dec!(40), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn pipe_length_whole_product_is_unchanged() {
        let result = pipe_length(dec!(30), dec!(10));

        assert_eq!(result, dec!(300));
    }
}

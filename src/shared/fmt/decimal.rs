//! Decimal formatting utilities for human-readable display.
//!
//! Fixed-point output rounds half away from zero and pads with zeros, so
//! `fixed(&dec("1.005"), 2)` is `"1.01"` and `fixed(&dec("10"), 2)` is `"10.00"`.

use rust_decimal::prelude::*;

/// Format a `Decimal` with exactly `dp` fractional digits.
pub fn fixed(value: &Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(dp);
    rounded.to_string()
}

/// Format a percentage value as `"<value to 2dp>%"`.
pub fn percent(value: &Decimal) -> String {
    format!("{}%", fixed(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_pads_whole_numbers() {
        assert_eq!(fixed(&dec("10"), 2), "10.00");
        assert_eq!(fixed(&dec("0"), 2), "0.00");
        assert_eq!(fixed(&dec("1.5"), 2), "1.50");
    }

    #[test]
    fn test_fixed_rounds_half_away_from_zero() {
        assert_eq!(fixed(&dec("1.005"), 2), "1.01");
        assert_eq!(fixed(&dec("-2.005"), 2), "-2.01");
        assert_eq!(fixed(&dec("1.004"), 2), "1.00");
    }

    #[test]
    fn test_fixed_drops_negative_zero() {
        assert_eq!(fixed(&dec("-0.001"), 2), "0.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(&dec("12.3456")), "12.35%");
        assert_eq!(percent(&dec("-4.1")), "-4.10%");
        assert_eq!(percent(&dec("10")), "10.00%");
    }
}

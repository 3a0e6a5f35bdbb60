//! Common utility functions for paycheck calculations.
//!
//! This module provides the rounding and currency display helpers shared by
//! the calculator and its result types.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero to 0.01.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::min;
///
/// assert_eq!(min(dec!(45), dec!(40)), dec!(40));
/// assert_eq!(min(dec!(12.5), dec!(40)), dec!(12.5));
/// ```
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Formats an amount as dollars with exactly two decimal places.
///
/// The amount is rounded with [`round_half_up`] first, so the displayed
/// cents always agree with the financial rounding used elsewhere.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(950)), "$950.00");
/// assert_eq!(format_currency(dec!(161.5)), "$161.50");
/// assert_eq!(format_currency(dec!(105.4049)), "$105.40");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(CURRENCY_DP);
    if rounded.is_zero() {
        // "-0.00" is never a useful amount
        rounded.set_sign_positive(true);
    }
    format!("${rounded}")
}

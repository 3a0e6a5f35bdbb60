//! Hourly paycheck calculation with overtime and a flat tax.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Regular hours: smaller of hours or 40 |
//! | 2    | Overtime hours: hours minus 40 (if zero or less, 0) |
//! | 3    | Regular pay: Step 1 × pay rate |
//! | 4    | Overtime pay: Step 2 × pay rate × 1.5 |
//! | 5    | Gross pay: Step 3 + Step 4 |
//! | 6    | Taxes: Step 5 × 17% |
//! | 7    | Net pay: Step 5 − Step 6 |
//!
//! Exactly 40 hours is entirely regular time. No step rounds; cents are
//! only rounded when the result is displayed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycheck_core::compute;
//!
//! let result = compute("45", "20").unwrap();
//!
//! assert_eq!(result.regular_pay, dec!(800));
//! assert_eq!(result.overtime_pay, dec!(150));
//! assert_eq!(result.gross_pay, dec!(950));
//! assert_eq!(result.taxes, dec!(161.50));
//! assert_eq!(result.net_pay, dec!(788.50));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{max, min};
use crate::{PaycheckError, PaycheckInput, PaycheckResult};

/// Hours per period paid at the base rate.
pub const REGULAR_HOURS_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the pay rate for overtime hours (time and a half).
pub const OVERTIME_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Flat tax rate applied to gross pay (17%).
pub const TAX_RATE: Decimal = Decimal::from_parts(17, 0, 0, false, 2);

/// Calculator for an hourly paycheck.
///
/// Stateless: every call is independent and the same inputs always give the
/// same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaycheckCalculator;

impl PaycheckCalculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Parses the two field texts and calculates the paycheck.
    ///
    /// # Errors
    ///
    /// - [`PaycheckError::NonNumericInput`] if either text is not a number,
    ///   or the amounts are too large to represent
    /// - [`PaycheckError::NegativeInput`] if either number is below zero
    pub fn compute(
        &self,
        hours_text: &str,
        pay_rate_text: &str,
    ) -> Result<PaycheckResult, PaycheckError> {
        let input = PaycheckInput::parse(hours_text, pay_rate_text)?;
        self.calculate(&input)
    }

    /// Calculates the paycheck for validated input.
    ///
    /// # Errors
    ///
    /// Returns [`PaycheckError::NonNumericInput`] if an amount overflows the
    /// decimal range.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use paycheck_core::{PaycheckCalculator, PaycheckInput};
    ///
    /// let input = PaycheckInput::new(dec!(40), dec!(15.5)).unwrap();
    /// let result = PaycheckCalculator::new().calculate(&input).unwrap();
    ///
    /// assert_eq!(result.overtime_hours, dec!(0));
    /// assert_eq!(result.gross_pay, dec!(620.00));
    /// assert_eq!(result.taxes, dec!(105.40));
    /// assert_eq!(result.net_pay, dec!(514.60));
    /// ```
    pub fn calculate(
        &self,
        input: &PaycheckInput,
    ) -> Result<PaycheckResult, PaycheckError> {
        let regular_hours = Self::regular_hours(input.hours());
        let overtime_hours = Self::overtime_hours(input.hours());

        let regular_pay = Self::regular_pay(regular_hours, input.pay_rate()).ok_or_else(overflow)?;
        let overtime_pay =
            Self::overtime_pay(overtime_hours, input.pay_rate()).ok_or_else(overflow)?;
        let gross_pay = Self::gross_pay(regular_pay, overtime_pay).ok_or_else(overflow)?;
        let taxes = Self::taxes(gross_pay).ok_or_else(overflow)?;
        let net_pay = Self::net_pay(gross_pay, taxes);

        debug!(
            hours = %input.hours(),
            pay_rate = %input.pay_rate(),
            %gross_pay,
            %taxes,
            %net_pay,
            "paycheck computed"
        );

        Ok(PaycheckResult {
            regular_hours,
            overtime_hours,
            regular_pay,
            overtime_pay,
            gross_pay,
            taxes,
            net_pay,
        })
    }

    /// Step 1: hours paid at the base rate.
    fn regular_hours(hours: Decimal) -> Decimal {
        min(hours, REGULAR_HOURS_THRESHOLD)
    }

    /// Step 2: hours past the threshold.
    fn overtime_hours(hours: Decimal) -> Decimal {
        max(hours - REGULAR_HOURS_THRESHOLD, Decimal::ZERO)
    }

    /// Step 3
    fn regular_pay(
        regular_hours: Decimal,
        pay_rate: Decimal,
    ) -> Option<Decimal> {
        regular_hours.checked_mul(pay_rate)
    }

    /// Step 4
    fn overtime_pay(
        overtime_hours: Decimal,
        pay_rate: Decimal,
    ) -> Option<Decimal> {
        overtime_hours
            .checked_mul(pay_rate)?
            .checked_mul(OVERTIME_RATE)
    }

    /// Step 5
    fn gross_pay(
        regular_pay: Decimal,
        overtime_pay: Decimal,
    ) -> Option<Decimal> {
        regular_pay.checked_add(overtime_pay)
    }

    /// Step 6
    fn taxes(gross_pay: Decimal) -> Option<Decimal> {
        gross_pay.checked_mul(TAX_RATE)
    }

    /// Step 7: cannot overflow since taxes never exceed gross pay.
    fn net_pay(
        gross_pay: Decimal,
        taxes: Decimal,
    ) -> Decimal {
        gross_pay - taxes
    }
}

fn overflow() -> PaycheckError {
    warn!("paycheck amount out of decimal range");
    PaycheckError::NonNumericInput
}

/// Parses the two field texts and calculates the paycheck.
///
/// Shorthand for [`PaycheckCalculator::compute`].
///
/// # Errors
///
/// See [`PaycheckCalculator::compute`].
pub fn compute(
    hours_text: &str,
    pay_rate_text: &str,
) -> Result<PaycheckResult, PaycheckError> {
    PaycheckCalculator::new().compute(hours_text, pay_rate_text)
}

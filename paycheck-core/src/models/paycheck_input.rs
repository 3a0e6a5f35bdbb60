use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::PaycheckError;
use crate::parse::parse_decimal;

/// Validated hours and pay rate for one pay period.
///
/// Both values are always non-negative: the only ways in are
/// [`PaycheckInput::parse`], [`PaycheckInput::new`] and deserialization,
/// which goes through `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaycheckInputFields")]
pub struct PaycheckInput {
    hours: Decimal,
    pay_rate: Decimal,
}

/// Unchecked wire form of [`PaycheckInput`].
#[derive(Deserialize)]
struct PaycheckInputFields {
    hours: Decimal,
    pay_rate: Decimal,
}

impl TryFrom<PaycheckInputFields> for PaycheckInput {
    type Error = PaycheckError;

    fn try_from(fields: PaycheckInputFields) -> Result<Self, Self::Error> {
        Self::new(fields.hours, fields.pay_rate)
    }
}

impl PaycheckInput {
    /// Hours worked in the period.
    pub fn hours(&self) -> Decimal {
        self.hours
    }

    /// Pay per hour, in currency.
    pub fn pay_rate(&self) -> Decimal {
        self.pay_rate
    }

    /// Creates an input from already-parsed values.
    ///
    /// # Errors
    ///
    /// Returns [`PaycheckError::NegativeInput`] if either value is below zero.
    /// Zero is accepted.
    pub fn new(
        hours: Decimal,
        pay_rate: Decimal,
    ) -> Result<Self, PaycheckError> {
        if hours < Decimal::ZERO || pay_rate < Decimal::ZERO {
            warn!(%hours, %pay_rate, "negative paycheck input");
            return Err(PaycheckError::NegativeInput);
        }
        Ok(Self { hours, pay_rate })
    }

    /// Parses the text of the hours and pay rate fields.
    ///
    /// Both fields must parse before the sign check runs, so a field that is
    /// not a number always wins over a negative one.
    ///
    /// # Errors
    ///
    /// - [`PaycheckError::NonNumericInput`] if either field is not a number
    /// - [`PaycheckError::NegativeInput`] if either number is below zero
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use paycheck_core::{PaycheckError, PaycheckInput};
    ///
    /// let input = PaycheckInput::parse("45", "20").unwrap();
    /// assert_eq!(input.hours(), dec!(45));
    ///
    /// assert_eq!(PaycheckInput::parse("abc", "20"), Err(PaycheckError::NonNumericInput));
    /// assert_eq!(PaycheckInput::parse("-5", "10"), Err(PaycheckError::NegativeInput));
    /// ```
    pub fn parse(
        hours_text: &str,
        pay_rate_text: &str,
    ) -> Result<Self, PaycheckError> {
        let hours = parse_decimal(hours_text).map_err(|_| PaycheckError::NonNumericInput)?;
        let pay_rate = parse_decimal(pay_rate_text).map_err(|_| PaycheckError::NonNumericInput)?;
        Self::new(hours, pay_rate)
    }
}

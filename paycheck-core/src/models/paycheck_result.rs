use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_currency;

/// Result of one paycheck calculation.
///
/// Every amount is kept at full precision. Rounding to cents happens only
/// when the result is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckResult {
    /// Hours paid at the base rate (at most 40).
    pub regular_hours: Decimal,

    /// Hours beyond the regular threshold, paid at the overtime rate.
    pub overtime_hours: Decimal,

    /// Pay for the regular hours.
    pub regular_pay: Decimal,

    /// Pay for the overtime hours, including the premium.
    pub overtime_pay: Decimal,

    /// Regular pay plus overtime pay.
    pub gross_pay: Decimal,

    /// Flat tax withheld from gross pay.
    pub taxes: Decimal,

    /// Gross pay minus taxes.
    pub net_pay: Decimal,
}

impl PaycheckResult {
    /// The three display lines for gross pay, taxes and net pay.
    ///
    /// Labels are padded so the dollar amounts line up.
    ///
    /// # Example
    ///
    /// ```
    /// let result = paycheck_core::compute("45", "20").unwrap();
    ///
    /// assert_eq!(
    ///     result.lines(),
    ///     [
    ///         "Your gross pay is $950.00".to_string(),
    ///         "Your taxes are    $161.50".to_string(),
    ///         "Your net pay is   $788.50".to_string(),
    ///     ]
    /// );
    /// ```
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Your gross pay is {}", format_currency(self.gross_pay)),
            format!("Your taxes are    {}", format_currency(self.taxes)),
            format!("Your net pay is   {}", format_currency(self.net_pay)),
        ]
    }

    /// The display lines joined with newlines, without a trailing newline.
    pub fn summary(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for PaycheckResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_result() -> PaycheckResult {
        PaycheckResult {
            regular_hours: dec!(40),
            overtime_hours: dec!(0),
            regular_pay: dec!(620.0),
            overtime_pay: dec!(0),
            gross_pay: dec!(620.0),
            taxes: dec!(105.400),
            net_pay: dec!(514.600),
        }
    }

    #[test]
    fn summary_formats_two_decimals() {
        assert_eq!(
            sample_result().summary(),
            "Your gross pay is $620.00\nYour taxes are    $105.40\nYour net pay is   $514.60"
        );
    }

    #[test]
    fn display_matches_summary() {
        let result = sample_result();

        assert_eq!(result.to_string(), result.summary());
    }

    #[test]
    fn lines_round_only_for_display() {
        let result = PaycheckResult {
            regular_hours: dec!(1),
            overtime_hours: dec!(0),
            regular_pay: dec!(10.005),
            overtime_pay: dec!(0),
            gross_pay: dec!(10.005),
            taxes: dec!(1.70085),
            net_pay: dec!(8.30415),
        };

        assert_eq!(result.lines()[0], "Your gross pay is $10.01");
        assert_eq!(result.lines()[1], "Your taxes are    $1.70");
        assert_eq!(result.lines()[2], "Your net pay is   $8.30");
        assert_eq!(result.gross_pay, dec!(10.005));
    }
}

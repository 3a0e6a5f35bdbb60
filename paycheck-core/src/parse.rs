//! Parsing of user-entered numbers.
//!
//! Input fields hold free text. A value is accepted when it is a plain
//! decimal literal: optional sign, digits with an optional decimal point,
//! and an optional exponent. Thousands separators, `NaN`, `Infinity` and
//! empty input are rejected.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    /// The text is not a decimal literal at all.
    #[error("invalid decimal '{0}'")]
    Syntax(String),

    /// The text is a literal but the value does not fit in a [`Decimal`].
    #[error("decimal '{input}' is out of range: {source}")]
    OutOfRange {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

static DECIMAL_LITERAL_RE: OnceLock<Regex> = OnceLock::new();

fn decimal_literal_regex() -> &'static Regex {
    DECIMAL_LITERAL_RE.get_or_init(|| {
        // 1: sign, 2: mantissa ("12", "12.", "12.5", ".5"), 3: exponent
        let pattern = r"^([+-])?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("decimal literal regex failed to compile: {error}"))
    })
}

/// Most integer digits a [`Decimal`] can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Most fractional digits a [`Decimal`] keeps; longer fractions are rounded.
const MAX_SCALE: i64 = 28;

/// Rewrites `mantissa × 10^exponent` as plain decimal text.
///
/// Returns `Ok(None)` when the value is zero or lies below the smallest
/// amount that survives rounding to [`MAX_SCALE`] places.
fn plain_decimal_text(
    mantissa: &str,
    exponent: i64,
) -> Result<Option<String>, rust_decimal::Error> {
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(None);
    }

    // position of the decimal point, counted from the first significant digit
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = (int_part.len() as i64 - leading_zeros).saturating_add(exponent);
    if point > MAX_INTEGER_DIGITS {
        return Err(rust_decimal::Error::ExceedsMaximumPossibleValue);
    }
    if point < -MAX_SCALE - 1 {
        return Ok(None);
    }

    let len = significant.len() as i64;
    let text = if point <= 0 {
        format!("0.{}{significant}", "0".repeat(point.unsigned_abs() as usize))
    } else if point >= len {
        format!("{significant}{}", "0".repeat((point - len) as usize))
    } else {
        let (whole, fraction) = significant.split_at(point as usize);
        format!("{whole}.{fraction}")
    };
    Ok(Some(text))
}

/// Reads the digits of an exponent such as `e-5`, saturating absurd lengths.
fn parse_exponent(exponent: &str) -> i64 {
    let digits = &exponent[1..];
    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Parses a string into a [`Decimal`].
///
/// Surrounding whitespace is ignored. Negative zero is returned as zero.
/// Logs a warning when the input is rejected.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::parse::parse_decimal;
///
/// assert_eq!(parse_decimal(" 15.5 ").unwrap(), dec!(15.5));
/// assert_eq!(parse_decimal("-5").unwrap(), dec!(-5));
/// assert_eq!(parse_decimal("4.5e1").unwrap(), dec!(45));
/// assert!(parse_decimal("1,000").is_err());
/// assert!(parse_decimal("").is_err());
/// ```
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let trimmed = s.trim();
    let Some(caps) = decimal_literal_regex().captures(trimmed) else {
        warn!(input = %s, "not a decimal literal");
        return Err(ParseDecimalError::Syntax(s.to_string()));
    };

    let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");
    let exponent = caps.get(3).map_or(0, |exponent| parse_exponent(exponent.as_str()));

    let out_of_range = |source: rust_decimal::Error| {
        warn!(input = %s, %source, "decimal out of range");
        ParseDecimalError::OutOfRange {
            input: s.to_string(),
            source,
        }
    };
    let Some(text) = plain_decimal_text(&caps[2], exponent).map_err(&out_of_range)? else {
        return Ok(Decimal::ZERO);
    };
    let mut value = text.parse::<Decimal>().map_err(&out_of_range)?;

    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if negative {
        value.set_sign_negative(true);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_integers_and_fractions() {
        assert_eq!(parse_decimal("45").unwrap(), dec!(45));
        assert_eq!(parse_decimal("15.5").unwrap(), dec!(15.5));
        assert_eq!(parse_decimal("0.25").unwrap(), dec!(0.25));
    }

    #[test]
    fn parse_decimal_accepts_bare_decimal_point() {
        assert_eq!(parse_decimal(".5").unwrap(), dec!(0.5));
        assert_eq!(parse_decimal("40.").unwrap(), dec!(40));
    }

    #[test]
    fn parse_decimal_accepts_signs() {
        assert_eq!(parse_decimal("+20").unwrap(), dec!(20));
        assert_eq!(parse_decimal("-5").unwrap(), dec!(-5));
        assert_eq!(parse_decimal("-.5").unwrap(), dec!(-0.5));
    }

    #[test]
    fn parse_decimal_accepts_exponents() {
        assert_eq!(parse_decimal("1e2").unwrap(), dec!(100));
        assert_eq!(parse_decimal("2.5E-1").unwrap(), dec!(0.25));
        assert_eq!(parse_decimal("-1.5e+1").unwrap(), dec!(-15));
    }

    #[test]
    fn parse_decimal_trims_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
        assert_eq!(parse_decimal("\t40\n").unwrap(), dec!(40));
    }

    #[test]
    fn parse_decimal_normalizes_negative_zero() {
        let value = parse_decimal("-0").unwrap();

        assert_eq!(value, Decimal::ZERO);
        assert!(!value.is_sign_negative());
    }

    #[test]
    fn parse_decimal_rejects_empty_input() {
        assert!(matches!(parse_decimal(""), Err(ParseDecimalError::Syntax(_))));
        assert!(matches!(parse_decimal("   "), Err(ParseDecimalError::Syntax(_))));
    }

    #[test]
    fn parse_decimal_rejects_words_and_separators() {
        for input in ["abc", "1,000", "1_000", "12abc", "$20", "NaN", "Infinity", "1.2.3", "--5", "e5"] {
            assert!(
                matches!(parse_decimal(input), Err(ParseDecimalError::Syntax(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_decimal_accepts_zero_with_any_exponent() {
        assert_eq!(parse_decimal("0e29").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("0.0e-50").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("-0e999999999999999999999").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_rounds_tiny_exponents_like_plain_digits() {
        assert_eq!(
            parse_decimal("1e-29").unwrap(),
            parse_decimal("0.00000000000000000000000000001").unwrap()
        );
        assert_eq!(
            parse_decimal("6e-29").unwrap(),
            parse_decimal("0.00000000000000000000000000006").unwrap()
        );
        assert_eq!(parse_decimal("1e-100").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_shifts_point_for_exponents() {
        assert_eq!(parse_decimal("0.0012e3").unwrap(), dec!(1.2));
        assert_eq!(parse_decimal("12.5e-3").unwrap(), dec!(0.0125));
        assert_eq!(parse_decimal("7e28").unwrap(), dec!(70000000000000000000000000000));
    }

    #[test]
    fn parse_decimal_rejects_unrepresentable_values() {
        assert!(matches!(parse_decimal("1e29"), Err(ParseDecimalError::OutOfRange { .. })));
        assert!(matches!(
            parse_decimal("99999999999999999999999999999"),
            Err(ParseDecimalError::OutOfRange { .. })
        ));

        let result = parse_decimal("1e40");

        assert!(matches!(result, Err(ParseDecimalError::OutOfRange { .. })));
    }
}

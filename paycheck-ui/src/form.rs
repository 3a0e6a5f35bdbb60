use std::fmt;

use paycheck_core::PaycheckCalculator;
use tracing::{info, warn};

/// State of the paycheck form: the two input fields and the output area.
#[derive(Clone, Debug, Default)]
pub struct PaycheckForm {
    hours: String,
    pay_rate: String,
    output: String,
    calculator: PaycheckCalculator,
}

impl PaycheckForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }

    pub fn pay_rate(&self) -> &str {
        &self.pay_rate
    }

    /// Text currently shown in the output area. Empty after [`Self::clear`].
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_hours(
        &mut self,
        text: impl Into<String>,
    ) {
        self.hours = text.into();
    }

    pub fn set_pay_rate(
        &mut self,
        text: impl Into<String>,
    ) {
        self.pay_rate = text.into();
    }

    /// Computes the paycheck from the current fields and replaces the output.
    ///
    /// On success the output holds the three pay lines; on failure it holds
    /// the single error message. Returns `true` on success.
    pub fn compute(&mut self) -> bool {
        match self.calculator.compute(&self.hours, &self.pay_rate) {
            Ok(result) => {
                info!(gross_pay = %result.gross_pay, "paycheck displayed");
                self.output = result.summary();
                true
            }
            Err(error) => {
                warn!(%error, hours = %self.hours, pay_rate = %self.pay_rate, "paycheck rejected");
                self.output = error.to_string();
                false
            }
        }
    }

    /// Erases the output area. The input fields are left as they are.
    pub fn clear(&mut self) {
        self.output.clear();
    }
}

impl fmt::Display for PaycheckForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Hours:    {}", self.hours)?;
        write!(f, "Pay Rate: {}", self.pay_rate)?;
        if !self.output.is_empty() {
            write!(f, "\n\n{}", self.output)?;
        }
        Ok(())
    }
}

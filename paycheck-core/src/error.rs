use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a paycheck cannot be computed from the entered values.
///
/// The `Display` text of each variant is the message shown to the user.
/// Neither variant says which field was at fault.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaycheckError {
    /// Hours or pay rate is not a number (or is too large to represent).
    #[error("Values for hours and pay rate must be numeric")]
    NonNumericInput,

    /// Hours or pay rate is below zero.
    #[error("Inputs must be positive")]
    NegativeInput,
}

//! Paycheck calculation modules.
//!
//! This module provides the hourly paycheck calculator and the rounding and
//! formatting helpers it shares with the result types.

pub mod common;
pub mod paycheck;

pub use paycheck::{
    OVERTIME_RATE, PaycheckCalculator, REGULAR_HOURS_THRESHOLD, TAX_RATE, compute,
};

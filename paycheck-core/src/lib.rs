pub mod calculations;
pub mod error;
pub mod models;
pub mod parse;

pub use calculations::{PaycheckCalculator, compute};
pub use error::PaycheckError;
pub use models::*;

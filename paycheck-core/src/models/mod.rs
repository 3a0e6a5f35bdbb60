mod paycheck_input;
mod paycheck_result;

pub use paycheck_input::PaycheckInput;
pub use paycheck_result::PaycheckResult;

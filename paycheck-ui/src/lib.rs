pub mod form;
pub mod logging;
pub mod session;

pub use form::PaycheckForm;
pub use session::{Command, Session};

/// Banner shown at the top of the form.
pub const TITLE: &str = "Dan's Paycheck Calculator";

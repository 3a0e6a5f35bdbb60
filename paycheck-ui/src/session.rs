//! Interactive terminal session for the paycheck form.
//!
//! Each input line is one command. Reading stops at `exit` or end of input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::TITLE;
use crate::form::PaycheckForm;

const HELP: &str = "\
Commands:
  hours <value>   set the hours worked
  rate <value>    set the hourly pay rate
  compute         compute the paycheck
  clear           clear the displayed paycheck
  show            show the form
  help            show this help
  exit            quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hours(String),
    PayRate(String),
    Compute,
    Clear,
    Show,
    Help,
    Exit,
}

impl Command {
    /// Parses a non-empty input line. Keywords are case-insensitive.
    ///
    /// Returns `None` for unknown keywords.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let value = rest.trim().to_string();

        match keyword.to_ascii_lowercase().as_str() {
            "hours" | "h" => Some(Self::Hours(value)),
            "rate" | "payrate" | "r" => Some(Self::PayRate(value)),
            "compute" | "c" => Some(Self::Compute),
            "clear" => Some(Self::Clear),
            "show" | "s" => Some(Self::Show),
            "help" | "?" => Some(Self::Help),
            "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drives a [`PaycheckForm`] from line-oriented input.
pub struct Session<R, W> {
    form: PaycheckForm,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self {
            form: PaycheckForm::new(),
            input,
            output,
        }
    }

    /// Runs until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Invalid hours or pay rate are shown to the user, not returned.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        writeln!(self.output, "{TITLE}\n\n{HELP}").context("failed to write banner")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ").context("failed to write prompt")?;
            self.output.flush().context("failed to flush output")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read input")?;
            if read == 0 {
                writeln!(self.output).context("failed to write output")?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(command) => {
                    if !self.apply(command)? {
                        break;
                    }
                }
                None => writeln!(
                    self.output,
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    line.trim()
                )
                .context("failed to write output")?,
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Applies one command. Returns `false` when the session should end.
    fn apply(
        &mut self,
        command: Command,
    ) -> Result<bool> {
        debug!(?command, "applying command");
        match command {
            Command::Hours(value) => self.form.set_hours(value),
            Command::PayRate(value) => self.form.set_pay_rate(value),
            Command::Compute => {
                self.form.compute();
                writeln!(self.output, "{}", self.form.output()).context("failed to write output")?;
            }
            Command::Clear => self.form.clear(),
            Command::Show => writeln!(self.output, "{}", self.form).context("failed to write output")?,
            Command::Help => writeln!(self.output, "{HELP}").context("failed to write output")?,
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }

    pub fn form(&self) -> &PaycheckForm {
        &self.form
    }

    /// Consumes the session, returning the form and the output sink.
    pub fn into_parts(self) -> (PaycheckForm, W) {
        (self.form, self.output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_reads_field_values() {
        assert_eq!(Command::parse("hours 45"), Some(Command::Hours("45".to_string())));
        assert_eq!(
            Command::parse("  RATE   15.5  "),
            Some(Command::PayRate("15.5".to_string()))
        );
    }

    #[test]
    fn parse_keeps_whole_value_text() {
        assert_eq!(
            Command::parse("hours 4 5"),
            Some(Command::Hours("4 5".to_string()))
        );
    }

    #[test]
    fn parse_allows_empty_value() {
        assert_eq!(Command::parse("hours"), Some(Command::Hours(String::new())));
    }

    #[test]
    fn parse_reads_actions() {
        assert_eq!(Command::parse("compute"), Some(Command::Compute));
        assert_eq!(Command::parse("Clear"), Some(Command::Clear));
        assert_eq!(Command::parse("show"), Some(Command::Show));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("quit"), Some(Command::Exit));
    }

    #[test]
    fn parse_rejects_unknown_keyword() {
        assert_eq!(Command::parse("calculate"), None);
    }

    #[test]
    fn apply_sets_fields_without_output() {
        let mut session = Session::new(&b""[..], Vec::new());
        assert!(session.apply(Command::Hours("45".to_string())).unwrap());
        assert!(session.apply(Command::PayRate("20".to_string())).unwrap());

        assert_eq!(session.form().hours(), "45");
        assert_eq!(session.form().pay_rate(), "20");
        let (_, output) = session.into_parts();
        assert!(output.is_empty());
    }

    #[test]
    fn apply_exit_ends_session() {
        let mut session = Session::new(&b""[..], Vec::new());

        assert!(!session.apply(Command::Exit).unwrap());
        assert!(session.apply(Command::Clear).unwrap());
    }
}

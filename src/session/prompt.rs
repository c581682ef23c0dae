//! Console prompts
//!
//! Line-based input and output for the interactive session. The console is
//! generic over its reader and writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use crate::error::{GuardianError, GuardianResult};
use crate::models::Amount;

/// Message printed when a y/n answer is anything else
pub const INVALID_YES_NO: &str = "Invalid option! Please enter only Y or N.";

/// A prompting console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> GuardianResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line
    ///
    /// Fails with `InputClosed` at end of input.
    pub fn ask(&mut self, prompt: &str) -> GuardianResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GuardianError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a y/n question until the answer is one of them
    pub fn confirm(&mut self, prompt: &str) -> GuardianResult<bool> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say(INVALID_YES_NO)?,
            }
        }
    }

    /// Ask for an amount until the answer is a numeric literal
    pub fn ask_amount(&mut self, prompt: &str) -> GuardianResult<Amount> {
        loop {
            let answer = self.ask(prompt)?;
            match Amount::parse(&answer) {
                Ok(amount) => return Ok(amount),
                Err(_) => self.say("Please enter a valid number.\n")?,
            }
        }
    }

    /// Ask for a selection in 0..=max until one is given
    pub fn select(&mut self, prompt: &str, max: usize) -> GuardianResult<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match validate_selection(&answer, max) {
                Ok(selection) => return Ok(selection),
                Err(message) => self.say(&format!("\nInvalid data: {} Please try again.\n", message))?,
            }
        }
    }

    /// Consume the console, returning its writer
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Check a numbered-list selection
fn validate_selection(answer: &str, max: usize) -> Result<usize, &'static str> {
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please select only numbers");
    }

    match answer.parse::<usize>() {
        Ok(selection) if selection <= max => Ok(selection),
        _ => Err("Select a number from the list."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut c = console("  hello  \n");
        assert_eq!(c.ask("> ").unwrap(), "hello");
        assert!(matches!(c.ask("> "), Err(GuardianError::InputClosed)));
    }

    #[test]
    fn test_confirm_reprompts() {
        let mut c = console("maybe\nY\n");
        assert!(c.confirm("Sure? y/n ").unwrap());
        let out = output(c);
        assert_eq!(out.matches("Sure? y/n").count(), 2);
        assert!(out.contains(INVALID_YES_NO));
    }

    #[test]
    fn test_ask_amount_rejects_malformed() {
        let mut c = console("12.5.3\n-3\n12.5\n");
        assert_eq!(c.ask_amount("Income: ").unwrap(), Amount::from_cents(1_250));
        assert_eq!(output(c).matches("Please enter a valid number.").count(), 2);
    }

    #[test]
    fn test_select_messages() {
        let mut c = console("abc\n13\n7\n");
        assert_eq!(c.select("Your selection: ", 12).unwrap(), 7);
        let out = output(c);
        assert!(out.contains("Invalid data: Please select only numbers Please try again."));
        assert!(out.contains("Invalid data: Select a number from the list. Please try again."));
    }

    #[test]
    fn test_validate_selection() {
        assert_eq!(validate_selection("0", 12), Ok(0));
        assert_eq!(validate_selection("12", 12), Ok(12));
        assert!(validate_selection("", 12).is_err());
        assert!(validate_selection("-1", 12).is_err());
        assert!(validate_selection("99999999999999999999999", 12).is_err());
    }
}

//! Validated console input.
//!
//! Every numeric prompt loops until it gets an in-range number: a rejected
//! answer prints the `InputError` message and asks again. The only ways out
//! without a value are end-of-input and I/O failure.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use tracing::trace;

use crate::core::{InputError, RaceError};

/// Parse a menu answer and check it lies in `min..=max`.
///
/// A whole number too large for `i64` is out of range, not "not a number".
pub fn parse_choice(text: &str, min: u32, max: u32) -> Result<u32, InputError> {
    let trimmed = text.trim();
    let value: i64 = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(InputError::NotANumber(trimmed.to_string())),
        },
    };
    if value < i64::from(min) || value > i64::from(max) {
        return Err(InputError::OutOfRange { value, min, max });
    }
    Ok(value as u32)
}

/// Prompt/answer loop over any line source and sink.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line of text.
    pub fn say(&mut self, text: &str) -> Result<(), RaceError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, RaceError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RaceError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a number in `min..=max`, reprompting until one is given.
    pub fn choose_number(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, RaceError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_choice(&line, min, max) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    trace!(answer = %line, %err, "rejected numeric answer");
                    self.say(&err.to_string())?;
                }
            }
        }
    }
}

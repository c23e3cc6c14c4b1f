//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};

/// Shown when a numeric prompt receives something that does not parse.
const NOT_A_NUMBER: &str = "Please enter a valid number.";

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Write text without a trailing newline.
    pub fn write(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and return the next line with its terminator removed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD. Returns
    /// `Error::InputClosed` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(Error::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!(prompt, answer = %line, "Read answer");
        Ok(line)
    }

    /// Ask until the answer parses as a `T`.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(NOT_A_NUMBER)?,
            }
        }
    }

    /// Ask until the answer parses and satisfies `accept`.
    ///
    /// After a rejected value the question is repeated with `retry_prompt`.
    pub fn ask_until<T, F>(&mut self, prompt: &str, retry_prompt: &str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        let mut current = prompt;
        loop {
            let value = self.ask_number(current)?;
            if accept(&value) {
                return Ok(value);
            }
            current = retry_prompt;
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

use std::io::{self, BufRead, Write};

use crate::error::{RepoStatsError, Result};

/// Console prompts over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until a non-blank username is entered. Running out of input
    /// yields `EmptyUsername`.
    pub fn read_username(&mut self) -> Result<String> {
        writeln!(self.output, "Enter Github username: ").map_err(console_err)?;
        loop {
            match self.read_line().map_err(console_err)? {
                None => return Err(RepoStatsError::EmptyUsername),
                Some(line) if line.is_empty() => {
                    writeln!(self.output, "Username can't be empty. Try again").map_err(console_err)?;
                    writeln!(self.output, "Enter Github username: ").map_err(console_err)?;
                }
                Some(line) => return Ok(line),
            }
        }
    }

    /// y/n question; only a lowercase `y` counts as yes, end of input as no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(matches!(answer, Some(a) if a == "y"))
    }

    /// Like `confirm`, but `Y` is accepted too
    pub fn confirm_ignore_case(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(matches!(answer, Some(a) if a.eq_ignore_ascii_case("y")))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", question).map_err(console_err)?;
        self.read_line().map_err(console_err)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

pub(crate) fn console_err(err: io::Error) -> RepoStatsError {
    RepoStatsError::ConsoleIo(err.to_string())
}

//! Interactive menu over the four path operations
//!
//! The shell reads a menu choice per line, then one or two operand lines,
//! and prints each result on its own line. Operation failures go to the
//! error stream and the loop continues; running out of input in the middle
//! of an operation ends the session with an error.

use crate::cwd::WorkingDirectory;
use crate::error::Result as PathResult;
use crate::normalize::Normalizer;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Fatal shell failures
#[derive(Error, Debug)]
pub enum ShellError {
    /// Input ended while an operand was expected
    #[error("Unexpected EOF")]
    UnexpectedEof,

    /// Reading input or writing output failed
    #[error("input error: {0}")]
    Io(#[from] io::Error),
}

const MENU: &str = "Select a function:\n\
                    1. join\n\
                    2. absolute\n\
                    3. relativize\n\
                    4. relative\n\
                    0. Exit\n";

/// Menu-driven session reading from `input` and writing to `out` and `err`
pub struct Shell<D, R, W, E> {
    normalizer: Normalizer<D>,
    input: R,
    out: W,
    err: E,
}

impl<D, R, W, E> Shell<D, R, W, E>
where
    D: WorkingDirectory,
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(normalizer: Normalizer<D>, input: R, out: W, err: E) -> Self {
        Self {
            normalizer,
            input,
            out,
            err,
        }
    }

    /// Run until the user exits or input runs out at the menu prompt
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            write!(self.out, "{MENU}Your choice: ")?;
            self.out.flush()?;

            let Some(line) = self.read_choice()? else {
                return Ok(());
            };
            let choice = match line.trim().parse::<i32>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.out, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            log::debug!("menu choice {choice}");
            match choice {
                0 => return Ok(()),
                1 => {
                    let base = self.prompt("Enter base path: ")?;
                    let appended = self.prompt("Enter appended path: ")?;
                    let result = self.normalizer.join(&base, &appended);
                    self.report(result)?;
                }
                2 => {
                    let path = self.prompt("Enter path: ")?;
                    let result = self.normalizer.absolute(&path);
                    self.report(result)?;
                }
                3 => {
                    let base = self.prompt("Enter base path: ")?;
                    let path = self.prompt("Enter path: ")?;
                    let result = self.normalizer.relativize(&base, &path);
                    self.report(result)?;
                }
                4 => {
                    let path = self.prompt("Enter path: ")?;
                    let result = self.normalizer.relative(&path);
                    self.report(result)?;
                }
                _ => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Next non-blank line, or `None` at end of input
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        while let Some(line) = self.read_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// One line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()?.ok_or(ShellError::UnexpectedEof)
    }

    fn report(&mut self, result: PathResult<String>) -> io::Result<()> {
        match result {
            Ok(path) => writeln!(self.out, "{path}"),
            Err(e) => writeln!(self.err, "error: {e}"),
        }
    }
}

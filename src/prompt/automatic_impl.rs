//! Input provider that replays predefined answers
//!
//! Useful for automation, testing, or CI/CD environments where nobody is at
//! the keyboard. Once the script runs out every read returns an empty line,
//! just like a closed stdin.

use super::interface::{LineReader, SecretReader};
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Automatic input provider that gives predefined responses
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<Option<String>>,
    secrets: VecDeque<Option<String>>,
    reads: usize,
    ends_secret_line: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a visible line
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push_back(Some(line.to_string()));
        self
    }

    /// Queue several visible lines in order
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(|l| Some(l.into())));
        self
    }

    /// Queue a failing line read
    pub fn with_line_error(mut self) -> Self {
        self.lines.push_back(None);
        self
    }

    /// Queue a hidden line
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secrets.push_back(Some(secret.to_string()));
        self
    }

    /// Queue a failing hidden read
    pub fn with_secret_error(mut self) -> Self {
        self.secrets.push_back(None);
        self
    }

    /// Behave like a console that prints its own newline after hidden input
    pub fn ending_secret_line(mut self) -> Self {
        self.ends_secret_line = true;
        self
    }

    /// Number of reads served so far, of either kind.
    pub fn reads(&self) -> usize {
        self.reads
    }

    fn next(queue: &mut VecDeque<Option<String>>, kind: &str) -> Result<String> {
        match queue.pop_front() {
            Some(Some(answer)) => Ok(answer),
            Some(None) => Err(Error::IoError(std::io::Error::other(format!(
                "scripted {kind} read failure"
            )))),
            None => Ok(String::new()),
        }
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self) -> Result<String> {
        self.reads += 1;
        Self::next(&mut self.lines, "line")
    }
}

impl SecretReader for ScriptedInput {
    fn read_secret(&mut self) -> Result<String> {
        self.reads += 1;
        Self::next(&mut self.secrets, "secret")
    }

    fn ended_line(&self) -> bool {
        self.ends_secret_line
    }
}

//! Terminal-backed implementations of the prompt interfaces

use super::interface::{Interactivity, LineReader, SecretReader};
use crate::{constants::USE_DEFAULT_ENV, error::Result};
use dialoguer::console::Term;
use log::debug;
use std::io::{self, BufRead, IsTerminal, Stdin};

/// Line reader over any buffered source
pub struct BufLineReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BufLineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineReader for BufLineReader<R> {
    fn read_line(&mut self) -> Result<String> {
        read_trimmed_line(&mut self.reader)
    }
}

/// Line reader over the process stdin.
///
/// The stdin lock is taken for one read only. The console reads hidden input
/// through the same stdin handle and would block on a lock held here.
pub struct StdinLineReader {
    stdin: Stdin,
}

impl StdinLineReader {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinLineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for StdinLineReader {
    fn read_line(&mut self) -> Result<String> {
        read_trimmed_line(&mut self.stdin.lock())
    }
}

fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        debug!("Input exhausted");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads hidden input from the controlling terminal
pub struct ConsoleSecretReader {
    term: Term,
    ended_line: bool,
}

impl ConsoleSecretReader {
    pub fn new() -> Self {
        Self { term: Term::stdout(), ended_line: false }
    }
}

impl Default for ConsoleSecretReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretReader for ConsoleSecretReader {
    fn read_secret(&mut self) -> Result<String> {
        self.ended_line = false;
        let secret = self.term.read_secure_line()?;
        // The console writes its own newline after a read from a terminal.
        self.ended_line = self.term.is_term();
        Ok(secret)
    }

    fn ended_line(&self) -> bool {
        self.ended_line
    }
}

/// Stdin for visible answers, the console for hidden ones
pub struct TerminalInput {
    lines: StdinLineReader,
    secrets: ConsoleSecretReader,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self { lines: StdinLineReader::new(), secrets: ConsoleSecretReader::new() }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for TerminalInput {
    fn read_line(&mut self) -> Result<String> {
        self.lines.read_line()
    }
}

impl SecretReader for TerminalInput {
    fn read_secret(&mut self) -> Result<String> {
        self.secrets.read_secret()
    }

    fn ended_line(&self) -> bool {
        self.secrets.ended_line()
    }
}

impl Interactivity {
    /// Inspect the process environment and standard streams.
    ///
    /// Call once at startup; a non-empty `PROMPTER_USE_DEFAULT` forces
    /// defaults, and prompting is interactive only when both stdin and
    /// stdout are terminals.
    pub fn detect() -> Self {
        let detected = Self::from_parts(
            std::env::var(USE_DEFAULT_ENV).ok().as_deref(),
            io::stdin().is_terminal(),
            io::stdout().is_terminal(),
        );
        debug!("Detected {detected:?}");
        detected
    }

    /// Combine an override value with the terminal checks.
    pub fn from_parts(env_override: Option<&str>, stdin_tty: bool, stdout_tty: bool) -> Self {
        let force_default = env_override.is_some_and(|v| !v.is_empty());
        Self::new(force_default, stdin_tty && stdout_tty)
    }
}

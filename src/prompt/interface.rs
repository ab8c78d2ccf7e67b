//! Pure interfaces for acquiring answers
//!
//! The prompt loop only depends on these traits. Concrete terminal-backed
//! implementations live in `terminal`, canned ones in `automatic_impl`.

use crate::error::Result;

/// Reads one line of visible input.
pub trait LineReader {
    /// Return the next line without its trailing CR/LF, or an empty string
    /// once the input is exhausted.
    fn read_line(&mut self) -> Result<String>;
}

/// Reads one line without echoing it.
pub trait SecretReader {
    fn read_secret(&mut self) -> Result<String>;

    /// Whether the last read already moved the cursor to a new line.
    fn ended_line(&self) -> bool {
        false
    }
}

/// Combined interface that provides every kind of input
pub trait InputProvider: LineReader + SecretReader {}

// Blanket implementation for any type that implements both readers
impl<T> InputProvider for T where T: LineReader + SecretReader {}

/// How the surrounding process is attached to the user.
///
/// Detected once at startup and handed to each prompter, so the prompt loop
/// never consults process-wide state on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactivity {
    /// Accept the default for every prompt.
    pub force_default: bool,
    /// Both stdin and stdout are attached to a terminal.
    pub is_interactive: bool,
}

impl Interactivity {
    pub fn new(force_default: bool, is_interactive: bool) -> Self {
        Self { force_default, is_interactive }
    }

    /// Interactive session with no override.
    pub fn interactive() -> Self {
        Self::new(false, true)
    }

    /// Whether prompts should skip reading and return their default.
    pub fn skips_input(&self) -> bool {
        self.force_default || !self.is_interactive
    }
}

impl Default for Interactivity {
    fn default() -> Self {
        Self::interactive()
    }
}

//! One-call prompts on the real terminal
//!
//! Each helper detects interactivity, builds a prompter and asks on
//! stdin/stdout. Use [`PromptHandler`] directly to inject other I/O.

use crate::{
    error::Result,
    prompt::{handler::PromptHandler, terminal::TerminalInput, Interactivity, Prompter},
};

fn base(message: &str) -> Prompter {
    Prompter::new(message).with_interactivity(Interactivity::detect())
}

fn terminal() -> PromptHandler<TerminalInput, std::io::Stdout> {
    PromptHandler::new(TerminalInput::new(), std::io::stdout())
}

/// Ask for free text, falling back to `default` on an empty answer.
pub fn ask(message: &str, default: &str) -> Result<String> {
    terminal().ask(base(message), default)
}

/// Ask a `y/n` question.
pub fn yn(message: &str, default_to_yes: bool) -> Result<bool> {
    terminal().yn(base(message), default_to_yes)
}

/// Ask a `yes/no` question.
pub fn yes_no(message: &str, default_to_yes: bool) -> Result<bool> {
    terminal().yes_no(base(message), default_to_yes)
}

/// Ask for one of `choices`.
pub fn choose(message: &str, choices: &[String], default: &str) -> Result<String> {
    terminal().choose(base(message), choices, default)
}

/// Ask for hidden input.
pub fn password(message: &str) -> Result<String> {
    terminal().password(base(message))
}

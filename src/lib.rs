/// Handles argument parsing for the command line tool.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Prompter configuration, rendering and the prompt loop.
pub mod prompt;

/// One-call prompts on the real terminal.
pub mod shortcuts;

/// Answer validators
pub mod validation;

pub use prompt::{CompiledPrompter, Interactivity, Prompter};

//! Validated terminal prompts
//!
//! The module is structured in layers:
//! - `interface`: abstract readers and the interactivity flags
//! - `format`: prompt and error message rendering
//! - `handler`: the render/read/validate/retry loop
//! - `terminal`: concrete readers backed by stdin and the console
//! - `automatic_impl`: canned readers for automation and tests

use crate::{
    error::{Error, Result},
    validation::Rule,
};
use regex::Regex;

pub mod automatic_impl;
pub mod format;
pub mod handler;
pub mod interface;
pub mod terminal;

// Re-export interfaces for easy access
pub use interface::*;

use handler::PromptHandler;
use terminal::TerminalInput;

/// Configuration of a single question.
///
/// Build it with the `with_*` methods, then [`Prompter::compile`] it once
/// into a [`CompiledPrompter`] that can be asked any number of times.
#[derive(Debug, Clone, Default)]
pub struct Prompter {
    pub message: String,
    /// Offered answers. In menu mode, the enumerated menu.
    pub choices: Vec<String>,
    pub ignore_case: bool,
    pub default: String,
    /// 1-based menu item used on empty input, 0 for none.
    pub default_menu_item: usize,
    /// When both choices and a pattern are set, the pattern decides.
    pub pattern: Option<Regex>,
    /// Read the answer without echo, for passwords and so on.
    pub no_echo: bool,
    pub use_default: bool,
    pub is_menu: bool,
    /// Replaces "Choose" under a menu.
    pub menu_prompt: String,
    pub interactivity: Interactivity,
    /// Give up after this many rejected answers. `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl Prompter {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Default::default() }
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_default_menu_item(mut self, item: usize) -> Self {
        self.default_menu_item = item;
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn no_echo(mut self, no_echo: bool) -> Self {
        self.no_echo = no_echo;
        self
    }

    pub fn use_default(mut self, use_default: bool) -> Self {
        self.use_default = use_default;
        self
    }

    /// Present the choices as a numbered menu.
    pub fn menu(mut self, is_menu: bool) -> Self {
        self.is_menu = is_menu;
        self
    }

    pub fn with_menu_prompt(mut self, menu_prompt: impl Into<String>) -> Self {
        self.menu_prompt = menu_prompt.into();
        self
    }

    pub fn with_interactivity(mut self, interactivity: Interactivity) -> Self {
        self.interactivity = interactivity;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Derive the validation rule and freeze the configuration.
    pub fn compile(self) -> Result<CompiledPrompter> {
        if self.max_attempts == Some(0) {
            return Err(Error::ValidationError(
                "max attempts must be at least 1".to_string(),
            ));
        }
        let rule =
            Rule::derive(self.pattern.as_ref(), &self.choices, self.ignore_case, self.is_menu)?;
        Ok(CompiledPrompter { config: self, rule })
    }
}

/// A [`Prompter`] together with its derived validation rule.
#[derive(Debug, Clone)]
pub struct CompiledPrompter {
    config: Prompter,
    rule: Rule,
}

impl CompiledPrompter {
    pub fn config(&self) -> &Prompter {
        &self.config
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Prompt text shown before reading.
    pub fn msg(&self) -> String {
        format::render_message(&self.config)
    }

    /// Hint printed after a rejected answer. May be empty.
    pub fn error_msg(&self) -> String {
        format::render_error(&self.config)
    }

    pub fn input_is_valid(&self, input: &str) -> bool {
        crate::validation::input_is_valid(
            &self.rule,
            input,
            self.config.is_menu,
            self.config.choices.len(),
        )
    }

    /// Answer substituted for an empty line.
    pub fn fallback(&self) -> String {
        if self.config.is_menu {
            self.config.default_menu_item.to_string()
        } else {
            self.config.default.clone()
        }
    }

    /// Whether this prompt returns its default without reading.
    pub fn skips_input(&self) -> bool {
        self.config.use_default || self.config.interactivity.skips_input()
    }

    /// Ask on the real terminal: prompt on stdout, answer from stdin.
    pub fn prompt(&self) -> Result<String> {
        let mut handler = PromptHandler::new(TerminalInput::new(), std::io::stdout());
        handler.run(self)
    }
}

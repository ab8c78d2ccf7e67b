//! The render/read/validate/retry loop
//!
//! `PromptHandler` owns the input provider and the output the prompt is
//! written to, and drives a [`CompiledPrompter`] until an answer is accepted.

use super::{interface::InputProvider, CompiledPrompter, Prompter};
use crate::{
    constants::{answers, menu},
    error::{Error, Result},
};
use log::{debug, info, warn};
use std::io::Write;

/// Runs prompts against an input provider and an output sink
pub struct PromptHandler<P: InputProvider, W: Write> {
    provider: P,
    out: W,
}

impl<P: InputProvider, W: Write> PromptHandler<P, W> {
    pub fn new(provider: P, out: W) -> Self {
        Self { provider, out }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (P, W) {
        (self.provider, self.out)
    }

    /// Ask until an answer is accepted.
    ///
    /// Errors only when the prompt cannot be written or the retry cap is hit.
    /// Failed reads count as empty input and fall back to the default.
    pub fn run(&mut self, prompter: &CompiledPrompter) -> Result<String> {
        let config = prompter.config();
        let mut rejected = 0;

        loop {
            write!(self.out, "{}", prompter.msg())?;
            self.out.flush()?;

            if prompter.skips_input() {
                info!("Accepting default for '{}' without reading input", config.message);
                return Ok(config.default.clone());
            }

            let mut input = self.read(config)?;
            if input.is_empty() {
                input = prompter.fallback();
                debug!("Empty answer, falling back to '{input}'");
            }

            if prompter.input_is_valid(&input) {
                debug!("Accepted answer '{input}'");
                return Ok(input);
            }

            rejected += 1;
            debug!("Rejected answer '{input}' (attempt {rejected})");
            writeln!(self.out, "{}", prompter.error_msg())?;
            if config.is_menu {
                write!(self.out, "{}", menu::CLEAR_SCREEN)?;
            }

            if let Some(max) = config.max_attempts {
                if rejected >= max {
                    warn!("Giving up on '{}' after {rejected} attempt(s)", config.message);
                    return Err(Error::AttemptsExhausted { attempts: rejected });
                }
            }
        }
    }

    fn read(&mut self, config: &Prompter) -> Result<String> {
        if config.no_echo {
            let secret = self.provider.read_secret().unwrap_or_else(|e| {
                debug!("Masked read failed, treating as empty input: {e}");
                String::new()
            });
            // Enter was not echoed.
            if !self.provider.ended_line() {
                writeln!(self.out)?;
            }
            Ok(secret)
        } else {
            Ok(self.provider.read_line().unwrap_or_else(|e| {
                debug!("Line read failed, treating as empty input: {e}");
                String::new()
            }))
        }
    }

    /// Free text with a default.
    pub fn ask(&mut self, base: Prompter, default: &str) -> Result<String> {
        self.run(&base.with_default(default).compile()?)
    }

    /// `y/n` question, case-insensitive. True when the answer is `y`.
    pub fn yn(&mut self, base: Prompter, default_to_yes: bool) -> Result<bool> {
        let default = if default_to_yes { answers::Y } else { answers::N };
        let prompter = base
            .with_choices([answers::Y, answers::N])
            .ignore_case(true)
            .with_default(default)
            .compile()?;
        Ok(self.run(&prompter)?.to_lowercase() == answers::Y)
    }

    /// `yes/no` question, case-insensitive. True when the answer is `yes`.
    pub fn yes_no(&mut self, base: Prompter, default_to_yes: bool) -> Result<bool> {
        let default = if default_to_yes { answers::YES } else { answers::NO };
        let prompter = base
            .with_choices([answers::YES, answers::NO])
            .ignore_case(true)
            .with_default(default)
            .compile()?;
        Ok(self.run(&prompter)?.to_lowercase() == answers::YES)
    }

    /// Pick one of `choices`, defaulting to `default`.
    pub fn choose(
        &mut self,
        base: Prompter,
        choices: &[String],
        default: &str,
    ) -> Result<String> {
        let prompter =
            base.with_choices(choices.iter().cloned()).with_default(default).compile()?;
        self.run(&prompter)
    }

    /// Hidden input.
    pub fn password(&mut self, base: Prompter) -> Result<String> {
        self.run(&base.no_echo(true).compile()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{automatic_impl::ScriptedInput, Interactivity};
    use regex::Regex;

    fn handler(input: ScriptedInput) -> PromptHandler<ScriptedInput, Vec<u8>> {
        PromptHandler::new(input, Vec::new())
    }

    fn output(handler: &PromptHandler<ScriptedInput, Vec<u8>>) -> String {
        String::from_utf8(handler.output().clone()).unwrap()
    }

    #[test_log::test]
    fn returns_literal_answer_without_normalising() {
        let prompter =
            Prompter::new("Continue?").with_choices(["y", "n"]).ignore_case(true).compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("Y"));
        assert_eq!(handler.run(&prompter).unwrap(), "Y");
        assert_eq!(output(&handler), "Continue? (y/n): ");
    }

    #[test]
    fn accepts_anything_without_rule() {
        let prompter = Prompter::new("Say something").compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("  spaced out "));
        assert_eq!(handler.run(&prompter).unwrap(), "  spaced out ");
    }

    #[test]
    fn empty_answer_without_default_is_accepted() {
        let prompter = Prompter::new("Say something").compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line(""));
        assert_eq!(handler.run(&prompter).unwrap(), "");
    }

    #[test]
    fn empty_answer_uses_default() {
        let prompter = Prompter::new("Host").with_default("localhost").compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line(""));
        assert_eq!(handler.run(&prompter).unwrap(), "localhost");
    }

    #[test_log::test]
    fn retries_until_valid_and_prints_hint() {
        let prompter = Prompter::new("Pick").with_choices(["a", "b", "c"]).compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("d").with_line("b"));
        assert_eq!(handler.run(&prompter).unwrap(), "b");
        assert_eq!(
            output(&handler),
            "Pick (a/b/c): # Enter `a`, `b` or `c`\nPick (a/b/c): "
        );
        assert_eq!(handler.provider().reads(), 2);
    }

    #[test]
    fn menu_accepts_default_and_off_by_one_index() {
        let prompter = Prompter::new("Pick")
            .with_choices(["a", "b", "c"])
            .with_default_menu_item(2)
            .menu(true)
            .compile()
            .unwrap();

        let mut empty = handler(ScriptedInput::new().with_line(""));
        assert_eq!(empty.run(&prompter).unwrap(), "2");

        let mut past_end = handler(ScriptedInput::new().with_line("4"));
        assert_eq!(past_end.run(&prompter).unwrap(), "4");
    }

    #[test]
    fn menu_rejection_clears_screen() {
        let prompter = Prompter::new("Pick")
            .with_choices(["a", "b", "c"])
            .with_default_menu_item(2)
            .menu(true)
            .compile()
            .unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("5").with_line("0").with_line("3"));
        assert_eq!(handler.run(&prompter).unwrap(), "3");

        let menu = "Pick\n---\n [1] a\n [2] b\n [3] c\nChoose [2]: ";
        let rejection = format!("\n{}", menu::CLEAR_SCREEN);
        assert_eq!(output(&handler), format!("{menu}{rejection}{menu}{rejection}{menu}"));
    }

    #[test]
    fn auto_accept_skips_reading() {
        let prompter = Prompter::new("Host")
            .with_default("localhost")
            .with_interactivity(Interactivity::new(true, true))
            .compile()
            .unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("ignored"));
        assert_eq!(handler.run(&prompter).unwrap(), "localhost");
        assert_eq!(handler.provider().reads(), 0);
        assert_eq!(output(&handler), "Host [localhost]: ");
    }

    #[test]
    fn auto_accept_ignores_validation() {
        let prompter = Prompter::new("Pick")
            .with_choices(["a", "b"])
            .with_default("zzz")
            .use_default(true)
            .compile()
            .unwrap();
        let mut handler = handler(ScriptedInput::new());
        assert_eq!(handler.run(&prompter).unwrap(), "zzz");
    }

    #[test]
    fn pattern_overrides_choices() {
        let prompter = Prompter::new("Port")
            .with_choices(["80", "443"])
            .with_pattern(Regex::new("^[0-9]+$").unwrap())
            .compile()
            .unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("http").with_line("8080"));
        assert_eq!(handler.run(&prompter).unwrap(), "8080");
        assert!(output(&handler).contains("# Answer should match /^[0-9]+$/\n"));
    }

    #[test]
    fn read_errors_fall_back_to_default() {
        let prompter = Prompter::new("Host").with_default("localhost").compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line_error());
        assert_eq!(handler.run(&prompter).unwrap(), "localhost");
    }

    #[test]
    fn secret_read_prints_newline() {
        let prompter = Prompter::new("Password").no_echo(true).compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_secret("hunter2"));
        assert_eq!(handler.run(&prompter).unwrap(), "hunter2");
        assert_eq!(output(&handler), "Password: \n");
    }

    #[test]
    fn secret_read_does_not_repeat_console_newline() {
        let prompter = Prompter::new("Password").no_echo(true).compile().unwrap();
        let mut handler =
            handler(ScriptedInput::new().with_secret("hunter2").ending_secret_line());
        assert_eq!(handler.run(&prompter).unwrap(), "hunter2");
        assert_eq!(output(&handler), "Password: ");
    }

    #[test]
    fn secret_errors_fall_back_to_default() {
        let prompter =
            Prompter::new("Token").no_echo(true).with_default("none").compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_secret_error());
        assert_eq!(handler.run(&prompter).unwrap(), "none");
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let prompter =
            Prompter::new("Pick").with_choices(["a"]).with_max_attempts(2).compile().unwrap();
        let mut handler = handler(ScriptedInput::new().with_line("x").with_line("y").with_line("a"));
        let err = handler.run(&prompter).unwrap_err();
        assert!(matches!(err, Error::AttemptsExhausted { attempts: 2 }));
        assert_eq!(handler.provider().reads(), 2);
    }

    #[test]
    fn yn_shortcut() {
        let mut handler = handler(ScriptedInput::new().with_line("Y").with_line(""));
        assert!(handler.yn(Prompter::new("Proceed?"), false).unwrap());
        assert!(handler.yn(Prompter::new("Proceed?"), true).unwrap());
        assert_eq!(output(&handler), "Proceed? (y/n) [n]: Proceed? (y/n) [y]: ");
    }

    #[test]
    fn yes_no_shortcut() {
        let mut handler = handler(ScriptedInput::new().with_line("NO").with_line(""));
        assert!(!handler.yes_no(Prompter::new("Deploy?"), true).unwrap());
        assert!(!handler.yes_no(Prompter::new("Deploy?"), false).unwrap());
    }

    #[test]
    fn choose_and_ask_shortcuts() {
        let choices = vec!["red".to_string(), "green".to_string()];
        let mut handler = handler(ScriptedInput::new().with_line("").with_line("bob"));
        assert_eq!(handler.choose(Prompter::new("Color"), &choices, "green").unwrap(), "green");
        assert_eq!(handler.ask(Prompter::new("Name"), "alice").unwrap(), "bob");
    }

    #[test]
    fn password_shortcut() {
        let mut handler = handler(ScriptedInput::new().with_secret("s3cret"));
        assert_eq!(handler.password(Prompter::new("Password")).unwrap(), "s3cret");
    }
}

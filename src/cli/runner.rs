use crate::{
    cli::Args,
    error::Result,
    prompt::{CompiledPrompter, Interactivity, Prompter},
};
use log::debug;
use regex::Regex;

/// Turns parsed arguments into a prompt and asks it
pub struct Runner {
    args: Args,
    interactivity: Interactivity,
}

impl Runner {
    pub fn new(args: Args, interactivity: Interactivity) -> Self {
        Self { args, interactivity }
    }

    /// Build the compiled prompter described by the arguments.
    pub fn build_prompter(&self) -> Result<CompiledPrompter> {
        let args = &self.args;
        let mut prompter = Prompter::new(&args.message)
            .with_choices(args.choices.iter().filter(|c| !c.is_empty()).cloned())
            .ignore_case(args.ignore_case)
            .with_default(&args.default)
            .with_default_menu_item(args.default_item)
            .with_menu_prompt(&args.menu_prompt)
            .menu(args.menu)
            .no_echo(args.no_echo)
            .use_default(args.use_default)
            .with_interactivity(self.interactivity);

        if let Some(pattern) = &args.regexp {
            prompter = prompter.with_pattern(Regex::new(pattern)?);
        }
        if let Some(max) = args.max_attempts {
            prompter = prompter.with_max_attempts(max);
        }

        debug!("Prompting with {prompter:?}");
        prompter.compile()
    }

    /// Ask on the terminal and return the accepted answer
    pub fn run(self) -> Result<String> {
        self.build_prompter()?.prompt()
    }
}

/// Run the command line flow with the given interactivity.
pub fn run(args: Args, interactivity: Interactivity) -> Result<String> {
    Runner::new(args, interactivity).run()
}

use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Ask a validated question on the terminal and print the answer.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Question shown to the user.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Accepted answers (comma-separated). Menu entries with `--menu`.
    #[arg(short, long, value_delimiter = ',')]
    pub choices: Vec<String>,

    /// Match choices case-insensitively.
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Answer used when the input is empty.
    #[arg(short, long, default_value = "")]
    pub default: String,

    /// Show the choices as a numbered menu and answer with an index.
    #[arg(short, long)]
    pub menu: bool,

    /// Menu item used when the input is empty.
    #[arg(long = "default-item", default_value_t = 0)]
    pub default_item: usize,

    /// Text shown instead of "Choose" under the menu.
    #[arg(long = "menu-prompt", default_value = "")]
    pub menu_prompt: String,

    /// Pattern the answer must match. Takes priority over `--choices`.
    #[arg(short, long)]
    pub regexp: Option<String>,

    /// Read the answer without echo.
    #[arg(long = "no-echo")]
    pub no_echo: bool,

    /// Print the prompt and accept the default without reading.
    #[arg(long = "use-default")]
    pub use_default: bool,

    /// Give up after this many rejected answers.
    #[arg(long = "max-attempts")]
    pub max_attempts: Option<usize>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

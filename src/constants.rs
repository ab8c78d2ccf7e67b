//! Constants used throughout the prompter crate

/// Environment variable that forces every prompt to accept its default
pub const USE_DEFAULT_ENV: &str = "PROMPTER_USE_DEFAULT";

/// Menu layout literals
pub mod menu {
    /// Line printed between the message and the enumerated choices
    pub const SEPARATOR: &str = "---";
    /// Prompt shown under the menu when no custom prompt is configured
    pub const DEFAULT_PROMPT: &str = "Choose";
    /// Home the cursor and clear the screen after a rejected menu answer
    pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
}

/// Answers used by the yes/no shortcuts
pub mod answers {
    pub const Y: &str = "y";
    pub const N: &str = "n";
    pub const YES: &str = "yes";
    pub const NO: &str = "no";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

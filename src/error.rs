use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A user supplied pattern, or the rule built from the choices, failed to compile.
    #[error("Invalid answer pattern. Original error: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The retry cap was reached without a valid answer.
    #[error("No valid answer after {attempts} attempt(s).")]
    AttemptsExhausted { attempts: usize },

    /// Represents inconsistent prompt options
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with the prompter Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

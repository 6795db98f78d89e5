//! Error types.
//!
//! `InputError` is the one recoverable error class: a rejected answer at a
//! prompt. Its message is shown to the human and the prompt repeats, so it
//! never leaves the console layer. `RaceError` covers what a prompt loop
//! cannot recover from.

use thiserror::Error;

/// A rejected answer at a console prompt.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input! Please enter a number.")]
    NotANumber(String),

    #[error("Please choose a number between {min} and {max}.")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Errors that end a match or a console session.
#[derive(Debug, Error)]
pub enum RaceError {
    /// Input reached end-of-file while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A pilot was asked to choose from an empty menu.
    #[error("{0} has no performable action to choose from")]
    NoPerformableAction(String),

    /// A pilot answered with an action that was not on its menu.
    #[error("{driver} picked {choice}, which was not on the menu")]
    OffMenuChoice { driver: String, choice: String },
}

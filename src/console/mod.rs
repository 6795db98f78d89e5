//! Console front end: validated prompts, menus and commentary.

pub mod prompt;
pub mod display;
pub mod commentator;

pub use prompt::{parse_choice, Prompter};
pub use commentator::{choose_driver, ConsoleCommentator};

//! Match flow: the round loop and the events it emits.

pub mod events;
pub mod controller;

pub use events::{Commentator, MatchEvent, NullCommentator};
pub use controller::{MatchBuilder, MatchController, Step};

//! Action catalogs.
//!
//! - `action`: `Move`, `Defense`, the shared `Performable` capability and
//!   catalog references
//! - `roster`: the two drivers and their fixed moves and defenses

pub mod action;
pub mod roster;

pub use action::{Action, ActionRef, Defense, Move, Performable};
pub use roster::DriverKind;

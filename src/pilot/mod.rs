//! Pilots: who makes the choices for each side.
//!
//! - `Pilot`: the trait resolvers call for action and counter choices
//! - `policy`: swappable selection strategies (random, heuristic, scripted)
//! - `AutoPilot`: the automated opponent, built from two policies
//! - `HumanPilot`: numbered console menus over a `Prompter`

pub mod traits;
pub mod policy;
pub mod automated;
pub mod human;

pub use traits::Pilot;
pub use policy::{ActionPolicy, BestDefense, Scripted, UniformRandom};
pub use automated::AutoPilot;
pub use human::HumanPilot;

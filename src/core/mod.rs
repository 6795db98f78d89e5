//! Core types: sides, drivers, match state, RNG, configuration and errors.
//!
//! Everything here is rule-agnostic. The `rules` module decides how these
//! pieces change from turn to turn.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;
pub mod driver;
pub mod state;

pub use side::{Side, SideMap};
pub use rng::RaceRng;
pub use config::{DefensePersistence, MatchConfig, RuleSet, DEFAULT_FUEL, DEFAULT_TIRE_HEALTH};
pub use error::{InputError, RaceError};
pub use driver::{ActionMenu, Driver};
pub use state::MatchState;

//! Match state: round counter, both drivers and declared defenses.
//!
//! The state exclusively owns both drivers. Under the declared-defense rules
//! each side also has an active-defense slot holding the catalog index of
//! the defense it declared most recently.

use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::driver::Driver;
use super::side::{Side, SideMap};
use crate::catalog::{Defense, DriverKind};

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Round number (starts at 1, advances on every turn including skips).
    pub round: u32,

    /// Both drivers.
    pub drivers: SideMap<Driver>,

    /// Declared defense per side (index into that side's defenses).
    pub active_defense: SideMap<Option<usize>>,
}

impl MatchState {
    /// Create a state at round 1 with no declared defenses.
    #[must_use]
    pub fn new(player: Driver, opponent: Driver) -> Self {
        Self {
            round: 1,
            drivers: SideMap::from_pair(player, opponent),
            active_defense: SideMap::default(),
        }
    }

    /// Create a state for the roster driver the player picked; the opponent
    /// drives the other one.
    #[must_use]
    pub fn for_pick(player: DriverKind, config: &MatchConfig) -> Self {
        let build = |kind| Driver::from_kind(kind, config.starting_tire_health, config.starting_fuel);
        Self::new(build(player), build(player.rival()))
    }

    /// Side whose turn the current round is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        Side::for_round(self.round)
    }

    #[must_use]
    pub fn driver(&self, side: Side) -> &Driver {
        &self.drivers[side]
    }

    pub fn driver_mut(&mut self, side: Side) -> &mut Driver {
        &mut self.drivers[side]
    }

    /// The defense `side` currently has declared, if any.
    #[must_use]
    pub fn declared_defense(&self, side: Side) -> Option<&Defense> {
        self.active_defense[side].and_then(|i| self.drivers[side].defense_at(i))
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}

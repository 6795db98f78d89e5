//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A duel always has exactly two sides: the human-driven `Player` and the
//! automated `Opponent`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for drivers, pilots and
//! declared defenses.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The designated player side. Acts on odd rounds.
    Player,
    /// The opposing side. Acts on even rounds.
    Opponent,
}

impl Side {
    /// Get the slot index (player = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    /// Get the other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// The side that acts in the given round (odd = player, even = opponent).
    #[must_use]
    pub const fn for_round(round: u32) -> Side {
        if round % 2 == 1 {
            Side::Player
        } else {
            Side::Opponent
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// One value per side, indexed by `Side`.
///
/// ```
/// use race_duel::core::{Side, SideMap};
///
/// let mut fuel = SideMap::from_pair(500u32, 500);
/// fuel[Side::Opponent] -= 45;
///
/// assert_eq!(fuel[Side::Player], 500);
/// assert_eq!(fuel[Side::Opponent], 455);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create from explicit player and opponent values.
    pub fn from_pair(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

//! Action selection policies for automated pilots.
//!
//! Policies are trait-based so the opponent's behavior can be swapped:
//! - `UniformRandom`: any menu entry with equal probability
//! - `BestDefense`: the strongest defense on the menu
//! - `Scripted`: a fixed sequence of picks, for deterministic tests
//!
//! Any `FnMut(&Driver, &[ActionRef], &mut RaceRng) -> Option<ActionRef>`
//! closure is a policy too.

use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::catalog::ActionRef;
use crate::core::{Driver, RaceRng};

/// Picks one entry from a menu of performable actions.
pub trait ActionPolicy {
    /// Return a menu entry, or `None` to decline.
    fn select(&mut self, driver: &Driver, menu: &[ActionRef], rng: &mut RaceRng) -> Option<ActionRef>;
}

impl<F> ActionPolicy for F
where
    F: FnMut(&Driver, &[ActionRef], &mut RaceRng) -> Option<ActionRef>,
{
    fn select(&mut self, driver: &Driver, menu: &[ActionRef], rng: &mut RaceRng) -> Option<ActionRef> {
        self(driver, menu, rng)
    }
}

/// Uniform choice over the whole menu.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl ActionPolicy for UniformRandom {
    fn select(&mut self, _driver: &Driver, menu: &[ActionRef], rng: &mut RaceRng) -> Option<ActionRef> {
        rng.choose(menu).copied()
    }
}

/// Highest reduction wins; ties go to the lower fuel cost, then to the
/// entry listed first. Moves on the menu are ignored.
#[derive(Clone, Debug, Default)]
pub struct BestDefense;

impl ActionPolicy for BestDefense {
    fn select(&mut self, driver: &Driver, menu: &[ActionRef], _rng: &mut RaceRng) -> Option<ActionRef> {
        menu.iter()
            .filter_map(|&entry| match entry {
                ActionRef::Defense(i) => driver.defense_at(i).map(|d| (entry, d)),
                ActionRef::Move(_) => None,
            })
            .min_by_key(|(_, d)| (Reverse(d.reduction_percent), d.fuel_cost))
            .map(|(entry, _)| entry)
    }
}

/// Replays a fixed list of picks.
///
/// Each call consumes one scripted entry. An entry of `None` declines. When
/// the script runs out, or the scripted pick is not on the menu, the first
/// menu entry is taken.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    picks: VecDeque<Option<ActionRef>>,
}

impl Scripted {
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = Option<ActionRef>>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Script that always picks from the listed entries in order.
    #[must_use]
    pub fn picks(picks: impl IntoIterator<Item = ActionRef>) -> Self {
        Self::new(picks.into_iter().map(Some))
    }

    /// Entries not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl ActionPolicy for Scripted {
    fn select(&mut self, _driver: &Driver, menu: &[ActionRef], _rng: &mut RaceRng) -> Option<ActionRef> {
        match self.picks.pop_front() {
            Some(None) => None,
            Some(Some(pick)) if menu.contains(&pick) => Some(pick),
            _ => menu.first().copied(),
        }
    }
}

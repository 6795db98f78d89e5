//! Match configuration.
//!
//! A match is configured once at startup:
//! - `RuleSet`: which turn resolver drives the duel
//! - `DefensePersistence`: whether a declared defense outlives its first use
//! - Starting tire health and fuel, and the RNG seed
//!
//! Values come from `Default`, then environment variables (`from_env`), then
//! whatever the caller overrides with the `with_*` builders.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tire health every driver starts with.
pub const DEFAULT_TIRE_HEALTH: u32 = 100;

/// Fuel every driver starts with.
pub const DEFAULT_FUEL: u32 = 500;

/// Which rule variant resolves turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    /// The actor attacks and the defender may counter immediately with a
    /// defense that reduces this attack.
    ImmediateCounter,
    /// The actor either attacks or declares a defense; a declared defense
    /// reduces incoming attacks on later turns.
    #[default]
    DeclaredDefense,
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" | "immediate-counter" | "a" => Ok(RuleSet::ImmediateCounter),
            "declared" | "declared-defense" | "b" => Ok(RuleSet::DeclaredDefense),
            other => Err(format!("unknown rule set: {other}")),
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSet::ImmediateCounter => write!(f, "immediate"),
            RuleSet::DeclaredDefense => write!(f, "declared"),
        }
    }
}

/// How long a declared defense stays active under `RuleSet::DeclaredDefense`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefensePersistence {
    /// The slot is never cleared: a declared defense mitigates every incoming
    /// attack until the side declares another one.
    #[default]
    Sticky,
    /// The slot is cleared after it mitigates one attack.
    SingleUse,
}

impl FromStr for DefensePersistence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sticky" => Ok(DefensePersistence::Sticky),
            "single-use" | "single_use" | "single" => Ok(DefensePersistence::SingleUse),
            other => Err(format!("unknown defense persistence: {other}")),
        }
    }
}

impl std::fmt::Display for DefensePersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefensePersistence::Sticky => write!(f, "sticky"),
            DefensePersistence::SingleUse => write!(f, "single-use"),
        }
    }
}

/// Complete configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Turn resolution rules.
    pub rules: RuleSet,

    /// Declared defense lifetime (only consulted by `DeclaredDefense`).
    pub defense_persistence: DefensePersistence,

    /// Tire health both drivers start with.
    pub starting_tire_health: u32,

    /// Fuel both drivers start with.
    pub starting_fuel: u32,

    /// RNG seed for automated pilots. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            defense_persistence: DefensePersistence::default(),
            starting_tire_health: DEFAULT_TIRE_HEALTH,
            starting_fuel: DEFAULT_FUEL,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RACE_RULES` - `immediate` or `declared` (default: declared)
    /// - `RACE_DEFENSE_PERSISTENCE` - `sticky` or `single-use` (default: sticky)
    /// - `RACE_TIRE_HEALTH` - starting tire health (default: 100)
    /// - `RACE_FUEL` - starting fuel (default: 500)
    /// - `RACE_SEED` - RNG seed (default: random)
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup; values that fail to parse are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            lookup(key)?.trim().parse().ok()
        }

        if let Some(rules) = parse(&lookup, "RACE_RULES") {
            self.rules = rules;
        }
        if let Some(persistence) = parse(&lookup, "RACE_DEFENSE_PERSISTENCE") {
            self.defense_persistence = persistence;
        }
        if let Some(health) = parse(&lookup, "RACE_TIRE_HEALTH") {
            self.starting_tire_health = health;
        }
        if let Some(fuel) = parse(&lookup, "RACE_FUEL") {
            self.starting_fuel = fuel;
        }
        if let Some(seed) = parse(&lookup, "RACE_SEED") {
            self.seed = Some(seed);
        }
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_defense_persistence(mut self, persistence: DefensePersistence) -> Self {
        self.defense_persistence = persistence;
        self
    }

    #[must_use]
    pub fn with_tire_health(mut self, health: u32) -> Self {
        self.starting_tire_health = health;
        self
    }

    #[must_use]
    pub fn with_fuel(mut self, fuel: u32) -> Self {
        self.starting_fuel = fuel;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

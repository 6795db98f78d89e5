//! Turn rules.
//!
//! Two rule sets implement `TurnRules`:
//! - `ImmediateCounter`: attack every turn, the defender may counter at once
//! - `DeclaredDefense`: attack or declare a defense that blunts later attacks
//!
//! The match controller calls into `TurnRules` but never interprets moves or
//! defenses directly.

pub mod engine;
pub mod immediate;
pub mod declared;

pub use engine::{DefenseOutcome, MatchResult, MatchStatus, TurnOutcome, TurnReport, TurnRules};
pub use immediate::ImmediateCounter;
pub use declared::DeclaredDefense;

use crate::core::{MatchConfig, RuleSet};

/// Build the rules a configuration asks for.
#[must_use]
pub fn rules_for(config: &MatchConfig) -> Box<dyn TurnRules> {
    match config.rules {
        RuleSet::ImmediateCounter => Box::new(ImmediateCounter),
        RuleSet::DeclaredDefense => Box::new(DeclaredDefense::new(config.defense_persistence)),
    }
}

//! Match events and the commentary hook.
//!
//! The controller emits one event per thing that happens. A `Commentator`
//! turns them into output; the controller also keeps them as history.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, RaceError, RuleSet, Side};
use crate::rules::{MatchResult, TurnReport};

/// Something that happened during a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Emitted once, before the first round.
    Started { rules: RuleSet },
    /// The active side had nothing performable; the round passed.
    RoundSkipped { round: u32, side: Side },
    /// The active side took its turn.
    TurnResolved(TurnReport),
    /// Neither side can act any more; tire health decides.
    FuelExhausted,
    /// The match is over.
    Finished(MatchResult),
}

/// Receives match events as they happen.
pub trait Commentator {
    /// Called after the event's state change, with the current state.
    fn on_event(&mut self, event: &MatchEvent, state: &MatchState) -> Result<(), RaceError>;
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCommentator;

impl Commentator for NullCommentator {
    fn on_event(&mut self, _event: &MatchEvent, _state: &MatchState) -> Result<(), RaceError> {
        Ok(())
    }
}

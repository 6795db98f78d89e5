//! Turn rules trait and match results.
//!
//! A rule set defines:
//! - Which actions a side may pick from on its turn
//! - How one turn mutates the match state
//! - When the match is over
//!
//! The controller calls into `TurnRules` but never applies damage or burns
//! fuel itself.

use serde::{Deserialize, Serialize};

use crate::core::{Driver, MatchState, RaceError, RuleSet, Side, SideMap};
use crate::pilot::Pilot;

/// Terminal outcome of a match. The five outcomes are: the player wins, the
/// opponent wins (both as `Knockout`), nobody wins (`BothOut`), a win on tire
/// health once nobody can act, and a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// The other side's tires failed.
    Knockout { winner: Side },
    /// Both sides' tires failed.
    BothOut,
    /// Neither side could act; `winner` has more tire health.
    TireHealth { winner: Side },
    /// Neither side could act and tire health is equal.
    Draw,
}

impl MatchResult {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchResult::Knockout { winner } | MatchResult::TireHealth { winner } => Some(*winner),
            MatchResult::BothOut | MatchResult::Draw => None,
        }
    }

    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// The terminal state this result belongs to.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        match self {
            MatchResult::Knockout { .. } | MatchResult::BothOut => MatchStatus::EndedByKnockout,
            MatchResult::TireHealth { .. } | MatchResult::Draw => MatchStatus::EndedByDraw,
        }
    }
}

/// Match lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    /// At least one side's tires failed.
    EndedByKnockout,
    /// Neither side had a performable action left.
    EndedByDraw,
}

/// What happened to an incoming move's damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenseOutcome {
    /// No defense was chosen or active.
    Undefended,
    /// The defender countered immediately with this defense.
    Countered(usize),
    /// The defender picked this defense but could not pay for it.
    Unaffordable(usize),
    /// The defender's previously declared defense reduced the damage.
    Declared(usize),
}

impl DefenseOutcome {
    /// Catalog index of the defense that reduced the damage, if any.
    #[must_use]
    pub fn mitigated_by(self) -> Option<usize> {
        match self {
            DefenseOutcome::Countered(i) | DefenseOutcome::Declared(i) => Some(i),
            DefenseOutcome::Undefended | DefenseOutcome::Unaffordable(_) => None,
        }
    }
}

/// What the acting side did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Nothing was performable. No state changed.
    NoAction,
    /// A move hit the other side.
    Attack {
        move_index: usize,
        damage: u32,
        defense: DefenseOutcome,
    },
    /// A defense was declared for later turns.
    Declare { defense_index: usize },
}

/// Summary of one resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub round: u32,
    pub actor: Side,
    pub outcome: TurnOutcome,
}

impl TurnReport {
    #[must_use]
    pub fn damage(&self) -> u32 {
        match self.outcome {
            TurnOutcome::Attack { damage, .. } => damage,
            _ => 0,
        }
    }
}

/// Turn rules trait.
///
/// ## Implementation Notes
///
/// - `can_act`: whether the driver has anything performable under these rules
/// - `resolve_turn`: returns `TurnOutcome::NoAction` without touching state
///   when `can_act` is false for the actor
/// - The round counter belongs to the controller; resolvers never advance it
pub trait TurnRules {
    fn rule_set(&self) -> RuleSet;

    /// Whether `driver` has any action performable under these rules.
    fn can_act(&self, driver: &Driver) -> bool;

    /// Resolve one turn for `actor`.
    fn resolve_turn(
        &self,
        state: &mut MatchState,
        actor: Side,
        pilots: &mut SideMap<Box<dyn Pilot>>,
    ) -> Result<TurnReport, RaceError>;

    /// Check if the match is over.
    ///
    /// Knockouts take precedence. Otherwise, when neither side can act, tire
    /// health decides. Returns `None` while the match continues.
    fn is_terminal(&self, state: &MatchState) -> Option<MatchResult> {
        let player = state.driver(Side::Player);
        let opponent = state.driver(Side::Opponent);

        match (player.is_out(), opponent.is_out()) {
            (true, true) => return Some(MatchResult::BothOut),
            (true, false) => return Some(MatchResult::Knockout { winner: Side::Opponent }),
            (false, true) => return Some(MatchResult::Knockout { winner: Side::Player }),
            (false, false) => {}
        }

        if self.can_act(player) || self.can_act(opponent) {
            return None;
        }

        Some(match player.tire_health.cmp(&opponent.tire_health) {
            std::cmp::Ordering::Greater => MatchResult::TireHealth { winner: Side::Player },
            std::cmp::Ordering::Less => MatchResult::TireHealth { winner: Side::Opponent },
            std::cmp::Ordering::Equal => MatchResult::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_winner() {
        let ko = MatchResult::Knockout { winner: Side::Opponent };
        assert!(ko.is_winner(Side::Opponent));
        assert!(!ko.is_winner(Side::Player));
        assert_eq!(ko.status(), MatchStatus::EndedByKnockout);

        assert_eq!(MatchResult::BothOut.winner(), None);
        assert_eq!(MatchResult::BothOut.status(), MatchStatus::EndedByKnockout);

        let tire = MatchResult::TireHealth { winner: Side::Player };
        assert!(tire.is_winner(Side::Player));
        assert_eq!(tire.status(), MatchStatus::EndedByDraw);

        assert_eq!(MatchResult::Draw.winner(), None);
        assert_eq!(MatchResult::Draw.status(), MatchStatus::EndedByDraw);
    }

    #[test]
    fn test_defense_outcome_mitigation() {
        assert_eq!(DefenseOutcome::Countered(1).mitigated_by(), Some(1));
        assert_eq!(DefenseOutcome::Declared(0).mitigated_by(), Some(0));
        assert_eq!(DefenseOutcome::Unaffordable(1).mitigated_by(), None);
        assert_eq!(DefenseOutcome::Undefended.mitigated_by(), None);
    }

    #[test]
    fn test_report_damage() {
        let report = TurnReport {
            round: 3,
            actor: Side::Player,
            outcome: TurnOutcome::Declare { defense_index: 0 },
        };
        assert_eq!(report.damage(), 0);
    }
}

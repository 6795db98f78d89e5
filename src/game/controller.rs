//! Match controller: the round loop.
//!
//! Each step:
//! 1. Stop on a knockout (checked before acting, never mid-turn)
//! 2. Stop when neither side can act; tire health decides
//! 3. Pick the actor by round parity (odd = player, even = opponent)
//! 4. Skip the round if the actor cannot act, otherwise resolve its turn
//! 5. Advance the round counter

use tracing::{debug, info};

use super::events::{Commentator, MatchEvent, NullCommentator};
use crate::catalog::DriverKind;
use crate::core::{MatchConfig, MatchState, RaceError, RaceRng, Side, SideMap};
use crate::pilot::{AutoPilot, Pilot};
use crate::rules::{rules_for, MatchResult, MatchStatus, TurnRules};

/// Result of a single `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(MatchResult),
}

/// Drives one match from round 1 to a result.
pub struct MatchController {
    state: MatchState,
    rules: Box<dyn TurnRules>,
    pilots: SideMap<Box<dyn Pilot>>,
    commentator: Box<dyn Commentator>,
    history: Vec<MatchEvent>,
    result: Option<MatchResult>,
}

impl MatchController {
    #[must_use]
    pub fn new(state: MatchState, rules: Box<dyn TurnRules>, pilots: SideMap<Box<dyn Pilot>>) -> Self {
        Self {
            state,
            rules,
            pilots,
            commentator: Box::new(NullCommentator),
            history: Vec::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn with_commentator(mut self, commentator: Box<dyn Commentator>) -> Self {
        self.commentator = commentator;
        self
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &dyn TurnRules {
        self.rules.as_ref()
    }

    /// Every event emitted so far, in order.
    #[must_use]
    pub fn history(&self) -> &[MatchEvent] {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.result.map_or(MatchStatus::InProgress, |r| r.status())
    }

    /// Play one round, or finish the match.
    pub fn step(&mut self) -> Result<Step, RaceError> {
        if let Some(result) = self.result {
            return Ok(Step::Finished(result));
        }
        if self.history.is_empty() {
            info!(
                rules = %self.rules.rule_set(),
                player = %self.state.driver(Side::Player).name,
                opponent = %self.state.driver(Side::Opponent).name,
                "race start"
            );
            self.emit(MatchEvent::Started {
                rules: self.rules.rule_set(),
            })?;
        }

        if let Some(result) = self.rules.is_terminal(&self.state) {
            if result.status() == MatchStatus::EndedByDraw {
                self.emit(MatchEvent::FuelExhausted)?;
            }
            return self.finish(result);
        }

        let round = self.state.round;
        let actor = self.state.active_side();
        if !self.rules.can_act(self.state.driver(actor)) {
            debug!(round, %actor, "skipping turn");
            self.state.advance_round();
            self.emit(MatchEvent::RoundSkipped { round, side: actor })?;
            return Ok(Step::Continue);
        }

        let report = self.rules.resolve_turn(&mut self.state, actor, &mut self.pilots)?;
        self.state.advance_round();
        self.emit(MatchEvent::TurnResolved(report))?;
        Ok(Step::Continue)
    }

    /// Play until the match ends.
    pub fn run(&mut self) -> Result<MatchResult, RaceError> {
        loop {
            if let Step::Finished(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    fn finish(&mut self, result: MatchResult) -> Result<Step, RaceError> {
        info!(?result, rounds = self.state.round - 1, "race over");
        self.result = Some(result);
        self.emit(MatchEvent::Finished(result))?;
        Ok(Step::Finished(result))
    }

    fn emit(&mut self, event: MatchEvent) -> Result<(), RaceError> {
        self.history.push(event);
        self.commentator.on_event(&event, &self.state)
    }
}

/// Builder for a `MatchController`.
///
/// Sides without an explicit pilot get the standard `AutoPilot`, each with
/// its own fork of the match RNG.
pub struct MatchBuilder {
    config: MatchConfig,
    player: DriverKind,
    player_pilot: Option<Box<dyn Pilot>>,
    opponent_pilot: Option<Box<dyn Pilot>>,
    commentator: Option<Box<dyn Commentator>>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            player: DriverKind::Verstappen,
            player_pilot: None,
            opponent_pilot: None,
            commentator: None,
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// The roster driver for the player side; the opponent gets the other.
    pub fn player(mut self, kind: DriverKind) -> Self {
        self.player = kind;
        self
    }

    pub fn player_pilot(mut self, pilot: Box<dyn Pilot>) -> Self {
        self.player_pilot = Some(pilot);
        self
    }

    pub fn opponent_pilot(mut self, pilot: Box<dyn Pilot>) -> Self {
        self.opponent_pilot = Some(pilot);
        self
    }

    pub fn commentator(mut self, commentator: Box<dyn Commentator>) -> Self {
        self.commentator = Some(commentator);
        self
    }

    pub fn build(self) -> MatchController {
        let mut rng = RaceRng::from_optional_seed(self.config.seed);
        debug!(seed = rng.seed(), "match rng seeded");

        let mut pilot_or_auto = |pilot: Option<Box<dyn Pilot>>| -> Box<dyn Pilot> {
            let fork = rng.fork();
            pilot.unwrap_or_else(|| Box::new(AutoPilot::standard(fork)))
        };
        let pilots = SideMap::from_pair(
            pilot_or_auto(self.player_pilot),
            pilot_or_auto(self.opponent_pilot),
        );

        let state = MatchState::for_pick(self.player, &self.config);
        let controller = MatchController::new(state, rules_for(&self.config), pilots);
        match self.commentator {
            Some(commentator) => controller.with_commentator(commentator),
            None => controller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleSet;

    #[test]
    fn test_auto_match_terminates() {
        for rules in [RuleSet::ImmediateCounter, RuleSet::DeclaredDefense] {
            for seed in 0..20 {
                let mut controller = MatchBuilder::new()
                    .config(MatchConfig::default().with_rules(rules).with_seed(seed))
                    .build();
                let result = controller.run().unwrap();

                assert_eq!(controller.result(), Some(result));
                assert_ne!(controller.status(), MatchStatus::InProgress);
                assert_eq!(controller.history().first(), Some(&MatchEvent::Started { rules }));
                assert_eq!(controller.history().last(), Some(&MatchEvent::Finished(result)));
            }
        }
    }

    #[test]
    fn test_same_seed_same_match() {
        let play = || {
            let mut c = MatchBuilder::new()
                .config(MatchConfig::default().with_seed(1234))
                .player(DriverKind::Mostafa)
                .build();
            let result = c.run().unwrap();
            (result, c.state().clone(), c.history().to_vec())
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_step_after_finish_is_stable() {
        let mut c = MatchBuilder::new()
            .config(MatchConfig::default().with_seed(5).with_fuel(0))
            .build();
        let first = c.step().unwrap();
        assert_eq!(first, Step::Finished(MatchResult::Draw));
        let events = c.history().len();
        assert_eq!(c.step().unwrap(), first);
        assert_eq!(c.history().len(), events);
    }

    #[test]
    fn test_status_in_progress() {
        let c = MatchBuilder::new().config(MatchConfig::default().with_seed(1)).build();
        assert_eq!(c.status(), MatchStatus::InProgress);
        assert_eq!(c.state().round, 1);
        assert_eq!(c.rules().rule_set(), RuleSet::DeclaredDefense);
    }
}

//! Declared-defense rules.
//!
//! Each turn the actor takes exactly one action from the union of its
//! performable moves and defenses:
//! - A move hits the other side, reduced by that side's declared defense if
//!   it has one, whenever it was declared
//! - A defense deals no damage; it becomes the actor's declared defense,
//!   replacing any earlier one
//!
//! Either way the action's fuel cost is paid by the actor. Whether a
//! declared defense survives the attack it reduces is set by
//! `DefensePersistence`.

use tracing::debug;

use super::engine::{DefenseOutcome, TurnOutcome, TurnReport, TurnRules};
use super::immediate::off_menu;
use crate::catalog::{ActionRef, Performable};
use crate::core::{DefensePersistence, Driver, MatchState, RaceError, RuleSet, Side, SideMap};
use crate::pilot::Pilot;

#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredDefense {
    persistence: DefensePersistence,
}

impl DeclaredDefense {
    #[must_use]
    pub fn new(persistence: DefensePersistence) -> Self {
        Self { persistence }
    }

    #[must_use]
    pub fn persistence(&self) -> DefensePersistence {
        self.persistence
    }

    fn attack(&self, state: &mut MatchState, actor: Side, move_index: usize) -> Option<(u32, DefenseOutcome)> {
        let defender = actor.other();
        let (cost, impact) = state
            .driver(actor)
            .move_at(move_index)
            .map(|m| (m.fuel_cost, m.impact))?;
        state.driver_mut(actor).burn_fuel(cost);

        let (damage, defense) = match state.active_defense[defender] {
            Some(index) => match state.driver(defender).defense_at(index) {
                Some(declared) => (declared.mitigate(impact), DefenseOutcome::Declared(index)),
                None => (impact, DefenseOutcome::Undefended),
            },
            None => (impact, DefenseOutcome::Undefended),
        };

        if self.persistence == DefensePersistence::SingleUse && defense.mitigated_by().is_some() {
            state.active_defense[defender] = None;
        }

        state.driver_mut(defender).take_damage(damage);
        Some((damage, defense))
    }

    fn declare(state: &mut MatchState, actor: Side, defense_index: usize) -> Option<()> {
        let driver = state.driver_mut(actor);
        let defense = driver.defense_at_mut(defense_index)?;
        defense.use_once();
        let cost = defense.fuel_cost;
        driver.burn_fuel(cost);
        state.active_defense[actor] = Some(defense_index);
        Some(())
    }
}

impl TurnRules for DeclaredDefense {
    fn rule_set(&self) -> RuleSet {
        RuleSet::DeclaredDefense
    }

    fn can_act(&self, driver: &Driver) -> bool {
        driver.can_act()
    }

    fn resolve_turn(
        &self,
        state: &mut MatchState,
        actor: Side,
        pilots: &mut SideMap<Box<dyn Pilot>>,
    ) -> Result<TurnReport, RaceError> {
        let round = state.round;

        let menu = state.driver(actor).performable_actions();
        if menu.is_empty() {
            debug!(round, %actor, "no performable action");
            return Ok(TurnReport {
                round,
                actor,
                outcome: TurnOutcome::NoAction,
            });
        }

        let choice = pilots[actor].choose_action(state.driver(actor), &menu)?;
        if !menu.contains(&choice) {
            return Err(off_menu(state.driver(actor), choice));
        }
        let name = state
            .driver(actor)
            .action(choice)
            .map(|a| a.name().to_string())
            .unwrap_or_default();

        let outcome = match choice {
            ActionRef::Move(move_index) => self
                .attack(state, actor, move_index)
                .map(|(damage, defense)| TurnOutcome::Attack {
                    move_index,
                    damage,
                    defense,
                }),
            ActionRef::Defense(defense_index) => {
                Self::declare(state, actor, defense_index).map(|()| TurnOutcome::Declare { defense_index })
            }
        }
        .ok_or_else(|| off_menu(state.driver(actor), choice))?;

        debug!(round, %actor, action = %name, ?outcome, "action resolved");
        Ok(TurnReport { round, actor, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DriverKind;
    use crate::core::{MatchConfig, RaceRng};
    use crate::pilot::{AutoPilot, BestDefense, Scripted};

    fn pilots(player: Vec<ActionRef>, opponent: Vec<ActionRef>) -> SideMap<Box<dyn Pilot>> {
        let build = |picks: Vec<ActionRef>| -> Box<dyn Pilot> {
            Box::new(AutoPilot::new(
                Box::new(Scripted::picks(picks)),
                Box::new(BestDefense),
                RaceRng::new(0),
            ))
        };
        SideMap::from_pair(build(player), build(opponent))
    }

    fn state() -> MatchState {
        MatchState::for_pick(DriverKind::Verstappen, &MatchConfig::default())
    }

    #[test]
    fn test_move_without_declared_defense() {
        let mut state = state();
        let mut pilots = pilots(vec![ActionRef::Move(0)], vec![]);

        let report = DeclaredDefense::default()
            .resolve_turn(&mut state, Side::Player, &mut pilots)
            .unwrap();

        assert_eq!(
            report.outcome,
            TurnOutcome::Attack {
                move_index: 0,
                damage: 12,
                defense: DefenseOutcome::Undefended
            }
        );
        assert_eq!(state.driver(Side::Player).fuel, 455);
        assert_eq!(state.driver(Side::Opponent).tire_health, 88);
        // The defender pays nothing under these rules
        assert_eq!(state.driver(Side::Opponent).fuel, 500);
    }

    #[test]
    fn test_declare_sets_slot_and_charges_actor() {
        let mut state = state();
        let mut pilots = pilots(vec![], vec![ActionRef::Defense(1)]);

        let report = DeclaredDefense::default()
            .resolve_turn(&mut state, Side::Opponent, &mut pilots)
            .unwrap();

        assert_eq!(report.outcome, TurnOutcome::Declare { defense_index: 1 });
        assert_eq!(report.damage(), 0);
        assert_eq!(state.active_defense[Side::Opponent], Some(1));
        let opponent = state.driver(Side::Opponent);
        assert_eq!(opponent.fuel, 465);
        assert_eq!(opponent.defense_at(1).unwrap().used, 1);
        assert_eq!(state.driver(Side::Player).tire_health, 100);
    }

    #[test]
    fn test_declared_defense_reduces_later_attack() {
        let mut state = state();
        state.active_defense[Side::Opponent] = Some(0); // Slipstream Cut, 40%
        let mut pilots = pilots(vec![ActionRef::Move(1)], vec![]);

        let report = DeclaredDefense::default()
            .resolve_turn(&mut state, Side::Player, &mut pilots)
            .unwrap();

        assert_eq!(report.damage(), 12);
        assert_eq!(state.driver(Side::Opponent).tire_health, 88);
    }

    #[test]
    fn test_sticky_defense_persists() {
        let mut state = state();
        state.active_defense[Side::Opponent] = Some(1); // Aggressive Block, 100%
        let mut pilots = pilots(vec![ActionRef::Move(1), ActionRef::Move(0)], vec![]);
        let rules = DeclaredDefense::new(DefensePersistence::Sticky);

        rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();
        rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();

        assert_eq!(state.driver(Side::Opponent).tire_health, 100);
        assert_eq!(state.active_defense[Side::Opponent], Some(1));
    }

    #[test]
    fn test_single_use_defense_clears() {
        let mut state = state();
        state.active_defense[Side::Opponent] = Some(1);
        let mut pilots = pilots(vec![ActionRef::Move(1), ActionRef::Move(0)], vec![]);
        let rules = DeclaredDefense::new(DefensePersistence::SingleUse);

        let first = rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();
        assert_eq!(first.damage(), 0);
        assert_eq!(state.active_defense[Side::Opponent], None);

        let second = rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();
        assert_eq!(second.damage(), 12);
        assert_eq!(state.driver(Side::Opponent).tire_health, 88);
    }

    #[test]
    fn test_redeclare_replaces_slot() {
        let mut state = state();
        let mut pilots = pilots(vec![ActionRef::Defense(1), ActionRef::Defense(0)], vec![]);
        let rules = DeclaredDefense::default();

        rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();
        rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();

        assert_eq!(state.active_defense[Side::Player], Some(0));
        assert_eq!(state.driver(Side::Player).fuel, 500 - 40 - 25);
    }

    #[test]
    fn test_only_defenses_left_still_acts() {
        let mut state = state();
        state.driver_mut(Side::Player).fuel = 25;
        let mut pilots = pilots(vec![ActionRef::Defense(0)], vec![]);
        let rules = DeclaredDefense::default();

        assert!(rules.can_act(state.driver(Side::Player)));
        let report = rules.resolve_turn(&mut state, Side::Player, &mut pilots).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Declare { defense_index: 0 });
        assert_eq!(state.driver(Side::Player).fuel, 0);
    }

    #[test]
    fn test_nothing_performable() {
        let mut state = state();
        state.driver_mut(Side::Opponent).fuel = 19;
        let before = state.clone();
        let mut pilots = pilots(vec![], vec![]);

        let report = DeclaredDefense::default()
            .resolve_turn(&mut state, Side::Opponent, &mut pilots)
            .unwrap();

        assert_eq!(report.outcome, TurnOutcome::NoAction);
        assert_eq!(state, before);
    }
}

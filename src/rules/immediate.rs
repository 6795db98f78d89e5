//! Immediate-counter rules.
//!
//! Each turn the actor attacks with a move. The defender may answer at once
//! with one of its performable defenses, paying its fuel cost, and the
//! defense reduces this attack only. Only moves count as "able to act".

use tracing::debug;

use super::engine::{DefenseOutcome, TurnOutcome, TurnReport, TurnRules};
use crate::catalog::{ActionRef, Performable};
use crate::core::{Driver, MatchState, RaceError, RuleSet, Side, SideMap};
use crate::pilot::Pilot;

#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateCounter;

impl TurnRules for ImmediateCounter {
    fn rule_set(&self) -> RuleSet {
        RuleSet::ImmediateCounter
    }

    fn can_act(&self, driver: &Driver) -> bool {
        driver.can_attack()
    }

    fn resolve_turn(
        &self,
        state: &mut MatchState,
        actor: Side,
        pilots: &mut SideMap<Box<dyn Pilot>>,
    ) -> Result<TurnReport, RaceError> {
        let round = state.round;
        let defender = actor.other();

        let menu = state.driver(actor).performable_moves();
        if menu.is_empty() {
            debug!(round, %actor, "no performable move");
            return Ok(TurnReport {
                round,
                actor,
                outcome: TurnOutcome::NoAction,
            });
        }

        let choice = pilots[actor].choose_action(state.driver(actor), &menu)?;
        let (move_index, strike) = match choice {
            ActionRef::Move(i) if menu.contains(&choice) => {
                state.driver(actor).move_at(i).cloned().map(|m| (i, m))
            }
            _ => None,
        }
        .ok_or_else(|| off_menu(state.driver(actor), choice))?;

        let counters = state.driver(defender).performable_defenses();
        let pick = if counters.is_empty() {
            None
        } else {
            pilots[defender].choose_counter(state.driver(defender), &strike, &counters)?
        };

        let (damage, defense) = match pick {
            None => (strike.impact, DefenseOutcome::Undefended),
            Some(ActionRef::Defense(i)) if counters.contains(&ActionRef::Defense(i)) => {
                counter(state.driver_mut(defender), i, strike.impact)
            }
            Some(other) => return Err(off_menu(state.driver(defender), other)),
        };

        state.driver_mut(actor).burn_fuel(strike.fuel_cost);
        let remaining = state.driver_mut(defender).take_damage(damage);
        debug!(
            round,
            %actor,
            action = strike.name(),
            damage,
            ?defense,
            defender_tire_health = remaining,
            "move resolved"
        );

        Ok(TurnReport {
            round,
            actor,
            outcome: TurnOutcome::Attack {
                move_index,
                damage,
                defense,
            },
        })
    }
}

/// Pay for and apply the defender's counter. A counter the defender cannot
/// pay for leaves the full impact.
fn counter(target: &mut Driver, index: usize, impact: u32) -> (u32, DefenseOutcome) {
    let fuel = target.fuel;
    let Some(defense) = target.defense_at_mut(index) else {
        return (impact, DefenseOutcome::Undefended);
    };
    if fuel < defense.fuel_cost {
        return (impact, DefenseOutcome::Unaffordable(index));
    }

    defense.use_once();
    let cost = defense.fuel_cost;
    let damage = defense.mitigate(impact);
    target.burn_fuel(cost);
    (damage, DefenseOutcome::Countered(index))
}

pub(crate) fn off_menu(driver: &Driver, choice: ActionRef) -> RaceError {
    let choice = driver
        .action(choice)
        .map(|a| a.name().to_string())
        .unwrap_or_else(|| format!("{choice:?}"));
    RaceError::OffMenuChoice {
        driver: driver.name.clone(),
        choice,
    }
}

//! Text rendering for menus, turns and results.
//!
//! Everything here is pure: functions take state and return lines, and the
//! caller decides where they go.

use crate::catalog::{ActionRef, Defense, Move, Performable};
use crate::core::{Driver, MatchState, RuleSet, Side};
use crate::rules::{DefenseOutcome, MatchResult, TurnOutcome, TurnReport};

pub fn move_line(number: usize, m: &Move) -> String {
    format!(
        "{number}. {} (Fuel Cost: {}, Impact: {})",
        m.name, m.fuel_cost, m.impact
    )
}

pub fn defense_line(number: usize, d: &Defense) -> String {
    let uses_left = d
        .uses_left()
        .map_or_else(|| "Unlimited".to_string(), |n| n.to_string());
    format!(
        "{number}. {} (Fuel Cost: {}, Reduction: {}%, Uses Left: {uses_left})",
        d.name, d.fuel_cost, d.reduction_percent
    )
}

/// Numbered action menu. Moves come first; defenses continue the numbering.
pub fn action_menu(driver: &Driver, menu: &[ActionRef]) -> Vec<String> {
    let combined = menu.iter().any(|a| a.is_defense());
    let mut lines = Vec::new();
    if combined {
        lines.push(String::new());
        lines.push(format!("Choose an action for {}:", driver.name));
    }

    let mut moves = menu
        .iter()
        .enumerate()
        .filter_map(|(n, a)| match a {
            ActionRef::Move(i) => driver.move_at(*i).map(|m| move_line(n + 1, m)),
            ActionRef::Defense(_) => None,
        })
        .peekable();
    if moves.peek().is_some() {
        lines.push(String::new());
        if combined {
            lines.push(format!("Available offensive moves for {}:", driver.name));
        } else {
            lines.push(format!("Available moves for {}:", driver.name));
        }
        lines.extend(moves);
    }

    let defenses: Vec<String> = menu
        .iter()
        .enumerate()
        .filter_map(|(n, a)| match a {
            ActionRef::Defense(i) => driver.defense_at(*i).map(|d| defense_line(n + 1, d)),
            ActionRef::Move(_) => None,
        })
        .collect();
    if !defenses.is_empty() {
        lines.push(String::new());
        lines.push(format!("Available defensive moves for {}:", driver.name));
        lines.extend(defenses);
    }
    lines
}

/// Numbered counter menu, offered to the defender before an attack lands.
pub fn counter_menu(driver: &Driver, menu: &[ActionRef]) -> Vec<String> {
    let mut lines = vec![String::new(), format!("Available defenses for {}:", driver.name)];
    lines.extend(menu.iter().enumerate().filter_map(|(n, a)| match a {
        ActionRef::Defense(i) => driver.defense_at(*i).map(|d| defense_line(n + 1, d)),
        ActionRef::Move(_) => None,
    }));
    lines
}

/// Both status lines, `first` side on top.
pub fn status_lines(state: &MatchState, first: Side) -> Vec<String> {
    vec![state.driver(first).status(), state.driver(first.other()).status()]
}

fn action_name(driver: &Driver, action: ActionRef) -> String {
    driver
        .action(action)
        .map(|a| a.name().to_string())
        .unwrap_or_default()
}

/// Narration of one resolved turn, read against the state after the turn.
pub fn turn_lines(report: &TurnReport, state: &MatchState, rules: RuleSet) -> Vec<String> {
    let actor = state.driver(report.actor);
    let defender = state.driver(report.actor.other());
    let mut lines = vec![String::new(), format!("-- Round {} --", report.round)];

    match report.outcome {
        TurnOutcome::NoAction => {
            lines.push(format!("{} has no fuel to perform any action!", actor.name));
            return lines;
        }
        TurnOutcome::Attack {
            move_index,
            damage,
            defense,
        } => {
            let defense_name = |i| action_name(defender, ActionRef::Defense(i));
            lines.push(match defense {
                DefenseOutcome::Countered(i) => {
                    format!("{} used {} to reduce damage!", defender.name, defense_name(i))
                }
                DefenseOutcome::Declared(i) => format!(
                    "{}'s {} (from previous turn) reduces damage!",
                    defender.name,
                    defense_name(i)
                ),
                DefenseOutcome::Unaffordable(_) => {
                    format!("{} couldn't defend due to insufficient fuel!", defender.name)
                }
                DefenseOutcome::Undefended => match rules {
                    RuleSet::ImmediateCounter => {
                        format!("{} couldn't defend due to no available defense!", defender.name)
                    }
                    RuleSet::DeclaredDefense => format!("{} has no active defense!", defender.name),
                },
            });
            let label = match rules {
                RuleSet::ImmediateCounter => "",
                RuleSet::DeclaredDefense => "offensive move ",
            };
            lines.push(format!(
                "{} used {label}{} | Damage: {damage}",
                actor.name,
                action_name(actor, ActionRef::Move(move_index))
            ));
        }
        TurnOutcome::Declare { defense_index } => {
            lines.push(format!(
                "{} used defensive move {}",
                actor.name,
                action_name(actor, ActionRef::Defense(defense_index))
            ));
        }
    }

    lines.extend(status_lines(state, report.actor));
    lines
}

/// Announcement of the final result.
pub fn result_line(result: &MatchResult, state: &MatchState) -> String {
    let name = |side: Side| &state.driver(side).name;
    match result {
        MatchResult::Knockout { winner } => format!("Winner: {}!", name(*winner)),
        MatchResult::BothOut => "Both drivers' tires failed. No winner!".to_string(),
        MatchResult::TireHealth { winner } => format!("Winner by tire health: {}!", name(*winner)),
        MatchResult::Draw => "It's a draw! Both tire health and fuel are equal.".to_string(),
    }
}

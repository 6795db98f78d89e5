//! Console commentary and the driver pick.

use std::io::{BufRead, Write};

use super::display::{result_line, status_lines, turn_lines};
use super::Prompter;
use crate::catalog::DriverKind;
use crate::core::{MatchState, RaceError, RuleSet, Side};
use crate::game::{Commentator, MatchEvent};

/// Prints match events as race commentary.
#[derive(Debug)]
pub struct ConsoleCommentator<W> {
    out: W,
    rules: RuleSet,
}

impl<W: Write> ConsoleCommentator<W> {
    pub fn new(out: W, rules: RuleSet) -> Self {
        Self { out, rules }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn lines(&mut self, lines: &[String]) -> Result<(), RaceError> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Commentator for ConsoleCommentator<W> {
    fn on_event(&mut self, event: &MatchEvent, state: &MatchState) -> Result<(), RaceError> {
        match event {
            MatchEvent::Started { .. } => self.lines(&[format!(
                "\nRace Start: {} vs {}!",
                state.driver(Side::Player).name,
                state.driver(Side::Opponent).name
            )]),
            MatchEvent::RoundSkipped { side, .. } => self.lines(&[format!(
                "{} has no fuel to act, skipping turn!",
                state.driver(*side).name
            )]),
            MatchEvent::TurnResolved(report) => {
                let lines = turn_lines(report, state, self.rules);
                self.lines(&lines)
            }
            MatchEvent::FuelExhausted => self.lines(&["\nBoth drivers are out of fuel.".to_string()]),
            MatchEvent::Finished(result) => {
                let mut lines = vec![String::new(), result_line(result, state), "\nFinal Status:".to_string()];
                lines.extend(status_lines(state, Side::Player));
                self.lines(&lines)
            }
        }
    }
}

/// Ask which roster driver the human races with.
pub fn choose_driver<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<DriverKind, RaceError> {
    prompter.say("Choose your driver:")?;
    for (n, kind) in DriverKind::ALL.iter().enumerate() {
        prompter.say(&format!("{}. {}", n + 1, kind.display_name()))?;
    }
    let choice = prompter.choose_number("Enter 1 or 2: ", 1, DriverKind::ALL.len() as u32)?;
    let kind = DriverKind::from_menu_choice(choice).unwrap_or(DriverKind::Verstappen);
    prompter.say(&format!("You are playing as {}!", kind.display_name()))?;
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;
    use crate::rules::MatchResult;
    use std::io::Cursor;

    #[test]
    fn test_choose_driver_reprompts() {
        let mut prompter = Prompter::new(Cursor::new(b"three\n0\n2\n".to_vec()), Vec::new());
        assert_eq!(choose_driver(&mut prompter).unwrap(), DriverKind::Mostafa);

        let (_, out) = prompter.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("1. Max Verstappen\n2. Hassan Mostafa\n"));
        assert!(out.contains("Invalid input! Please enter a number."));
        assert!(out.contains("Please choose a number between 1 and 2."));
        assert!(out.ends_with("You are playing as Hassan Mostafa!\n"));
    }

    #[test]
    fn test_start_skip_and_finish() {
        let state = MatchState::for_pick(DriverKind::Verstappen, &MatchConfig::default());
        let mut c = ConsoleCommentator::new(Vec::new(), RuleSet::DeclaredDefense);
        c.on_event(&MatchEvent::Started { rules: RuleSet::DeclaredDefense }, &state)
            .unwrap();
        c.on_event(
            &MatchEvent::RoundSkipped {
                round: 2,
                side: Side::Opponent,
            },
            &state,
        )
        .unwrap();
        c.on_event(&MatchEvent::FuelExhausted, &state).unwrap();
        c.on_event(&MatchEvent::Finished(MatchResult::Draw), &state).unwrap();

        let out = String::from_utf8(c.into_inner()).unwrap();
        assert!(out.starts_with("\nRace Start: Max Verstappen vs Hassan Mostafa!\n"));
        assert!(out.contains("Hassan Mostafa has no fuel to act, skipping turn!\n"));
        assert!(out.contains("\nBoth drivers are out of fuel.\n"));
        assert!(out.contains("It's a draw! Both tire health and fuel are equal.\n\nFinal Status:\n"));
        assert!(out.trim_end().ends_with("Tire Health: 100 | Fuel: 500"));
    }
}

//! Human pilot: numbered console menus.

use std::io::{BufRead, Write};

use super::traits::Pilot;
use crate::catalog::{ActionRef, Move};
use crate::console::display::{action_menu, counter_menu};
use crate::console::Prompter;
use crate::core::{Driver, RaceError};

/// A pilot that asks a human through a `Prompter`.
#[derive(Debug)]
pub struct HumanPilot<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> HumanPilot<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self { prompter }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn show(&mut self, lines: &[String]) -> Result<(), RaceError> {
        for line in lines {
            self.prompter.say(line)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Pilot for HumanPilot<R, W> {
    fn choose_action(&mut self, driver: &Driver, menu: &[ActionRef]) -> Result<ActionRef, RaceError> {
        if menu.is_empty() {
            return Err(RaceError::NoPerformableAction(driver.name.clone()));
        }
        self.show(&action_menu(driver, menu))?;

        let prompt = if menu.iter().all(|a| a.is_move()) {
            "Choose a move (enter the number): ".to_string()
        } else {
            format!("Choose an action (1-{} for moves/defenses): ", menu.len())
        };
        let choice = self.prompter.choose_number(&prompt, 1, menu.len() as u32)?;
        Ok(menu[choice as usize - 1])
    }

    fn choose_counter(
        &mut self,
        driver: &Driver,
        incoming: &Move,
        menu: &[ActionRef],
    ) -> Result<Option<ActionRef>, RaceError> {
        self.prompter.say(&format!(
            "\nIncoming {} (Impact: {}) against {}!",
            incoming.name, incoming.impact, driver.name
        ))?;
        self.show(&counter_menu(driver, menu))?;

        let choice = self.prompter.choose_number(
            "Choose a defense (enter the number, or 0 to skip): ",
            0,
            menu.len() as u32,
        )?;
        Ok(match choice {
            0 => None,
            n => Some(menu[n as usize - 1]),
        })
    }
}

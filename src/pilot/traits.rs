//! The decision-making seam between the rules and whoever drives a side.

use crate::catalog::{ActionRef, Move};
use crate::core::{Driver, RaceError};

/// Makes the choices for one side of a match.
///
/// Resolvers only ever pass non-empty menus of performable actions, in the
/// driver's catalog order. A pilot must answer with an entry of the menu.
pub trait Pilot {
    /// Pick the action to take this turn.
    ///
    /// Under the immediate-counter rules the menu only holds moves; under
    /// the declared-defense rules it holds moves followed by defenses.
    fn choose_action(&mut self, driver: &Driver, menu: &[ActionRef]) -> Result<ActionRef, RaceError>;

    /// Pick a defense against `incoming`, or `None` to take the full hit.
    fn choose_counter(
        &mut self,
        driver: &Driver,
        incoming: &Move,
        menu: &[ActionRef],
    ) -> Result<Option<ActionRef>, RaceError>;
}

impl<P: Pilot + ?Sized> Pilot for Box<P> {
    fn choose_action(&mut self, driver: &Driver, menu: &[ActionRef]) -> Result<ActionRef, RaceError> {
        (**self).choose_action(driver, menu)
    }

    fn choose_counter(
        &mut self,
        driver: &Driver,
        incoming: &Move,
        menu: &[ActionRef],
    ) -> Result<Option<ActionRef>, RaceError> {
        (**self).choose_counter(driver, incoming, menu)
    }
}

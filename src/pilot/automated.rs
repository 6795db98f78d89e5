//! Automated pilot driven by two policies.

use tracing::{debug, warn};

use super::policy::{ActionPolicy, BestDefense, UniformRandom};
use super::traits::Pilot;
use crate::catalog::{ActionRef, Move, Performable};
use crate::core::{Driver, RaceError, RaceRng};

/// A pilot that delegates every choice to an `ActionPolicy`.
///
/// `action_policy` picks the turn's action; `counter_policy` picks the
/// immediate counter to an incoming move.
pub struct AutoPilot {
    action_policy: Box<dyn ActionPolicy>,
    counter_policy: Box<dyn ActionPolicy>,
    rng: RaceRng,
}

impl AutoPilot {
    #[must_use]
    pub fn new(
        action_policy: Box<dyn ActionPolicy>,
        counter_policy: Box<dyn ActionPolicy>,
        rng: RaceRng,
    ) -> Self {
        Self {
            action_policy,
            counter_policy,
            rng,
        }
    }

    /// The standard opponent: uniform random actions, strongest counter.
    #[must_use]
    pub fn standard(rng: RaceRng) -> Self {
        Self::new(Box::new(UniformRandom), Box::new(BestDefense), rng)
    }
}

impl std::fmt::Debug for AutoPilot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoPilot").field("seed", &self.rng.seed()).finish_non_exhaustive()
    }
}

impl Pilot for AutoPilot {
    fn choose_action(&mut self, driver: &Driver, menu: &[ActionRef]) -> Result<ActionRef, RaceError> {
        let picked = self
            .action_policy
            .select(driver, menu, &mut self.rng)
            .filter(|pick| menu.contains(pick));

        let action = match picked {
            Some(action) => action,
            None => {
                warn!(driver = %driver.name, "action policy declined, taking first menu entry");
                *menu
                    .first()
                    .ok_or_else(|| RaceError::NoPerformableAction(driver.name.clone()))?
            }
        };

        if let Some(chosen) = driver.action(action) {
            debug!(driver = %driver.name, action = chosen.name(), "automated action");
        }
        Ok(action)
    }

    fn choose_counter(
        &mut self,
        driver: &Driver,
        incoming: &Move,
        menu: &[ActionRef],
    ) -> Result<Option<ActionRef>, RaceError> {
        let counter = self
            .counter_policy
            .select(driver, menu, &mut self.rng)
            .filter(|pick| menu.contains(pick) && pick.is_defense());
        debug!(driver = %driver.name, incoming = %incoming.name, ?counter, "automated counter");
        Ok(counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DriverKind;
    use crate::pilot::Scripted;

    #[test]
    fn test_standard_counter_is_strongest() {
        let d = Driver::from_kind(DriverKind::Mostafa, 100, 500);
        let mut pilot = AutoPilot::standard(RaceRng::new(1));
        let incoming = Move::new("DRS Boost", 45, 12);
        let counter = pilot
            .choose_counter(&d, &incoming, &d.performable_defenses())
            .unwrap();
        assert_eq!(counter, Some(ActionRef::Defense(1)));
    }

    #[test]
    fn test_standard_action_is_on_menu() {
        let d = Driver::from_kind(DriverKind::Verstappen, 100, 500);
        let menu = d.performable_actions();
        let mut pilot = AutoPilot::standard(RaceRng::new(9));
        for _ in 0..20 {
            assert!(menu.contains(&pilot.choose_action(&d, &menu).unwrap()));
        }
    }

    #[test]
    fn test_declined_action_falls_back() {
        let d = Driver::from_kind(DriverKind::Verstappen, 100, 500);
        let menu = d.performable_moves();
        let mut pilot = AutoPilot::new(
            Box::new(Scripted::new([None])),
            Box::new(BestDefense),
            RaceRng::new(0),
        );
        assert_eq!(pilot.choose_action(&d, &menu).unwrap(), ActionRef::Move(0));
    }

    #[test]
    fn test_empty_menu_is_an_error() {
        let d = Driver::from_kind(DriverKind::Verstappen, 100, 0);
        let mut pilot = AutoPilot::new(
            Box::new(Scripted::default()),
            Box::new(BestDefense),
            RaceRng::new(0),
        );
        let err = pilot.choose_action(&d, &[]).unwrap_err();
        assert!(matches!(err, RaceError::NoPerformableAction(name) if name == "Max Verstappen"));
    }

    #[test]
    fn test_counter_never_returns_a_move() {
        let d = Driver::from_kind(DriverKind::Verstappen, 100, 500);
        let menu = d.performable_actions();
        let mut pilot = AutoPilot::new(
            Box::new(UniformRandom),
            Box::new(Scripted::picks([ActionRef::Move(0)])),
            RaceRng::new(0),
        );
        let incoming = Move::new("Turbo Start", 50, 10);
        assert_eq!(pilot.choose_counter(&d, &incoming, &menu).unwrap(), None);
    }
}

//! Driver state: tire health, fuel and the driver's own catalog.
//!
//! A driver is created once per match and mutated every turn. Fuel is never
//! negative and tire health floors at zero, both enforced here rather than
//! by callers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Action, ActionRef, Defense, DriverKind, Move, Performable};

/// Menu of performable actions. Catalogs hold five entries at most.
pub type ActionMenu = SmallVec<[ActionRef; 5]>;

/// A driver in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub tire_health: u32,
    pub fuel: u32,
    moves: Vec<Move>,
    defenses: Vec<Defense>,
}

impl Driver {
    /// Create a driver with an explicit catalog.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tire_health: u32,
        fuel: u32,
        moves: Vec<Move>,
        defenses: Vec<Defense>,
    ) -> Self {
        Self {
            name: name.into(),
            tire_health,
            fuel,
            moves,
            defenses,
        }
    }

    /// Create one of the roster drivers.
    #[must_use]
    pub fn from_kind(kind: DriverKind, tire_health: u32, fuel: u32) -> Self {
        Self::new(kind.display_name(), tire_health, fuel, kind.moves(), kind.defenses())
    }

    /// Out of the race once tire health reaches zero.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.tire_health == 0
    }

    /// One status line: name, tire health and fuel.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "{:<16} | Tire Health: {:>3} | Fuel: {:>3}",
            self.name, self.tire_health, self.fuel
        )
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn defenses(&self) -> &[Defense] {
        &self.defenses
    }

    /// Look up a catalog entry.
    #[must_use]
    pub fn action(&self, action: ActionRef) -> Option<Action<'_>> {
        match action {
            ActionRef::Move(i) => self.moves.get(i).map(Action::Move),
            ActionRef::Defense(i) => self.defenses.get(i).map(Action::Defense),
        }
    }

    #[must_use]
    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    #[must_use]
    pub fn defense_at(&self, index: usize) -> Option<&Defense> {
        self.defenses.get(index)
    }

    pub fn defense_at_mut(&mut self, index: usize) -> Option<&mut Defense> {
        self.defenses.get_mut(index)
    }

    /// Moves affordable with the current fuel, in catalog order.
    #[must_use]
    pub fn performable_moves(&self) -> ActionMenu {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.can_perform(self.fuel))
            .map(|(i, _)| ActionRef::Move(i))
            .collect()
    }

    /// Defenses affordable and not exhausted, in catalog order.
    #[must_use]
    pub fn performable_defenses(&self) -> ActionMenu {
        self.defenses
            .iter()
            .enumerate()
            .filter(|(_, d)| d.can_perform(self.fuel))
            .map(|(i, _)| ActionRef::Defense(i))
            .collect()
    }

    /// Performable moves followed by performable defenses.
    #[must_use]
    pub fn performable_actions(&self) -> ActionMenu {
        let mut menu = self.performable_moves();
        menu.extend(self.performable_defenses());
        menu
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.moves.iter().any(|m| m.can_perform(self.fuel))
    }

    #[must_use]
    pub fn can_act(&self) -> bool {
        self.can_attack() || self.defenses.iter().any(|d| d.can_perform(self.fuel))
    }

    /// Deduct fuel, stopping at empty.
    pub fn burn_fuel(&mut self, amount: u32) {
        self.fuel = self.fuel.saturating_sub(amount);
    }

    /// Apply damage, stopping at zero tire health. Returns the new health.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.tire_health = self.tire_health.saturating_sub(damage);
        self.tire_health
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn verstappen() -> Driver {
        Driver::from_kind(DriverKind::Verstappen, 100, 500)
    }

    #[test]
    fn test_fresh_driver() {
        let d = verstappen();
        assert_eq!(d.name, "Max Verstappen");
        assert_eq!(d.tire_health, 100);
        assert_eq!(d.fuel, 500);
        assert!(!d.is_out());
        assert_eq!(d.moves().len(), 3);
        assert_eq!(d.defenses().len(), 2);
    }

    #[test]
    fn test_status_line() {
        let d = verstappen();
        assert_eq!(d.status(), "Max Verstappen   | Tire Health: 100 | Fuel: 500");

        let mut m = Driver::from_kind(DriverKind::Mostafa, 100, 500);
        m.tire_health = 7;
        m.fuel = 25;
        assert_eq!(m.to_string(), "Hassan Mostafa   | Tire Health:   7 | Fuel:  25");
    }

    #[test]
    fn test_performable_filters_by_fuel() {
        let mut d = verstappen();
        d.fuel = 30;
        assert_eq!(d.performable_moves().as_slice(), &[ActionRef::Move(2)]);
        assert_eq!(d.performable_defenses().as_slice(), &[ActionRef::Defense(0)]);
        assert_eq!(
            d.performable_actions().as_slice(),
            &[ActionRef::Move(2), ActionRef::Defense(0)]
        );

        d.fuel = 26;
        assert!(!d.can_attack());
        assert!(d.can_act());

        d.fuel = 0;
        assert!(!d.can_act());
        assert!(d.performable_actions().is_empty());
    }

    #[test]
    fn test_exhausted_defense_leaves_menu() {
        let mut d = Driver::from_kind(DriverKind::Mostafa, 100, 500);
        let block = d.defense_at_mut(1).unwrap();
        block.use_once();
        block.use_once();
        assert_eq!(d.performable_defenses().as_slice(), &[ActionRef::Defense(0)]);
    }

    #[test]
    fn test_action_lookup() {
        let d = verstappen();
        assert_eq!(d.action(ActionRef::Move(1)).map(|a| a.name().to_string()), Some("Red Bull Surge".into()));
        assert!(matches!(d.action(ActionRef::Defense(0)), Some(Action::Defense(_))));
        assert!(d.action(ActionRef::Move(9)).is_none());
    }

    #[test]
    fn test_damage_floor() {
        let mut d = verstappen();
        assert_eq!(d.take_damage(30), 70);
        assert_eq!(d.take_damage(500), 0);
        assert!(d.is_out());
    }

    #[test]
    fn test_burn_fuel_floor() {
        let mut d = verstappen();
        d.burn_fuel(480);
        d.burn_fuel(45);
        assert_eq!(d.fuel, 0);
    }

    proptest! {
        #[test]
        fn prop_tire_health_never_negative(hits in proptest::collection::vec(0u32..200, 0..50)) {
            let mut d = verstappen();
            let mut expected: i64 = 100;
            for hit in hits {
                d.take_damage(hit);
                expected = (expected - i64::from(hit)).max(0);
                prop_assert_eq!(i64::from(d.tire_health), expected);
            }
        }
    }
}

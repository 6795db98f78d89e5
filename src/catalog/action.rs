//! Action definitions: offensive moves and defenses.
//!
//! Both kinds share the `Performable` capability (name, fuel cost, gate).
//! Resolvers never inspect types at runtime; they match on `Action`, a
//! closed two-case view borrowed from a driver's catalog.
//!
//! Catalog entries are addressed by `ActionRef`, a `Copy` index that stays
//! valid for the whole match because catalogs never change shape.

use serde::{Deserialize, Serialize};

/// Capability shared by every action a driver can take.
pub trait Performable {
    /// Display name.
    fn name(&self) -> &str;

    /// Fuel deducted when the action is taken.
    fn fuel_cost(&self) -> u32;

    /// Whether the action can be taken with `fuel` in the tank.
    fn can_perform(&self, fuel: u32) -> bool;
}

/// An offensive action with fixed damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub fuel_cost: u32,
    pub impact: u32,
}

impl Move {
    #[must_use]
    pub fn new(name: impl Into<String>, fuel_cost: u32, impact: u32) -> Self {
        Self {
            name: name.into(),
            fuel_cost,
            impact,
        }
    }
}

impl Performable for Move {
    fn name(&self) -> &str {
        &self.name
    }

    fn fuel_cost(&self) -> u32 {
        self.fuel_cost
    }

    fn can_perform(&self, fuel: u32) -> bool {
        fuel >= self.fuel_cost
    }
}

/// A mitigating action.
///
/// `reduction_percent` is a whole percentage (0..=100): a 30% defense turns
/// an impact of 20 into `20 * 70 / 100 = 14`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    pub name: String,
    pub fuel_cost: u32,
    pub reduction_percent: u8,
    /// Use cap. `None` means unlimited.
    pub max_uses: Option<u32>,
    /// Times used. Only counted when `max_uses` is set.
    pub used: u32,
}

impl Defense {
    /// Create an unlimited defense.
    ///
    /// # Panics
    ///
    /// Panics if `reduction_percent` exceeds 100.
    #[must_use]
    pub fn new(name: impl Into<String>, fuel_cost: u32, reduction_percent: u8) -> Self {
        assert!(reduction_percent <= 100, "Reduction must be at most 100%");
        Self {
            name: name.into(),
            fuel_cost,
            reduction_percent,
            max_uses: None,
            used: 0,
        }
    }

    /// Cap the number of uses.
    ///
    /// # Panics
    ///
    /// Panics if `max_uses` is zero.
    #[must_use]
    pub fn with_max_uses(mut self, max_uses: u32) -> Self {
        assert!(max_uses > 0, "Use cap must be positive");
        self.max_uses = Some(max_uses);
        self
    }

    /// Reduction as a fraction in `[0, 1]`.
    #[must_use]
    pub fn reduction(&self) -> f64 {
        f64::from(self.reduction_percent) / 100.0
    }

    /// Remaining uses, or `None` when unlimited.
    #[must_use]
    pub fn uses_left(&self) -> Option<u32> {
        self.max_uses.map(|max| max.saturating_sub(self.used))
    }

    /// Record one use. Counts only when a cap is set; never fails.
    pub fn use_once(&mut self) {
        if self.max_uses.is_some() {
            self.used += 1;
        }
    }

    /// Damage left of `impact` after this defense: `floor(impact * (1 - r))`.
    #[must_use]
    pub fn mitigate(&self, impact: u32) -> u32 {
        let kept = u64::from(100 - self.reduction_percent);
        // impact <= u32::MAX and kept <= 100, so the quotient fits back in u32
        (u64::from(impact) * kept / 100) as u32
    }
}

impl Performable for Defense {
    fn name(&self) -> &str {
        &self.name
    }

    fn fuel_cost(&self) -> u32 {
        self.fuel_cost
    }

    fn can_perform(&self, fuel: u32) -> bool {
        if let Some(max) = self.max_uses {
            if self.used >= max {
                return false;
            }
        }
        fuel >= self.fuel_cost
    }
}

/// Index of an action inside one driver's catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRef {
    Move(usize),
    Defense(usize),
}

impl ActionRef {
    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, ActionRef::Move(_))
    }

    #[must_use]
    pub fn is_defense(self) -> bool {
        matches!(self, ActionRef::Defense(_))
    }
}

/// Borrowed view of a catalog entry, tagged by kind.
#[derive(Clone, Copy, Debug)]
pub enum Action<'a> {
    Move(&'a Move),
    Defense(&'a Defense),
}

impl Performable for Action<'_> {
    fn name(&self) -> &str {
        match self {
            Action::Move(m) => m.name(),
            Action::Defense(d) => d.name(),
        }
    }

    fn fuel_cost(&self) -> u32 {
        match self {
            Action::Move(m) => m.fuel_cost(),
            Action::Defense(d) => d.fuel_cost(),
        }
    }

    fn can_perform(&self, fuel: u32) -> bool {
        match self {
            Action::Move(m) => m.can_perform(fuel),
            Action::Defense(d) => d.can_perform(fuel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_move_gate() {
        let m = Move::new("DRS Boost", 45, 12);
        assert!(m.can_perform(45));
        assert!(m.can_perform(500));
        assert!(!m.can_perform(44));
    }

    #[test]
    fn test_unlimited_defense_never_counts() {
        let mut d = Defense::new("Brake Late", 25, 30);
        for _ in 0..10 {
            d.use_once();
        }
        assert_eq!(d.used, 0);
        assert_eq!(d.uses_left(), None);
        assert!(d.can_perform(25));
    }

    #[test]
    fn test_capped_defense_exhausts() {
        let mut d = Defense::new("Aggressive Block", 35, 100).with_max_uses(2);
        assert!(d.can_perform(500));
        d.use_once();
        assert_eq!(d.uses_left(), Some(1));
        assert!(d.can_perform(500));
        d.use_once();
        assert!(!d.can_perform(500));

        // The counter keeps going, the gate stays shut
        d.use_once();
        assert_eq!(d.used, 3);
        assert_eq!(d.uses_left(), Some(0));
        assert!(!d.can_perform(500));
    }

    #[test]
    fn test_defense_gate_needs_fuel() {
        let d = Defense::new("ERS Deployment", 40, 50).with_max_uses(3);
        assert!(!d.can_perform(39));
        assert!(d.can_perform(40));
    }

    #[test]
    fn test_mitigate() {
        assert_eq!(Defense::new("a", 0, 30).mitigate(20), 14);
        assert_eq!(Defense::new("b", 0, 40).mitigate(22), 13);
        assert_eq!(Defense::new("c", 0, 50).mitigate(7), 3);
        assert_eq!(Defense::new("d", 0, 100).mitigate(22), 0);
        assert_eq!(Defense::new("e", 0, 0).mitigate(22), 22);
    }

    #[test]
    fn test_reduction_fraction() {
        assert!((Defense::new("a", 0, 30).reduction() - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "Reduction must be at most 100%")]
    fn test_reduction_over_100() {
        let _ = Defense::new("x", 1, 101);
    }

    #[test]
    fn test_action_view_dispatch() {
        let m = Move::new("Turbo Start", 50, 10);
        let d = Defense::new("Slipstream Cut", 20, 40);
        let actions = [Action::Move(&m), Action::Defense(&d)];
        let names: Vec<_> = actions.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Turbo Start", "Slipstream Cut"]);
        assert_eq!(actions[1].fuel_cost(), 20);
        assert!(!actions[0].can_perform(49));
        assert!(ActionRef::Move(0).is_move());
        assert!(ActionRef::Defense(1).is_defense());
    }

    proptest! {
        #[test]
        fn prop_move_gate_matches_cost(cost in 0u32..1000, fuel in 0u32..1000) {
            let m = Move::new("m", cost, 1);
            prop_assert_eq!(m.can_perform(fuel), fuel >= cost);
        }

        #[test]
        fn prop_capped_gate_closes_after_cap(cap in 1u32..10, extra in 0u32..5) {
            let mut d = Defense::new("d", 0, 50).with_max_uses(cap);
            for _ in 0..cap {
                prop_assert!(d.can_perform(0));
                d.use_once();
            }
            for _ in 0..extra {
                d.use_once();
            }
            prop_assert!(!d.can_perform(u32::MAX));
            prop_assert_eq!(d.used, cap + extra);
        }

        #[test]
        fn prop_mitigate_matches_floor(impact in 0u32..10_000, pct in 0u8..=100) {
            let d = Defense::new("d", 0, pct);
            let expected = (u64::from(impact) * u64::from(100 - pct)) / 100;
            prop_assert_eq!(u64::from(d.mitigate(impact)), expected);
            prop_assert!(d.mitigate(impact) <= impact);
        }
    }
}

//! The two selectable drivers and their fixed catalogs.

use serde::{Deserialize, Serialize};

use super::action::{Defense, Move};

/// A selectable driver. Drivers differ only in their catalog data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverKind {
    Verstappen,
    Mostafa,
}

impl DriverKind {
    /// Menu order for driver selection (1 = Verstappen, 2 = Mostafa).
    pub const ALL: [DriverKind; 2] = [DriverKind::Verstappen, DriverKind::Mostafa];

    /// Pick a driver by its 1-based menu number.
    #[must_use]
    pub fn from_menu_choice(choice: u32) -> Option<DriverKind> {
        match choice {
            1 => Some(DriverKind::Verstappen),
            2 => Some(DriverKind::Mostafa),
            _ => None,
        }
    }

    /// The driver not chosen.
    #[must_use]
    pub fn rival(self) -> DriverKind {
        match self {
            DriverKind::Verstappen => DriverKind::Mostafa,
            DriverKind::Mostafa => DriverKind::Verstappen,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            DriverKind::Verstappen => "Max Verstappen",
            DriverKind::Mostafa => "Hassan Mostafa",
        }
    }

    /// Offensive moves, in menu order.
    #[must_use]
    pub fn moves(self) -> Vec<Move> {
        match self {
            DriverKind::Verstappen => vec![
                Move::new("DRS Boost", 45, 12),
                Move::new("Red Bull Surge", 80, 20),
                Move::new("Precision Turn", 30, 8),
            ],
            DriverKind::Mostafa => vec![
                Move::new("Turbo Start", 50, 10),
                Move::new("Mercedes Charge", 90, 22),
                Move::new("Corner Mastery", 25, 7),
            ],
        }
    }

    /// Defenses, in menu order, with fresh use counters.
    #[must_use]
    pub fn defenses(self) -> Vec<Defense> {
        match self {
            DriverKind::Verstappen => vec![
                Defense::new("Brake Late", 25, 30),
                Defense::new("ERS Deployment", 40, 50).with_max_uses(3),
            ],
            DriverKind::Mostafa => vec![
                Defense::new("Slipstream Cut", 20, 40),
                Defense::new("Aggressive Block", 35, 100).with_max_uses(2),
            ],
        }
    }
}

impl std::fmt::Display for DriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice() {
        assert_eq!(DriverKind::from_menu_choice(1), Some(DriverKind::Verstappen));
        assert_eq!(DriverKind::from_menu_choice(2), Some(DriverKind::Mostafa));
        assert_eq!(DriverKind::from_menu_choice(0), None);
        assert_eq!(DriverKind::from_menu_choice(3), None);
        assert_eq!(DriverKind::Verstappen.rival(), DriverKind::Mostafa);
    }

    #[test]
    fn test_catalog_shape() {
        for kind in DriverKind::ALL {
            assert_eq!(kind.moves().len(), 3);
            assert_eq!(kind.defenses().len(), 2);
            assert!(kind.defenses().iter().all(|d| d.used == 0));
        }
    }

    #[test]
    fn test_catalog_values() {
        let m = DriverKind::Mostafa.moves();
        assert_eq!(m[1], Move::new("Mercedes Charge", 90, 22));

        let d = DriverKind::Verstappen.defenses();
        assert_eq!(d[1].name, "ERS Deployment");
        assert_eq!(d[1].reduction_percent, 50);
        assert_eq!(d[1].max_uses, Some(3));

        let block = &DriverKind::Mostafa.defenses()[1];
        assert_eq!(block.reduction_percent, 100);
        assert_eq!(block.max_uses, Some(2));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(DriverKind::Verstappen.to_string(), "Max Verstappen");
        assert_eq!(DriverKind::Mostafa.display_name(), "Hassan Mostafa");
    }
}

//! Soft amenity weights supplied by the user.

use crate::core::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest importance level a preference may carry.
pub const MAX_IMPORTANCE: u8 = 4;

/// Human-readable importance scale, indexed by weight.
pub const IMPORTANCE_LABELS: [&str; 5] = [
    "Not Important",
    "Slightly Important",
    "Moderately Important",
    "Very Important",
    "Extremely Important",
];

/// Importance weight per amenity dimension, each in `[0, 4]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub bus: u8,
    pub school: u8,
    pub mall: u8,
    pub supermarket: u8,
    pub cbd: u8,
    pub hawker: u8,
    pub park: u8,
    pub mrt: u8,
}

impl Preferences {
    pub fn weight(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Bus => self.bus,
            Dimension::School => self.school,
            Dimension::Mall => self.mall,
            Dimension::Supermarket => self.supermarket,
            Dimension::Cbd => self.cbd,
            Dimension::Hawker => self.hawker,
            Dimension::Park => self.park,
            Dimension::Mrt => self.mrt,
        }
    }

    pub fn with_weight(mut self, dimension: Dimension, weight: u8) -> Self {
        let slot = match dimension {
            Dimension::Bus => &mut self.bus,
            Dimension::School => &mut self.school,
            Dimension::Mall => &mut self.mall,
            Dimension::Supermarket => &mut self.supermarket,
            Dimension::Cbd => &mut self.cbd,
            Dimension::Hawker => &mut self.hawker,
            Dimension::Park => &mut self.park,
            Dimension::Mrt => &mut self.mrt,
        };
        *slot = weight;
        self
    }

    /// True when no dimension carries any weight; every record then scores 0.
    pub fn is_indifferent(&self) -> bool {
        Dimension::ALL.iter().all(|&d| self.weight(d) == 0)
    }

    // Pure function: check a single weight
    pub fn is_valid_weight(weight: u8) -> bool {
        weight <= MAX_IMPORTANCE
    }

    /// Every out-of-range weight, reported together.
    pub fn validation_errors(&self) -> Vec<String> {
        Dimension::ALL
            .iter()
            .filter(|&&d| !Self::is_valid_weight(self.weight(d)))
            .map(|&d| {
                format!(
                    "{} preference {} is out of range (must be 0-{})",
                    d.key(),
                    self.weight(d),
                    MAX_IMPORTANCE
                )
            })
            .collect()
    }

    pub fn label(weight: u8) -> &'static str {
        IMPORTANCE_LABELS
            .get(weight as usize)
            .copied()
            .unwrap_or("Out of range")
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Dimension::ALL
            .iter()
            .filter(|&&d| self.weight(d) > 0)
            .map(|&d| format!("{}={}", d.key(), self.weight(d)))
            .collect();
        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_indifferent() {
        assert!(Preferences::default().is_indifferent());
        assert!(!Preferences::default()
            .with_weight(Dimension::Mrt, 1)
            .is_indifferent());
    }

    #[test]
    fn test_with_weight_sets_only_that_dimension() {
        let prefs = Preferences::default().with_weight(Dimension::Hawker, 3);
        for dim in Dimension::ALL {
            let expected = if dim == Dimension::Hawker { 3 } else { 0 };
            assert_eq!(prefs.weight(dim), expected);
        }
    }

    #[test]
    fn test_validation_reports_every_bad_weight() {
        let prefs = Preferences {
            bus: 5,
            park: 9,
            mall: 4,
            ..Preferences::default()
        };
        let errors = prefs.validation_errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("bus preference 5"));
        assert!(errors[1].starts_with("park preference 9"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Preferences::label(0), "Not Important");
        assert_eq!(Preferences::label(4), "Extremely Important");
        assert_eq!(Preferences::label(7), "Out of range");
    }

    #[test]
    fn test_display_lists_weighted_dimensions() {
        let prefs = Preferences {
            bus: 4,
            mrt: 2,
            ..Preferences::default()
        };
        assert_eq!(prefs.to_string(), "bus=4, mrt=2");
        assert_eq!(Preferences::default().to_string(), "none");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let prefs: Preferences = toml::from_str("bus = 4\nschool = 1").unwrap();
        assert_eq!(prefs.bus, 4);
        assert_eq!(prefs.school, 1);
        assert_eq!(prefs.mrt, 0);
    }
}

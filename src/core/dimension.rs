//! Amenity dimensions scored by the recommender.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a larger raw feature value is more or less desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Counts of amenities within a radius.
    MoreIsBetter,
    /// Distances to the nearest amenity.
    LessIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Bus,
    School,
    Mall,
    Supermarket,
    Cbd,
    Hawker,
    Park,
    Mrt,
}

impl Dimension {
    /// Canonical order, shared by preferences, calibration and breakdowns.
    pub const ALL: [Dimension; 8] = [
        Dimension::Bus,
        Dimension::School,
        Dimension::Mall,
        Dimension::Supermarket,
        Dimension::Cbd,
        Dimension::Hawker,
        Dimension::Park,
        Dimension::Mrt,
    ];

    /// Preference key, as used in configuration and CLI flags.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Bus => "bus",
            Dimension::School => "school",
            Dimension::Mall => "mall",
            Dimension::Supermarket => "supermarket",
            Dimension::Cbd => "cbd",
            Dimension::Hawker => "hawker",
            Dimension::Park => "park",
            Dimension::Mrt => "mrt",
        }
    }

    /// Column name in the catalog source.
    pub fn field_name(self) -> &'static str {
        match self {
            Dimension::Bus => "bus_within_0.5",
            Dimension::School => "school_within_2.0",
            Dimension::Mall => "mall_within_2.0",
            Dimension::Supermarket => "supermarket_within_0.5",
            Dimension::Cbd => "cbd_distance",
            Dimension::Hawker => "hawker_distance",
            Dimension::Park => "park_distance",
            Dimension::Mrt => "mrtlrt_distance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Bus => "Bus stops within 500m",
            Dimension::School => "Schools within 2km",
            Dimension::Mall => "Malls within 2km",
            Dimension::Supermarket => "Supermarkets within 500m",
            Dimension::Cbd => "Distance to CBD",
            Dimension::Hawker => "Distance to nearest hawker",
            Dimension::Park => "Distance to nearest park",
            Dimension::Mrt => "Distance to nearest MRT/LRT",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Dimension::Bus | Dimension::School | Dimension::Mall | Dimension::Supermarket => {
                Direction::MoreIsBetter
            }
            Dimension::Cbd | Dimension::Hawker | Dimension::Park | Dimension::Mrt => {
                Direction::LessIsBetter
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub mod coerce;
pub mod dimension;

pub use dimension::{Dimension, Direction};

use serde::{Deserialize, Serialize};

/// Planning regions used by the resale dataset.
pub const KNOWN_REGIONS: &[&str] = &["Central", "East", "North", "North-East", "West"];

/// Flat types used by the resale dataset.
pub const KNOWN_FLAT_TYPES: &[&str] = &[
    "1 ROOM",
    "2 ROOM",
    "3 ROOM",
    "4 ROOM",
    "5 ROOM",
    "EXECUTIVE",
    "MULTI-GENERATION",
];

/// Sentinel filter value that disables a region or flat type constraint.
pub const ALL: &str = "All";

/// One available resale unit, with numeric fields already coerced.
///
/// Serializes with the dataset's own column names so downstream consumers see
/// the same keys they would read from the source file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HousingRecord {
    pub address: String,
    pub town: String,
    pub region: String,
    pub flat_type: String,
    pub floor_area_sqm: f64,
    pub remaining_lease: u32,
    pub resale_price: f64,
    #[serde(rename = "bus_within_0.5")]
    pub bus_within_0_5: f64,
    #[serde(rename = "school_within_2.0")]
    pub school_within_2_0: f64,
    #[serde(rename = "mall_within_2.0")]
    pub mall_within_2_0: f64,
    #[serde(rename = "supermarket_within_0.5")]
    pub supermarket_within_0_5: f64,
    pub cbd_distance: f64,
    pub hawker_distance: f64,
    pub park_distance: f64,
    pub mrtlrt_distance: f64,
    #[serde(rename = "LATITUDE")]
    pub latitude: f64,
    #[serde(rename = "LONGITUDE")]
    pub longitude: f64,
}

impl HousingRecord {
    /// Raw feature value for an amenity dimension (a count or a distance in km).
    pub fn feature(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Bus => self.bus_within_0_5,
            Dimension::School => self.school_within_2_0,
            Dimension::Mall => self.mall_within_2_0,
            Dimension::Supermarket => self.supermarket_within_0_5,
            Dimension::Cbd => self.cbd_distance,
            Dimension::Hawker => self.hawker_distance,
            Dimension::Park => self.park_distance,
            Dimension::Mrt => self.mrtlrt_distance,
        }
    }

    /// Resale price divided by floor area.
    ///
    /// A non-positive floor area yields `f64::INFINITY`, which places the unit
    /// last in any price-efficiency ordering without dropping it.
    pub fn price_per_sqm(&self) -> f64 {
        if self.floor_area_sqm > 0.0 {
            self.resale_price / self.floor_area_sqm
        } else {
            f64::INFINITY
        }
    }

    pub fn is_known_region(&self) -> bool {
        KNOWN_REGIONS.contains(&self.region.as_str())
    }

    pub fn is_known_flat_type(&self) -> bool {
        KNOWN_FLAT_TYPES.contains(&self.flat_type.as_str())
    }
}

/// Normalized sub-score per amenity dimension.
///
/// This is the amenity profile of a unit: each value is roughly in `[0, 1]`
/// for units inside the calibration range, and may fall outside it for units
/// beyond the reference dataset's extremes.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub bus: f64,
    pub school: f64,
    pub mall: f64,
    pub supermarket: f64,
    pub cbd: f64,
    pub hawker: f64,
    pub park: f64,
    pub mrt: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> f64 {
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

    pub fn set(&mut self, dimension: Dimension, value: f64) {
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
        *slot = value;
    }

    /// Dimension/value pairs in canonical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

/// A housing record with its derived ranking keys attached.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: HousingRecord,
    pub price_per_sqm: f64,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

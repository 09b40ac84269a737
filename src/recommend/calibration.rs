//! Normalization constants table.
//!
//! Each amenity feature is log-compressed with `ln(x + 1)` and min-max scaled
//! against bounds measured offline on the full reference dataset. The bounds
//! are calibration data: scores are only comparable between runs that use the
//! same table version.
//!
//! Count dimensions use `lnMin = ln(0 + 1) = 0` and `lnMax = ln(max + 1)`.
//! Distance dimensions first reflect the feature around a reference constant
//! `C` (the log of the largest observed distance), then scale with their own
//! bounds.

use crate::core::coerce::COERCION_DEFAULT;
use crate::core::{Dimension, Direction};
use serde::Serialize;

/// Calibration for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizationConstants {
    pub log_min: f64,
    pub log_max: f64,
    /// Reflection constant for less-is-better dimensions
    pub reference: Option<f64>,
}

impl NormalizationConstants {
    pub const fn counts(log_max: f64) -> Self {
        Self {
            log_min: 0.0,
            log_max,
            reference: None,
        }
    }

    pub const fn distances(reference: f64, log_min: f64, log_max: f64) -> Self {
        Self {
            log_min,
            log_max,
            reference: Some(reference),
        }
    }

    pub fn span(&self) -> f64 {
        self.log_max - self.log_min
    }
}

/// Versioned table of calibration constants, one entry per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationTable {
    pub version: &'static str,
    pub bus: NormalizationConstants,
    pub school: NormalizationConstants,
    pub mall: NormalizationConstants,
    pub supermarket: NormalizationConstants,
    pub cbd: NormalizationConstants,
    pub hawker: NormalizationConstants,
    pub park: NormalizationConstants,
    pub mrt: NormalizationConstants,
}

/// Calibration measured on the 2024 available-flats dataset.
pub const REFERENCE_CALIBRATION: CalibrationTable = CalibrationTable {
    version: "radar-2024.1",
    bus: NormalizationConstants::counts(2.772588722239781),
    school: NormalizationConstants::counts(2.833213344056216),
    mall: NormalizationConstants::counts(1.791759469228055),
    supermarket: NormalizationConstants::counts(1.0986122886681098),
    cbd: NormalizationConstants::distances(2.6561072220310518, -1.346968, 2.124915),
    hawker: NormalizationConstants::distances(0.4868281744936002, -1.566642, 4.453686),
    park: NormalizationConstants::distances(0.5096731599345877, -1.370654, 2.588678),
    mrt: NormalizationConstants::distances(0.4227980215034163, -1.834655, 3.268846),
};

impl Default for CalibrationTable {
    fn default() -> Self {
        REFERENCE_CALIBRATION
    }
}

impl CalibrationTable {
    pub fn get(&self, dimension: Dimension) -> &NormalizationConstants {
        match dimension {
            Dimension::Bus => &self.bus,
            Dimension::School => &self.school,
            Dimension::Mall => &self.mall,
            Dimension::Supermarket => &self.supermarket,
            Dimension::Cbd => &self.cbd,
            Dimension::Hawker => &self.hawker,
            Dimension::Park => &self.park,
            Dimension::Mrt => &self.mrt,
        }
    }

    /// Normalized sub-score of a raw feature value for one dimension.
    ///
    /// Returns 0 for a degenerate calibration (`lnMax == lnMin`). A
    /// non-finite raw value is coerced like a malformed catalog cell.
    pub fn normalize(&self, dimension: Dimension, raw: f64) -> f64 {
        let constants = self.get(dimension);
        let span = constants.span();
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }

        let raw = if raw.is_finite() { raw } else { COERCION_DEFAULT };
        let compressed = raw.max(0.0).ln_1p();
        let oriented = match (dimension.direction(), constants.reference) {
            (Direction::MoreIsBetter, _) => compressed,
            (Direction::LessIsBetter, Some(reference)) => reference - compressed,
            (Direction::LessIsBetter, None) => -compressed,
        };

        (oriented - constants.log_min) / span
    }

    /// Every structural problem with the table.
    pub fn validation_errors(&self) -> Vec<String> {
        Dimension::ALL
            .iter()
            .filter_map(|&d| {
                let c = self.get(d);
                if !(c.log_min.is_finite() && c.log_max.is_finite()) {
                    Some(format!("{d} calibration bounds must be finite"))
                } else if c.log_max <= c.log_min {
                    Some(format!(
                        "{d} calibration log_max {} must exceed log_min {}",
                        c.log_max, c.log_min
                    ))
                } else if d.direction() == Direction::LessIsBetter && c.reference.is_none() {
                    Some(format!("{d} calibration needs a reference constant"))
                } else {
                    None
                }
            })
            .collect()
    }
}

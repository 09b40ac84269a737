//! Catalog-level views that sit beside the recommendation engine: filter
//! choices, grouped means, affordability ratios and per-record amenity
//! profiles.

pub mod affordability;
pub mod options;
pub mod rollup;

pub use affordability::{
    load_income_observations, load_price_observations, mean_price_by_year_and_type,
    parse_income_observations, parse_price_observations, price_to_income_ratios,
    IncomeObservation, PriceObservation, RatioEntry, YearTypeMean,
};
pub use options::FilterOptions;
pub use rollup::{rollup_mean, summarize_catalog, GroupBy, GroupMean, GroupSummary};

use crate::core::{HousingRecord, ScoreBreakdown};
use crate::recommend::{score_breakdown, CalibrationTable};

/// Normalized amenity sub-scores of one record, each in roughly `[0, 1]`.
pub fn amenity_profile(record: &HousingRecord, calibration: &CalibrationTable) -> ScoreBreakdown {
    score_breakdown(record, calibration)
}

//! Per-record desirability scoring.

use super::calibration::CalibrationTable;
use super::preferences::Preferences;
use crate::core::{Dimension, HousingRecord, ScoreBreakdown, ScoredRecord};
use rayon::prelude::*;

/// Normalized sub-score for every dimension of one record.
pub fn score_breakdown(record: &HousingRecord, table: &CalibrationTable) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    for dimension in Dimension::ALL {
        breakdown.set(dimension, table.normalize(dimension, record.feature(dimension)));
    }
    breakdown
}

/// Weighted sum of the breakdown: `Σ preference_i * normalized_i`.
pub fn weighted_score(breakdown: &ScoreBreakdown, preferences: &Preferences) -> f64 {
    breakdown
        .iter()
        .map(|(dimension, value)| f64::from(preferences.weight(dimension)) * value)
        .sum()
}

pub fn score_record(
    record: &HousingRecord,
    preferences: &Preferences,
    table: &CalibrationTable,
) -> ScoredRecord {
    let breakdown = score_breakdown(record, table);
    ScoredRecord {
        record: record.clone(),
        price_per_sqm: record.price_per_sqm(),
        score: weighted_score(&breakdown, preferences),
        breakdown,
    }
}

/// Score every candidate, preserving input order.
pub fn score_all(
    candidates: &[&HousingRecord],
    preferences: &Preferences,
    table: &CalibrationTable,
) -> Vec<ScoredRecord> {
    candidates
        .iter()
        .map(|record| score_record(record, preferences, table))
        .collect()
}

/// Parallel variant of [`score_all`]; output order matches input order.
pub fn par_score_all(
    candidates: &[&HousingRecord],
    preferences: &Preferences,
    table: &CalibrationTable,
) -> Vec<ScoredRecord> {
    candidates
        .par_iter()
        .map(|record| score_record(record, preferences, table))
        .collect()
}

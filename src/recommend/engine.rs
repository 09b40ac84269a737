//! The recommendation pipeline: filter, score, shortlist.
//!
//! Pure and synchronous. The caller loads the catalog and passes it in; the
//! engine performs no I/O and keeps no state between calls, so concurrent
//! calls with different inputs need no coordination.

use super::calibration::{CalibrationTable, REFERENCE_CALIBRATION};
use super::filter::{apply_filter, Filter, FilterStatistics};
use super::preferences::Preferences;
use super::scoring::{par_score_all, score_all};
use super::shortlist::{select_shortlist, ZeroScorePolicy, DEFAULT_SHORTLIST_SIZE};
use crate::core::{HousingRecord, ScoredRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filtered sets at least this large are scored on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Tunables for a recommendation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendOptions {
    pub shortlist_size: usize,
    pub zero_score_policy: ZeroScorePolicy,
    pub parallel: bool,
    pub parallel_threshold: usize,
    pub calibration: CalibrationTable,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            shortlist_size: DEFAULT_SHORTLIST_SIZE,
            zero_score_policy: ZeroScorePolicy::default(),
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            calibration: REFERENCE_CALIBRATION,
        }
    }
}

impl RecommendOptions {
    fn use_parallel(&self, candidates: usize) -> bool {
        self.parallel && candidates >= self.parallel_threshold
    }
}

/// Shortlist plus the bookkeeping needed to explain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub catalog_size: usize,
    pub candidates_considered: usize,
    pub filter_statistics: FilterStatistics,
    pub narrowed_by_score: bool,
    pub shortlist: Vec<ScoredRecord>,
}

impl RecommendationReport {
    /// True when no record survived the filter; callers show a "no match" state.
    pub fn is_empty(&self) -> bool {
        self.shortlist.is_empty()
    }
}

/// Recommend up to three records with the reference calibration.
///
/// An empty result means nothing matched the filter; it is not an error.
/// Preference weights must lie in `0..=MAX_IMPORTANCE`; the config and CLI
/// layers reject anything else, and debug builds assert it here.
pub fn recommend(
    catalog: &[HousingRecord],
    filter: &Filter,
    preferences: &Preferences,
) -> Vec<ScoredRecord> {
    recommend_with(catalog, filter, preferences, &RecommendOptions::default())
}

pub fn recommend_with(
    catalog: &[HousingRecord],
    filter: &Filter,
    preferences: &Preferences,
    options: &RecommendOptions,
) -> Vec<ScoredRecord> {
    recommend_with_report(catalog, filter, preferences, options).shortlist
}

pub fn recommend_with_report(
    catalog: &[HousingRecord],
    filter: &Filter,
    preferences: &Preferences,
    options: &RecommendOptions,
) -> RecommendationReport {
    debug_assert!(
        preferences.validation_errors().is_empty(),
        "preference weights out of range: {:?}",
        preferences.validation_errors()
    );
    let (candidates, filter_statistics) = apply_filter(catalog, filter);
    debug!(
        total = filter_statistics.total_rows,
        accepted = filter_statistics.accepted,
        by_price = filter_statistics.rejected_by_price,
        by_lease = filter_statistics.rejected_by_lease,
        by_region = filter_statistics.rejected_by_region,
        by_flat_type = filter_statistics.rejected_by_flat_type,
        "Applied hard filter"
    );

    if candidates.is_empty() {
        debug!("No candidates survived the filter");
        return RecommendationReport {
            catalog_size: catalog.len(),
            candidates_considered: 0,
            filter_statistics,
            narrowed_by_score: false,
            shortlist: Vec::new(),
        };
    }

    let scored = if options.use_parallel(candidates.len()) {
        par_score_all(&candidates, preferences, &options.calibration)
    } else {
        score_all(&candidates, preferences, &options.calibration)
    };

    let selection = select_shortlist(scored, options.shortlist_size, options.zero_score_policy);
    debug!(
        narrowed = selection.narrowed_by_score,
        returned = selection.shortlist.len(),
        "Selected shortlist"
    );

    RecommendationReport {
        catalog_size: catalog.len(),
        candidates_considered: candidates.len(),
        filter_statistics,
        narrowed_by_score: selection.narrowed_by_score,
        shortlist: selection.shortlist,
    }
}

//! Recommendation engine
//!
//! Given a catalog, hard filters and amenity preferences, the engine:
//! - drops records that violate any filter (`filter`)
//! - scores survivors with log-compressed, calibrated sub-scores (`calibration`, `scoring`)
//! - narrows to the best scorers and returns the most price-efficient (`shortlist`)

pub mod calibration;
pub mod engine;
pub mod filter;
pub mod preferences;
pub mod scoring;
pub mod shortlist;

pub use calibration::{CalibrationTable, NormalizationConstants, REFERENCE_CALIBRATION};
pub use engine::{
    recommend, recommend_with, recommend_with_report, RecommendOptions, RecommendationReport,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use filter::{apply_filter, passes_filter, Filter, FilterStatistics};
pub use preferences::{Preferences, MAX_IMPORTANCE};
pub use scoring::{score_breakdown, score_record, weighted_score};
pub use shortlist::{select_shortlist, Selection, ZeroScorePolicy, DEFAULT_SHORTLIST_SIZE};

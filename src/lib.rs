//! # hdbmatch
//!
//! Recommends HDB resale flats. A catalog of listings is narrowed by hard
//! filters (price, remaining lease, region, flat type), scored against soft
//! amenity preferences using log-compressed, calibrated sub-scores, and the
//! most price-efficient of the best-scoring units are returned.
//!
//! ```no_run
//! use hdbmatch::catalog::load_catalog;
//! use hdbmatch::recommend::{recommend, Filter, Preferences};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("flats.csv")).unwrap();
//! let filter = Filter {
//!     region: "West".to_string(),
//!     max_price: 600_000.0,
//!     ..Filter::default()
//! };
//! let prefs = Preferences { bus: 4, mrt: 2, ..Preferences::default() };
//! for pick in recommend(&catalog.records, &filter, &prefs) {
//!     println!("{} {:.0}/sqm", pick.record.address, pick.price_per_sqm);
//! }
//! ```

pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod recommend;

pub use crate::core::{Dimension, HousingRecord, ScoreBreakdown, ScoredRecord};
pub use crate::errors::{Error, Result};
pub use crate::recommend::{
    recommend, recommend_with, recommend_with_report, CalibrationTable, Filter, Preferences,
    RecommendOptions, RecommendationReport, ZeroScorePolicy,
};

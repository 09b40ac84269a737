//! Shortlist selection: narrow by score, then pick the most price-efficient.

use crate::core::ScoredRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of recommendations returned.
pub const DEFAULT_SHORTLIST_SIZE: usize = 3;

/// When to skip the score-based narrowing step.
///
/// Skipping means every filtered candidate competes on price per sqm alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroScorePolicy {
    /// Skip only when every candidate scores exactly zero.
    #[default]
    AllTied,
    /// Skip whenever the highest score is exactly zero.
    TopIsZero,
    /// Always narrow to the top scorers.
    Never,
}

impl ZeroScorePolicy {
    /// Whether narrowing applies to candidates already sorted by descending score.
    pub fn should_narrow(self, ranked: &[ScoredRecord]) -> bool {
        let Some(top) = ranked.first() else {
            return false;
        };
        match self {
            ZeroScorePolicy::AllTied => ranked.iter().any(|r| r.score != 0.0),
            ZeroScorePolicy::TopIsZero => top.score != 0.0,
            ZeroScorePolicy::Never => true,
        }
    }
}

/// `-0.0` and `0.0` are the same score; `total_cmp` alone would split them.
fn score_key(score: f64) -> f64 {
    score + 0.0
}

/// Descending by score, a total order.
fn by_score_desc(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    score_key(b.score).total_cmp(&score_key(a.score))
}

/// Ascending by price per sqm; infinite values sort last.
fn by_price_per_sqm(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    a.price_per_sqm.total_cmp(&b.price_per_sqm)
}

/// Outcome of shortlist selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub shortlist: Vec<ScoredRecord>,
    /// Whether the candidate pool was cut to the top scorers first
    pub narrowed_by_score: bool,
}

/// Pick up to `size` records from scored candidates.
///
/// Both sorts are stable, so equal keys keep catalog order.
pub fn select_shortlist(
    mut candidates: Vec<ScoredRecord>,
    size: usize,
    policy: ZeroScorePolicy,
) -> Selection {
    candidates.sort_by(by_score_desc);

    let narrowed_by_score = policy.should_narrow(&candidates);
    if narrowed_by_score {
        candidates.truncate(size);
    }

    candidates.sort_by(by_price_per_sqm);
    candidates.truncate(size);

    Selection {
        shortlist: candidates,
        narrowed_by_score,
    }
}

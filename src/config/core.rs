use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{Error, Result};
use crate::io::OutputFormat;
use crate::recommend::{
    Filter, Preferences, RecommendOptions, ZeroScorePolicy, DEFAULT_PARALLEL_THRESHOLD,
    DEFAULT_SHORTLIST_SIZE,
};

/// Root configuration structure for hdbmatch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HdbmatchConfig {
    /// Where the listing catalog lives
    pub catalog: CatalogConfig,

    /// Default hard filters
    pub filter: Filter,

    /// Default amenity weights
    pub preferences: Preferences,

    /// Shortlist selection tunables
    pub shortlist: ShortlistConfig,

    /// Output configuration
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Relative paths resolve against the working directory
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistConfig {
    pub size: usize,
    pub zero_score_policy: ZeroScorePolicy,
    pub parallel: bool,
    pub parallel_threshold: usize,
}

impl Default for ShortlistConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SHORTLIST_SIZE,
            zero_score_policy: ZeroScorePolicy::default(),
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ShortlistConfig {
    pub fn to_options(&self) -> RecommendOptions {
        RecommendOptions {
            shortlist_size: self.size,
            zero_score_policy: self.zero_score_policy,
            parallel: self.parallel,
            parallel_threshold: self.parallel_threshold,
            ..RecommendOptions::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_format: OutputFormat,
}

impl HdbmatchConfig {
    /// Every configuration problem, reported together.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = self.filter.validation_errors();
        errors.extend(self.preferences.validation_errors());
        if self.shortlist.size == 0 {
            errors.push("shortlist size must be at least 1".to_string());
        }
        errors
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}

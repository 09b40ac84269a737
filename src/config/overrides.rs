//! Command-line values layered over the configuration file.
//!
//! Each `Some` field replaces the configured value; `None` keeps it.

use crate::core::Dimension;
use crate::recommend::{Filter, Preferences, ZeroScorePolicy};

use super::core::ShortlistConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOverrides {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_remaining_lease: Option<u32>,
    pub region: Option<String>,
    pub flat_type: Option<String>,
}

impl FilterOverrides {
    pub fn apply(&self, base: &Filter) -> Filter {
        Filter {
            min_price: self.min_price.unwrap_or(base.min_price),
            max_price: self.max_price.unwrap_or(base.max_price),
            min_remaining_lease: self.min_remaining_lease.unwrap_or(base.min_remaining_lease),
            region: self.region.clone().unwrap_or_else(|| base.region.clone()),
            flat_type: self
                .flat_type
                .clone()
                .unwrap_or_else(|| base.flat_type.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceOverrides {
    pub bus: Option<u8>,
    pub school: Option<u8>,
    pub mall: Option<u8>,
    pub supermarket: Option<u8>,
    pub cbd: Option<u8>,
    pub hawker: Option<u8>,
    pub park: Option<u8>,
    pub mrt: Option<u8>,
}

impl PreferenceOverrides {
    fn get(&self, dimension: Dimension) -> Option<u8> {
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

    pub fn apply(&self, base: &Preferences) -> Preferences {
        Dimension::ALL.iter().fold(*base, |prefs, &dimension| {
            match self.get(dimension) {
                Some(weight) => prefs.with_weight(dimension, weight),
                None => prefs,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortlistOverrides {
    pub size: Option<usize>,
    pub zero_score_policy: Option<ZeroScorePolicy>,
    pub parallel: Option<bool>,
}

impl ShortlistOverrides {
    pub fn apply(&self, base: &ShortlistConfig) -> ShortlistConfig {
        ShortlistConfig {
            size: self.size.unwrap_or(base.size),
            zero_score_policy: self.zero_score_policy.unwrap_or(base.zero_score_policy),
            parallel: self.parallel.unwrap_or(base.parallel),
            parallel_threshold: base.parallel_threshold,
        }
    }
}

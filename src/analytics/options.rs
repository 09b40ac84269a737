use crate::core::{HousingRecord, ALL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Choices offered for the categorical filters, each led by `"All"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub flat_types: Vec<String>,
    pub towns: Vec<String>,
}

fn unique_with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: BTreeSet<&str> = values.collect();
    std::iter::once(ALL)
        .chain(unique.into_iter().filter(|v| *v != ALL))
        .map(str::to_string)
        .collect()
}

impl FilterOptions {
    pub fn from_catalog(catalog: &[HousingRecord]) -> Self {
        Self {
            regions: unique_with_all(catalog.iter().map(|r| r.region.as_str())),
            flat_types: unique_with_all(catalog.iter().map(|r| r.flat_type.as_str())),
            towns: unique_with_all(catalog.iter().map(|r| r.town.as_str())),
        }
    }
}

use crate::core::HousingRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mean of one group produced by [`rollup_mean`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean<K> {
    pub key: K,
    pub count: usize,
    pub mean: f64,
}

/// Group `items` by `key_fn` and average `value_fn` within each group.
///
/// Groups come back in ascending key order. Items whose value is `None` are
/// left out of both the count and the mean; a group with no values is omitted.
pub fn rollup_mean<T, K, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> Vec<GroupMean<K>>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> Option<f64>,
{
    let mut groups: BTreeMap<K, (usize, f64)> = BTreeMap::new();
    for item in items {
        if let Some(value) = value_fn(item) {
            let entry = groups.entry(key_fn(item)).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += value;
        }
    }

    groups
        .into_iter()
        .map(|(key, (count, sum))| GroupMean {
            key,
            count,
            mean: sum / count as f64,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    #[default]
    Region,
    Town,
    FlatType,
}

impl GroupBy {
    pub fn key_of(self, record: &HousingRecord) -> &str {
        match self {
            GroupBy::Region => &record.region,
            GroupBy::Town => &record.town,
            GroupBy::FlatType => &record.flat_type,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupBy::Region => "region",
            GroupBy::Town => "town",
            GroupBy::FlatType => "flat type",
        };
        f.write_str(label)
    }
}

/// One row of a grouped catalog summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group: String,
    pub count: usize,
    pub mean_resale_price: f64,
    /// `None` when no record in the group has a positive floor area
    pub mean_price_per_sqm: Option<f64>,
}

/// Count, mean resale price and mean price per sqm for each group.
pub fn summarize_catalog(catalog: &[HousingRecord], group_by: GroupBy) -> Vec<GroupSummary> {
    let prices = rollup_mean(
        catalog,
        |r| group_by.key_of(r).to_string(),
        |r| Some(r.resale_price),
    );
    let per_sqm: BTreeMap<String, f64> = rollup_mean(
        catalog,
        |r| group_by.key_of(r).to_string(),
        |r| Some(r.price_per_sqm()).filter(|v| v.is_finite()),
    )
    .into_iter()
    .map(|g| (g.key, g.mean))
    .collect();

    prices
        .into_iter()
        .map(|g| GroupSummary {
            mean_price_per_sqm: per_sqm.get(&g.key).copied(),
            group: g.key,
            count: g.count,
            mean_resale_price: g.mean,
        })
        .collect()
}

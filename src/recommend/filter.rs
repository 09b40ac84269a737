//! Hard filters and the pure predicates that implement them.
//!
//! Each predicate checks one constraint and can be tested in isolation;
//! [`passes_filter`] is their conjunction. [`FilterStatistics`] records which
//! predicate rejected each row, so an empty shortlist can be explained.

use crate::core::{HousingRecord, ALL};
use serde::{Deserialize, Serialize};

/// Hard constraints on the catalog. Every field defaults to a permissive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Inclusive lower bound on resale price
    #[serde(default)]
    pub min_price: f64,

    /// Inclusive upper bound on resale price
    #[serde(default = "default_max_price")]
    pub max_price: f64,

    /// Inclusive lower bound on remaining lease (years)
    #[serde(default)]
    pub min_remaining_lease: u32,

    /// Region to keep, or `"All"`
    #[serde(default = "default_any")]
    pub region: String,

    /// Flat type to keep, or `"All"`
    #[serde(default = "default_any")]
    pub flat_type: String,
}

pub fn default_max_price() -> f64 {
    f64::INFINITY
}

pub fn default_any() -> String {
    ALL.to_string()
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: default_max_price(),
            min_remaining_lease: 0,
            region: default_any(),
            flat_type: default_any(),
        }
    }
}

impl Filter {
    /// Collect every problem with this filter instead of stopping at the first.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.min_price.is_nan() || self.max_price.is_nan() {
            errors.push("price bounds must be numbers".to_string());
        }
        if self.min_price < 0.0 {
            errors.push(format!("min_price {} must not be negative", self.min_price));
        }
        if self.min_price > self.max_price {
            errors.push(format!(
                "min_price {} exceeds max_price {}",
                self.min_price, self.max_price
            ));
        }
        if self.region.trim().is_empty() {
            errors.push("region must be a region name or \"All\"".to_string());
        }
        if self.flat_type.trim().is_empty() {
            errors.push("flat_type must be a flat type or \"All\"".to_string());
        }
        errors
    }
}

/// Counts of rows rejected by each predicate, in evaluation order.
///
/// A row is charged to the first predicate it fails only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatistics {
    pub total_rows: usize,
    pub rejected_by_price: usize,
    pub rejected_by_lease: usize,
    pub rejected_by_region: usize,
    pub rejected_by_flat_type: usize,
    pub accepted: usize,
}

impl FilterStatistics {
    pub fn total_rejected(&self) -> usize {
        self.rejected_by_price
            + self.rejected_by_lease
            + self.rejected_by_region
            + self.rejected_by_flat_type
    }

    /// Percentage of rows that survived the filter.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        (self.accepted as f64 / self.total_rows as f64) * 100.0
    }
}

/// Rejection reason for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Price,
    Lease,
    Region,
    FlatType,
}

#[inline]
pub fn within_price_range(record: &HousingRecord, filter: &Filter) -> bool {
    record.resale_price >= filter.min_price && record.resale_price <= filter.max_price
}

#[inline]
pub fn meets_min_lease(record: &HousingRecord, filter: &Filter) -> bool {
    record.remaining_lease >= filter.min_remaining_lease
}

#[inline]
pub fn matches_region(record: &HousingRecord, filter: &Filter) -> bool {
    filter.region == ALL || record.region == filter.region
}

#[inline]
pub fn matches_flat_type(record: &HousingRecord, filter: &Filter) -> bool {
    filter.flat_type == ALL || record.flat_type == filter.flat_type
}

/// First predicate the record fails, if any.
pub fn rejection_reason(record: &HousingRecord, filter: &Filter) -> Option<Rejection> {
    if !within_price_range(record, filter) {
        Some(Rejection::Price)
    } else if !meets_min_lease(record, filter) {
        Some(Rejection::Lease)
    } else if !matches_region(record, filter) {
        Some(Rejection::Region)
    } else if !matches_flat_type(record, filter) {
        Some(Rejection::FlatType)
    } else {
        None
    }
}

pub fn passes_filter(record: &HousingRecord, filter: &Filter) -> bool {
    rejection_reason(record, filter).is_none()
}

/// Keep the records that satisfy every constraint, preserving catalog order.
pub fn apply_filter<'a>(
    catalog: &'a [HousingRecord],
    filter: &Filter,
) -> (Vec<&'a HousingRecord>, FilterStatistics) {
    let mut stats = FilterStatistics {
        total_rows: catalog.len(),
        ..FilterStatistics::default()
    };

    let kept = catalog
        .iter()
        .filter(|record| match rejection_reason(record, filter) {
            None => {
                stats.accepted += 1;
                true
            }
            Some(Rejection::Price) => {
                stats.rejected_by_price += 1;
                false
            }
            Some(Rejection::Lease) => {
                stats.rejected_by_lease += 1;
                false
            }
            Some(Rejection::Region) => {
                stats.rejected_by_region += 1;
                false
            }
            Some(Rejection::FlatType) => {
                stats.rejected_by_flat_type += 1;
                false
            }
        })
        .collect();

    (kept, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::sample_record;

    fn record(price: f64, lease: u32, region: &str, flat_type: &str) -> HousingRecord {
        let mut r = sample_record("10 TEST RD");
        r.resale_price = price;
        r.remaining_lease = lease;
        r.region = region.to_string();
        r.flat_type = flat_type.to_string();
        r
    }

    #[test]
    fn test_default_filter_accepts_everything() {
        let filter = Filter::default();
        assert!(passes_filter(&record(1.0, 0, "East", "2 ROOM"), &filter));
        assert!(passes_filter(&record(5_000_000.0, 99, "West", "EXECUTIVE"), &filter));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = Filter {
            min_price: 300_000.0,
            max_price: 500_000.0,
            ..Filter::default()
        };
        assert!(within_price_range(&record(300_000.0, 50, "East", "3 ROOM"), &filter));
        assert!(within_price_range(&record(500_000.0, 50, "East", "3 ROOM"), &filter));
        assert!(!within_price_range(&record(299_999.0, 50, "East", "3 ROOM"), &filter));
        assert!(!within_price_range(&record(500_001.0, 50, "East", "3 ROOM"), &filter));
    }

    #[test]
    fn test_lease_bound_is_inclusive() {
        let filter = Filter {
            min_remaining_lease: 60,
            ..Filter::default()
        };
        assert!(meets_min_lease(&record(1.0, 60, "East", "3 ROOM"), &filter));
        assert!(!meets_min_lease(&record(1.0, 59, "East", "3 ROOM"), &filter));
    }

    #[test]
    fn test_region_and_flat_type_sentinels() {
        let filter = Filter {
            region: "West".to_string(),
            flat_type: "3 ROOM".to_string(),
            ..Filter::default()
        };
        assert!(passes_filter(&record(1.0, 1, "West", "3 ROOM"), &filter));
        assert_eq!(
            rejection_reason(&record(1.0, 1, "East", "3 ROOM"), &filter),
            Some(Rejection::Region)
        );
        assert_eq!(
            rejection_reason(&record(1.0, 1, "West", "4 ROOM"), &filter),
            Some(Rejection::FlatType)
        );
    }

    #[test]
    fn test_apply_filter_preserves_order_and_counts() {
        let catalog = vec![
            record(100.0, 10, "West", "3 ROOM"),
            record(900.0, 10, "West", "3 ROOM"),
            record(200.0, 1, "West", "3 ROOM"),
            record(300.0, 10, "East", "3 ROOM"),
            record(400.0, 10, "West", "5 ROOM"),
            record(500.0, 10, "West", "3 ROOM"),
        ];
        let filter = Filter {
            max_price: 800.0,
            min_remaining_lease: 5,
            region: "West".to_string(),
            flat_type: "3 ROOM".to_string(),
            ..Filter::default()
        };

        let (kept, stats) = apply_filter(&catalog, &filter);
        let prices: Vec<f64> = kept.iter().map(|r| r.resale_price).collect();
        assert_eq!(prices, vec![100.0, 500.0]);
        assert_eq!(
            stats,
            FilterStatistics {
                total_rows: 6,
                rejected_by_price: 1,
                rejected_by_lease: 1,
                rejected_by_region: 1,
                rejected_by_flat_type: 1,
                accepted: 2,
            }
        );
        assert_eq!(stats.total_rejected(), 4);
    }

    #[test]
    fn test_validation_errors_accumulate() {
        let filter = Filter {
            min_price: -5.0,
            max_price: -10.0,
            region: " ".to_string(),
            ..Filter::default()
        };
        let errors = filter.validation_errors();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_acceptance_rate_of_empty_input() {
        assert_eq!(FilterStatistics::default().acceptance_rate(), 0.0);
    }
}

//! End-to-end scenarios for the recommendation engine.

mod common;

use common::{addresses, record};
use hdbmatch::core::HousingRecord;
use hdbmatch::recommend::{
    recommend, recommend_with, recommend_with_report, Filter, Preferences, RecommendOptions,
    ZeroScorePolicy,
};
use pretty_assertions::assert_eq;

/// Five units whose only difference in amenities is the bus-stop count.
fn bus_catalog() -> Vec<HousingRecord> {
    // (address, bus stops, price, area): cheapest per sqm is "bus-10", then
    // "bus-1", "bus-0", "bus-5", and the best-served unit is the dearest.
    [
        ("bus-0", 0.0, 400_000.0, 100.0),
        ("bus-1", 1.0, 380_000.0, 100.0),
        ("bus-5", 5.0, 450_000.0, 100.0),
        ("bus-10", 10.0, 300_000.0, 100.0),
        ("bus-50", 50.0, 700_000.0, 100.0),
    ]
    .iter()
    .map(|&(address, bus, price, area)| {
        let mut r = record(address, price, area);
        r.bus_within_0_5 = bus;
        r
    })
    .collect()
}

#[test]
fn test_highest_bus_count_ranks_first_by_score() {
    let prefs = Preferences {
        bus: 4,
        ..Preferences::default()
    };
    let options = RecommendOptions {
        shortlist_size: 1,
        ..RecommendOptions::default()
    };
    // With a single slot the score narrowing alone decides the winner.
    let result = recommend_with(&bus_catalog(), &Filter::default(), &prefs, &options);
    assert_eq!(addresses(&result), vec!["bus-50"]);
    assert!(result[0].breakdown.bus > 1.0);
}

#[test]
fn test_bus_preference_shortlists_top_three_scorers() {
    let prefs = Preferences {
        bus: 4,
        ..Preferences::default()
    };
    let result = recommend(&bus_catalog(), &Filter::default(), &prefs);
    // Top three by score are bus-50, bus-10 and bus-5, re-ordered by price per sqm.
    assert_eq!(addresses(&result), vec!["bus-10", "bus-5", "bus-50"]);
}

#[test]
fn test_no_preferences_returns_three_cheapest_per_sqm() {
    let result = recommend(&bus_catalog(), &Filter::default(), &Preferences::default());
    assert!(result.iter().all(|r| r.score == 0.0));
    assert_eq!(addresses(&result), vec!["bus-10", "bus-1", "bus-0"]);
}

#[test]
fn test_empty_catalog_returns_empty() {
    let prefs = Preferences {
        park: 2,
        ..Preferences::default()
    };
    assert!(recommend(&[], &Filter::default(), &prefs).is_empty());
}

#[test]
fn test_zero_floor_area_is_kept_and_sorted_last() {
    let catalog = vec![
        record("no-area", 100_000.0, 0.0),
        record("normal", 500_000.0, 100.0),
    ];
    let result = recommend(&catalog, &Filter::default(), &Preferences::default());
    assert_eq!(addresses(&result), vec!["normal", "no-area"]);
    assert!(result[1].price_per_sqm.is_infinite());
    assert!(result[1].price_per_sqm > 0.0);
}

#[test]
fn test_filter_excluding_everything_is_not_an_error() {
    let filter = Filter {
        max_price: 1_000.0,
        ..Filter::default()
    };
    let report = recommend_with_report(
        &bus_catalog(),
        &filter,
        &Preferences::default(),
        &RecommendOptions::default(),
    );
    assert!(report.is_empty());
    assert_eq!(report.candidates_considered, 0);
    assert_eq!(report.filter_statistics.rejected_by_price, 5);
}

#[test]
fn test_region_and_flat_type_filters_combine() {
    let mut catalog = bus_catalog();
    catalog[0].region = "East".to_string();
    catalog[1].flat_type = "3 ROOM".to_string();
    let filter = Filter {
        region: "West".to_string(),
        flat_type: "4 ROOM".to_string(),
        ..Filter::default()
    };
    let report = recommend_with_report(
        &catalog,
        &filter,
        &Preferences::default(),
        &RecommendOptions::default(),
    );
    assert_eq!(report.candidates_considered, 3);
    assert_eq!(report.filter_statistics.rejected_by_region, 1);
    assert_eq!(report.filter_statistics.rejected_by_flat_type, 1);
}

#[test]
fn test_never_policy_narrows_even_when_all_scores_are_zero() {
    let options = RecommendOptions {
        zero_score_policy: ZeroScorePolicy::Never,
        ..RecommendOptions::default()
    };
    let result = recommend_with(
        &bus_catalog(),
        &Filter::default(),
        &Preferences::default(),
        &options,
    );
    // All tied at zero: narrowing keeps the first three in catalog order.
    assert_eq!(addresses(&result), vec!["bus-1", "bus-0", "bus-5"]);
}

#[test]
fn test_large_catalog_parallel_matches_sequential() {
    let catalog: Vec<HousingRecord> = (0..5_000)
        .map(|i| {
            let mut r = record(&format!("unit-{i}"), 300_000.0 + (i % 97) as f64 * 1_000.0, 90.0);
            r.bus_within_0_5 = (i % 23) as f64;
            r.mrtlrt_distance = (i % 11) as f64 * 0.3;
            r
        })
        .collect();
    let prefs = Preferences {
        bus: 3,
        mrt: 2,
        ..Preferences::default()
    };
    let sequential = RecommendOptions {
        parallel: false,
        ..RecommendOptions::default()
    };
    let parallel = RecommendOptions {
        parallel: true,
        parallel_threshold: 1,
        ..RecommendOptions::default()
    };
    assert_eq!(
        recommend_with(&catalog, &Filter::default(), &prefs, &sequential),
        recommend_with(&catalog, &Filter::default(), &prefs, &parallel)
    );
}

#[test]
fn test_infinite_feature_with_zero_weight_scores_like_finite() {
    let mut unbounded = record("inf-bus", 300_000.0, 100.0);
    unbounded.bus_within_0_5 = f64::INFINITY;
    unbounded.mrtlrt_distance = 0.6;
    let mut plain = record("plain", 320_000.0, 100.0);
    plain.bus_within_0_5 = 4.0;
    plain.mrtlrt_distance = 0.6;

    let prefs = Preferences {
        mrt: 1,
        ..Preferences::default()
    };
    let result = recommend(&[unbounded, plain], &Filter::default(), &prefs);

    assert_eq!(addresses(&result), vec!["inf-bus", "plain"]);
    assert!(result[0].score.is_finite());
    assert_eq!(result[0].score, result[1].score);
    assert_eq!(result[0].breakdown.bus, 0.0);
}

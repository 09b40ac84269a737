// Test utility module for hdbmatch integration tests
#![allow(dead_code)]

use hdbmatch::core::HousingRecord;
use std::path::PathBuf;

/// Header row of the available-flats dataset.
pub const CATALOG_HEADER: &str = "address,town,region,flat_type,floor_area_sqm,remaining_lease,resale_price,bus_within_0.5,school_within_2.0,mall_within_2.0,supermarket_within_0.5,cbd_distance,hawker_distance,park_distance,mrtlrt_distance,LATITUDE,LONGITUDE";

/// A West 4-room unit with every amenity feature at zero.
pub fn record(address: &str, resale_price: f64, floor_area_sqm: f64) -> HousingRecord {
    HousingRecord {
        address: address.to_string(),
        town: "JURONG WEST".to_string(),
        region: "West".to_string(),
        flat_type: "4 ROOM".to_string(),
        floor_area_sqm,
        remaining_lease: 75,
        resale_price,
        bus_within_0_5: 0.0,
        school_within_2_0: 0.0,
        mall_within_2_0: 0.0,
        supermarket_within_0_5: 0.0,
        cbd_distance: 0.0,
        hawker_distance: 0.0,
        park_distance: 0.0,
        mrtlrt_distance: 0.0,
        latitude: 1.34,
        longitude: 103.70,
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/hdb")
        .join(name)
}

pub fn addresses(records: &[hdbmatch::core::ScoredRecord]) -> Vec<&str> {
    records.iter().map(|r| r.record.address.as_str()).collect()
}

//! Field extraction from untyped source rows.

use crate::core::coerce::{coerce_lease_years, coerce_non_negative, coerce_number};
use crate::core::HousingRecord;
use std::collections::HashMap;

/// Identity columns a row must carry to be usable.
pub const IDENTITY_FIELDS: [&str; 4] = ["address", "town", "region", "flat_type"];

/// Numeric columns; a missing one coerces to zero.
pub const NUMERIC_FIELDS: [&str; 13] = [
    "floor_area_sqm",
    "remaining_lease",
    "resale_price",
    "bus_within_0.5",
    "school_within_2.0",
    "mall_within_2.0",
    "supermarket_within_0.5",
    "cbd_distance",
    "hawker_distance",
    "park_distance",
    "mrtlrt_distance",
    "LATITUDE",
    "LONGITUDE",
];

/// One source row as field name to raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    fn identity(&self, field: &str) -> Result<String, String> {
        match self.get(field).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            Some(_) => Err(format!("blank required field `{field}`")),
            None => Err(format!("missing required field `{field}`")),
        }
    }
}

impl FromIterator<(String, String)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl HousingRecord {
    /// Build a record from a raw row.
    ///
    /// Identity fields are required; numeric fields never fail and coerce to
    /// zero when missing or malformed.
    pub fn from_row(row: &RawRow) -> Result<Self, String> {
        Ok(Self {
            address: row.identity("address")?,
            town: row.identity("town")?,
            region: row.identity("region")?,
            flat_type: row.identity("flat_type")?,
            floor_area_sqm: coerce_number(row.get("floor_area_sqm")),
            remaining_lease: coerce_lease_years(row.get("remaining_lease")),
            resale_price: coerce_number(row.get("resale_price")),
            bus_within_0_5: coerce_non_negative(row.get("bus_within_0.5")),
            school_within_2_0: coerce_non_negative(row.get("school_within_2.0")),
            mall_within_2_0: coerce_non_negative(row.get("mall_within_2.0")),
            supermarket_within_0_5: coerce_non_negative(row.get("supermarket_within_0.5")),
            cbd_distance: coerce_non_negative(row.get("cbd_distance")),
            hawker_distance: coerce_non_negative(row.get("hawker_distance")),
            park_distance: coerce_non_negative(row.get("park_distance")),
            mrtlrt_distance: coerce_non_negative(row.get("mrtlrt_distance")),
            latitude: coerce_number(row.get("LATITUDE")),
            longitude: coerce_number(row.get("LONGITUDE")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> RawRow {
        [
            ("address", "406 ANG MO KIO AVE 10"),
            ("town", "ANG MO KIO"),
            ("region", "North-East"),
            ("flat_type", "3 ROOM"),
            ("floor_area_sqm", "68"),
            ("remaining_lease", "55"),
            ("resale_price", "350000"),
            ("bus_within_0.5", "9"),
            ("school_within_2.0", "12"),
            ("mall_within_2.0", "3"),
            ("supermarket_within_0.5", "1"),
            ("cbd_distance", "8.9"),
            ("hawker_distance", "0.2"),
            ("park_distance", "0.6"),
            ("mrtlrt_distance", "0.9"),
            ("LATITUDE", "1.3625"),
            ("LONGITUDE", "103.854"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_full_row_converts() {
        let record = HousingRecord::from_row(&full_row()).unwrap();
        assert_eq!(record.town, "ANG MO KIO");
        assert_eq!(record.remaining_lease, 55);
        assert_eq!(record.bus_within_0_5, 9.0);
        assert_eq!(record.latitude, 1.3625);
    }

    #[test]
    fn test_malformed_numbers_coerce_to_zero() {
        let mut row = full_row();
        row.insert("resale_price", "unknown");
        row.insert("bus_within_0.5", "");
        let record = HousingRecord::from_row(&row).unwrap();
        assert_eq!(record.resale_price, 0.0);
        assert_eq!(record.bus_within_0_5, 0.0);
    }

    #[test]
    fn test_missing_numeric_column_coerces_to_zero() {
        let row: RawRow = full_row()
            .fields
            .into_iter()
            .filter(|(k, _)| k != "park_distance")
            .collect();
        let record = HousingRecord::from_row(&row).unwrap();
        assert_eq!(record.park_distance, 0.0);
    }

    #[test]
    fn test_missing_identity_field_is_rejected() {
        let row: RawRow = full_row()
            .fields
            .into_iter()
            .filter(|(k, _)| k != "flat_type")
            .collect();
        let err = HousingRecord::from_row(&row).unwrap_err();
        assert_eq!(err, "missing required field `flat_type`");
    }

    #[test]
    fn test_blank_identity_field_is_rejected() {
        let mut row = full_row();
        row.insert("address", "   ");
        let err = HousingRecord::from_row(&row).unwrap_err();
        assert_eq!(err, "blank required field `address`");
    }
}

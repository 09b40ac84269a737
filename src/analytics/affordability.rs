//! Price-to-income ratios per `(year, flat_type)`.

use super::rollup::rollup_mean;
use crate::catalog::RawRow;
use crate::core::coerce::coerce_number;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub year: String,
    pub flat_type: String,
    pub resale_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeObservation {
    pub year: String,
    pub flat_type: String,
    pub average_household_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTypeMean {
    pub year: String,
    pub flat_type: String,
    pub count: usize,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioEntry {
    pub year: String,
    pub flat_type: String,
    pub ratio: f64,
}

pub fn mean_price_by_year_and_type(prices: &[PriceObservation]) -> Vec<YearTypeMean> {
    rollup_mean(
        prices,
        |p| (p.year.clone(), p.flat_type.clone()),
        |p| Some(p.resale_price),
    )
    .into_iter()
    .map(|g| YearTypeMean {
        year: g.key.0,
        flat_type: g.key.1,
        count: g.count,
        mean: g.mean,
    })
    .collect()
}

/// Join group means with incomes on `(year, flat_type)`.
///
/// Groups without a matching income, or whose income is not positive, are
/// dropped. When several incomes share a key the first one wins.
pub fn price_to_income_ratios(
    means: &[YearTypeMean],
    incomes: &[IncomeObservation],
) -> Vec<RatioEntry> {
    let mut by_key: HashMap<(&str, &str), f64> = HashMap::new();
    for income in incomes {
        by_key
            .entry((income.year.as_str(), income.flat_type.as_str()))
            .or_insert(income.average_household_income);
    }

    means
        .iter()
        .filter_map(|m| {
            let income = *by_key.get(&(m.year.as_str(), m.flat_type.as_str()))?;
            if income <= 0.0 {
                return None;
            }
            Some(RatioEntry {
                year: m.year.clone(),
                flat_type: m.flat_type.clone(),
                ratio: m.mean / income,
            })
        })
        .collect()
}

/// Read a CSV into keyed rows, skipping rows without the key columns.
fn read_keyed_rows<R: Read>(reader: R, source: &str) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(source, error = %e, "Skipping malformed row");
                continue;
            }
        };
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.trim().to_string()))
            .collect();
        let has_keys = ["year", "flat_type"]
            .iter()
            .all(|k| row.get(k).is_some_and(|v| !v.is_empty()));
        if has_keys {
            rows.push(row);
        } else {
            warn!(source, "Skipping row without year or flat_type");
        }
    }
    Ok(rows)
}

fn key_of(row: &RawRow) -> (String, String) {
    (
        row.get("year").unwrap_or_default().to_string(),
        row.get("flat_type").unwrap_or_default().to_string(),
    )
}

pub fn parse_price_observations<R: Read>(reader: R) -> Result<Vec<PriceObservation>> {
    Ok(read_keyed_rows(reader, "prices")?
        .iter()
        .map(|row| {
            let (year, flat_type) = key_of(row);
            PriceObservation {
                year,
                flat_type,
                resale_price: coerce_number(row.get("resale_price")),
            }
        })
        .collect())
}

pub fn parse_income_observations<R: Read>(reader: R) -> Result<Vec<IncomeObservation>> {
    Ok(read_keyed_rows(reader, "income")?
        .iter()
        .map(|row| {
            let (year, flat_type) = key_of(row);
            IncomeObservation {
                year,
                flat_type,
                average_household_income: coerce_number(row.get("average_household_income")),
            }
        })
        .collect())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::io(path, e))
}

/// Load resale transactions with `year`, `flat_type` and `resale_price` columns.
pub fn load_price_observations(path: &Path) -> Result<Vec<PriceObservation>> {
    let prices = parse_price_observations(open(path)?)?;
    info!(path = %path.display(), rows = prices.len(), "Loaded price observations");
    Ok(prices)
}

/// Load incomes with `year`, `flat_type` and `average_household_income` columns.
pub fn load_income_observations(path: &Path) -> Result<Vec<IncomeObservation>> {
    let incomes = parse_income_observations(open(path)?)?;
    info!(path = %path.display(), rows = incomes.len(), "Loaded income observations");
    Ok(incomes)
}

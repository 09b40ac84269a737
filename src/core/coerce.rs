//! Fail-soft numeric coercion for catalog fields.
//!
//! Every numeric column in the source datasets arrives as text. A value that
//! is missing, blank, non-numeric or non-finite coerces to `0.0` instead of
//! rejecting the row, so a single bad cell only zeroes its own contribution.

/// Value substituted for anything that does not parse as a finite number.
pub const COERCION_DEFAULT: f64 = 0.0;

/// Parse a numeric field, falling back to [`COERCION_DEFAULT`].
pub fn coerce_number(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(COERCION_DEFAULT)
}

/// Parse an amenity count or distance. Negative values become zero so that
/// `ln(x + 1)` stays defined.
pub fn coerce_non_negative(raw: Option<&str>) -> f64 {
    coerce_number(raw).max(0.0)
}

/// Parse a remaining-lease value in whole years, truncating toward zero.
pub fn coerce_lease_years(raw: Option<&str>) -> u32 {
    let years = coerce_number(raw);
    if years <= 0.0 {
        0
    } else if years >= u32::MAX as f64 {
        u32::MAX
    } else {
        years.trunc() as u32
    }
}

/// Whether a raw value would hit the fallback, for diagnostics.
pub fn is_malformed_number(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") => true,
        Some(s) => !s.parse::<f64>().map(f64::is_finite).unwrap_or(false),
    }
}

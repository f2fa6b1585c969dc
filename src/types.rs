use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// ISO codes attached to each country record by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryInfo {
    pub iso2: Option<String>,
    pub iso3: Option<String>,
}

/// Per-country statistics as delivered by the data provider
///
/// Daily deltas and `active` are signed: the API reports negative corrections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountryRecord {
    pub country: String,
    pub country_info: CountryInfo,
    pub cases: u64,
    pub today_cases: i64,
    pub deaths: u64,
    pub today_deaths: i64,
    pub recovered: u64,
    pub today_recovered: i64,
    pub active: i64,
    pub critical: u64,
    pub tests: u64,
    pub population: u64,
    /// Milliseconds since the epoch
    pub updated: i64,
}

impl CountryRecord {
    /// Minimal record with the three headline numbers set
    pub fn new(country: impl Into<String>, cases: u64, deaths: u64, recovered: u64) -> Self {
        Self {
            country: country.into(),
            cases,
            deaths,
            recovered,
            ..Default::default()
        }
    }
}

/// Worldwide aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalRecord {
    pub cases: u64,
    pub today_cases: i64,
    pub deaths: u64,
    pub today_deaths: i64,
    pub recovered: u64,
    pub today_recovered: i64,
    pub active: i64,
    pub critical: u64,
    pub affected_countries: u64,
    pub updated: i64,
}

/// Country record paired with its localized name for display
///
/// Built by mapping over the received collection; the records themselves
/// stay untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCountry {
    pub record: CountryRecord,
    pub display_name: String,
}

/// Result of one complete fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CovidSnapshot {
    pub countries: Vec<CountryRecord>,
    pub global: GlobalRecord,
    pub synced_at: DateTime<Utc>,
}

impl CovidSnapshot {
    /// Assemble a snapshot, taking the sync time from the global record's
    /// `updated` field when the API provides one
    pub fn new(countries: Vec<CountryRecord>, global: GlobalRecord) -> Self {
        let synced_at = Utc
            .timestamp_millis_opt(global.updated)
            .single()
            .filter(|_| global.updated > 0)
            .unwrap_or_else(Utc::now);
        Self {
            countries,
            global,
            synced_at,
        }
    }
}

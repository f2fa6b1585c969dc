/// Mock fixture data for testing and development
///
/// Deterministic data used by unit and integration tests, by the development
/// mock mode, and by the benchmarks. Country order is deliberately not
/// alphabetical, mirroring how the API sorts by case count.
use crate::types::{CountryRecord, GlobalRecord};

/// `updated` timestamp shared by all fixtures (2023-11-14T22:13:20Z)
pub const FIXTURE_UPDATED_MS: i64 = 1_700_000_000_000;

fn record(
    country: &str,
    iso2: &str,
    cases: u64,
    deaths: u64,
    recovered: u64,
) -> CountryRecord {
    let mut record = CountryRecord::new(country, cases, deaths, recovered);
    record.country_info.iso2 = Some(iso2.to_string());
    let active = cases.saturating_sub(deaths + recovered);
    record.active = active as i64;
    record.today_cases = (cases / 10_000) as i64;
    record.today_deaths = (deaths / 10_000) as i64;
    record.today_recovered = (recovered / 10_000) as i64;
    record.critical = active / 100;
    record.tests = cases * 4;
    record.updated = FIXTURE_UPDATED_MS;
    record
}

/// A small, fixed set of countries
pub fn create_mock_countries() -> Vec<CountryRecord> {
    vec![
        record("USA", "US", 111_820_082, 1_219_487, 109_814_428),
        record("India", "IN", 45_035_393, 533_570, 44_501_823),
        record("France", "FR", 40_138_560, 167_642, 39_970_918),
        record("Germany", "DE", 38_828_995, 183_027, 38_240_600),
        record("Brazil", "BR", 38_743_918, 711_380, 36_249_161),
        record("Italy", "IT", 26_826_486, 196_487, 26_584_880),
        record("Austria", "AT", 6_081_287, 22_534, 6_048_313),
        record("Hungary", "HU", 2_230_381, 49_051, 2_150_000),
        record("Slovakia", "SK", 1_869_101, 21_218, 1_846_565),
        record("Croatia", "HR", 1_317_144, 18_752, 1_296_548),
    ]
}

/// Global totals consistent with a full data set
pub fn create_mock_global() -> GlobalRecord {
    GlobalRecord {
        cases: 704_753_890,
        today_cases: 1_452,
        deaths: 7_010_681,
        today_deaths: 12,
        recovered: 675_619_811,
        today_recovered: 980,
        active: 22_123_398,
        critical: 34_794,
        affected_countries: 231,
        updated: FIXTURE_UPDATED_MS,
    }
}

/// A larger generated set for benchmarks
pub fn create_many_countries(count: usize) -> Vec<CountryRecord> {
    (0..count)
        .map(|i| {
            // Reverse-ish order so sorting has work to do
            let name = format!("Country {:04}", (count - i) * 7 % (count + 1));
            let cases = 1_000_000 - i as u64;
            record(&name, "XX", cases, cases / 50, cases / 2)
        })
        .collect()
}

//! View derivations for the country statistics panel.
//!
//! Everything here is a pure function of the data state: the TUI and the
//! one-shot commands both build their output from these.

use crate::formatting::{format_rate, percent_of};
use crate::locale::Locale;
use crate::types::{CountryRecord, DisplayCountry, GlobalRecord};

/// Pair each record with its localized name, keeping the input order
pub fn to_display(countries: &[CountryRecord], locale: Locale) -> Vec<DisplayCountry> {
    countries
        .iter()
        .map(|record| DisplayCountry {
            display_name: locale.country_name(&record.country),
            record: record.clone(),
        })
        .collect()
}

/// Display records sorted alphabetically by (English) country name
pub fn sorted_by_name(countries: &[CountryRecord], locale: Locale) -> Vec<DisplayCountry> {
    let mut sorted = to_display(countries, locale);
    sorted.sort_by(|a, b| a.record.country.cmp(&b.record.country));
    sorted
}

/// Countries offered by the own-list picker: alphabetical, home country excluded
pub fn selectable_countries(
    countries: &[CountryRecord],
    home_country: &str,
    locale: Locale,
) -> Vec<DisplayCountry> {
    sorted_by_name(countries, locale)
        .into_iter()
        .filter(|c| c.record.country != home_country)
        .collect()
}

/// Countries in the selection, in collection order
pub fn selected_countries(
    countries: &[CountryRecord],
    selection: &[String],
    locale: Locale,
) -> Vec<DisplayCountry> {
    let selected: Vec<CountryRecord> = countries
        .iter()
        .filter(|c| selection.iter().any(|s| *s == c.country))
        .cloned()
        .collect();
    to_display(&selected, locale)
}

/// Drop duplicate names, keeping first occurrences in order
pub fn normalize_selection<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Seed the selection from the configured own list, restricted to known countries
pub fn seed_selection(own_countries: &[String], countries: &[CountryRecord]) -> Vec<String> {
    normalize_selection(
        own_countries
            .iter()
            .filter(|name| countries.iter().any(|c| &c.country == *name))
            .cloned(),
    )
}

/// Toggle one name in a selection, returning the new selection
pub fn toggle_selection(selection: &[String], name: &str) -> Vec<String> {
    if selection.iter().any(|s| s == name) {
        selection.iter().filter(|s| *s != name).cloned().collect()
    } else {
        let mut next = selection.to_vec();
        next.push(name.to_string());
        next
    }
}

/// Figures shown on the global tab
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStats {
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub death_rate: f64,
    pub recovered_rate: f64,
}

impl GlobalStats {
    pub fn from_record(global: &GlobalRecord) -> Self {
        Self {
            cases: global.cases,
            deaths: global.deaths,
            recovered: global.recovered,
            death_rate: percent_of(global.deaths, global.cases),
            recovered_rate: percent_of(global.recovered, global.cases),
        }
    }

    pub fn death_rate_text(&self) -> String {
        format_rate(self.death_rate)
    }

    pub fn recovered_rate_text(&self) -> String {
        format_rate(self.recovered_rate)
    }
}

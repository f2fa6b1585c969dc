//! Derived data read by both reducers and components.

use crate::panel::{selectable_countries, selected_countries, to_display};
use crate::types::DisplayCountry;

use super::state::AppState;
use super::types::View;

/// Rows of the own list: selected countries in collection order
pub fn own_list_rows(state: &AppState) -> Vec<DisplayCountry> {
    selected_countries(
        &state.data.countries,
        &state.panel.selection,
        state.system.config.locale,
    )
}

/// Rows of the countries tab, in received order
pub fn countries_rows(state: &AppState) -> Vec<DisplayCountry> {
    to_display(&state.data.countries, state.system.config.locale)
}

/// Picker items matching the current search query
///
/// Matching is a case-insensitive substring test on the display name.
pub fn picker_items(state: &AppState) -> Vec<DisplayCountry> {
    let config = &state.system.config;
    let items = selectable_countries(&state.data.countries, &config.home_country, config.locale);
    let query = state.panel.picker.query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|c| c.display_name.to_lowercase().contains(&query))
        .collect()
}

/// Number of country rows in a list view (the refresh button is not counted)
pub fn list_len(state: &AppState, view: View) -> usize {
    match view {
        View::OwnList => state
            .data
            .countries
            .iter()
            .filter(|c| state.panel.selection.iter().any(|s| *s == c.country))
            .count(),
        View::Countries => state.data.countries.len(),
        View::Global => 0,
    }
}

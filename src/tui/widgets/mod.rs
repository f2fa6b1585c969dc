/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused pieces that render themselves directly to a
/// ratatui Buffer through `ElementWidget`. Components compose them into the
/// element tree.

#[cfg(test)]
pub mod testing;

pub mod buffer_utils;

pub mod country_item;
pub use country_item::CountryItem;

pub mod country_list;
pub use country_list::CountryList;

pub mod multi_select;
pub use multi_select::{MultiSelectDropdown, MultiSelectHeader, MultiSelectItem};

pub mod stat_box;
pub use stat_box::StatBox;

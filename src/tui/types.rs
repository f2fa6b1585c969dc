/// Core type definitions used across the TUI
///
/// The panel has three views selected from the tab bar.
use crate::locale::Locale;

/// Tab enum for the panel's views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    OwnList,
    Countries,
    Global,
}

impl View {
    pub const ALL: [View; 3] = [View::OwnList, View::Countries, View::Global];

    /// Stable key used by the tabbed panel
    pub fn key(self) -> &'static str {
        match self {
            View::OwnList => "own-list",
            View::Countries => "countries",
            View::Global => "global",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let strings = locale.strings();
        match self {
            View::OwnList => strings.tab_own_list,
            View::Countries => strings.tab_countries,
            View::Global => strings.tab_global,
        }
    }

    pub fn next(self) -> View {
        match self {
            View::OwnList => View::Countries,
            View::Countries => View::Global,
            View::Global => View::OwnList,
        }
    }

    pub fn previous(self) -> View {
        match self {
            View::OwnList => View::Global,
            View::Countries => View::OwnList,
            View::Global => View::Countries,
        }
    }
}

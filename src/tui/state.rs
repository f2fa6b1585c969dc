use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::types::{CountryRecord, GlobalRecord};

use super::types::View;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which view is shown and where the focus is
    pub navigation: NavigationState,

    /// Data received from the provider
    pub data: DataState,

    /// Panel-local state (sync flags, selection, list cursors, picker)
    pub panel: PanelState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn with_config(config: Config) -> Self {
        let mut state = Self::default();
        state.system.config = config;
        state
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_view: View,
    /// Whether focus is on content (true) or tab bar (false)
    pub content_focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    // Wrapped in Arc to avoid deep clones on every reducer call
    pub countries: Arc<Vec<CountryRecord>>,
    pub global: Arc<GlobalRecord>,
    pub last_sync: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Set by the first Mount; later mounts are ignored
    pub mounted: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Country names shown in the own list
    pub selection: Vec<String>,
    /// Whether the selection has been seeded from the configured own list
    pub selection_seeded: bool,
    pub own_list: ListState,
    pub countries_list: ListState,
    pub picker: PickerState,
}

/// Cursor and expanded rows of a country list
///
/// The cursor may sit one past the last row, on the refresh button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub cursor: usize,
    pub expanded: Vec<String>,
}

impl ListState {
    pub fn is_expanded(&self, country: &str) -> bool {
        self.expanded.iter().any(|c| c == country)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerState {
    pub open: bool,
    pub query: String,
    pub cursor: usize,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ view | ↓ enter | ↑/ESC back | r refresh | a add | s save | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}

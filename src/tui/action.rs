use crate::types::CovidSnapshot;

use super::types::View;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading, widget callbacks)
#[derive(Debug, Clone)]
pub enum Action {
    /// First render of the panel; triggers the initial fetch exactly once
    Mount,

    // Navigation actions
    NavigateView(View),
    NavigateViewLeft,
    NavigateViewRight,
    EnterContentFocus,
    ExitContentFocus,

    /// ESC: close the picker if open, otherwise leave content focus
    NavigateUp,

    // Data actions
    FetchData { force_sync: bool },
    DataLoaded {
        result: Result<CovidSnapshot, String>,
        /// Reset the selection to the configured own list once applied
        reset_selection: bool,
    },

    /// Multi-select callback: the selection becomes exactly these items
    SelectionChanged(Vec<String>),
    SaveOwnList,

    // Component-specific actions
    List(ListAction),
    Picker(PickerAction),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
}

/// Cursor movement inside the active country list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Toggle the row under the cursor, or press the refresh button
    Activate,
}

/// Interaction with the own-list multi-select picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Open,
    Close,
    Up,
    Down,
    Input(char),
    Backspace,
    /// Toggle the highlighted item
    Toggle,
}

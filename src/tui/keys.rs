/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the TUI.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, trace};

use super::action::{Action, ListAction, PickerAction};
use super::state::{AppState, ListState};
use super::types::View;

/// Handle global keys that work regardless of view or focus state
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => {
            debug!("KEY: Refresh requested");
            Some(Action::FetchData { force_sync: true })
        }
        _ => None,
    }
}

/// Handle direct view switching via number keys (1-3)
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::NavigateView(View::OwnList)),
        KeyCode::Char('2') => Some(Action::NavigateView(View::Countries)),
        KeyCode::Char('3') => Some(Action::NavigateView(View::Global)),
        _ => None,
    }
}

/// Keys only meaningful on the own list view
fn handle_own_list_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Picker(PickerAction::Open)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::SaveOwnList),
        _ => None,
    }
}

/// Handle navigation when the tab bar is focused (Left/Right/Down)
fn handle_tab_bar_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::NavigateViewLeft),
        KeyCode::Right => Some(Action::NavigateViewRight),
        KeyCode::Down => {
            debug!("KEY: Down pressed on tab bar - entering content focus");
            Some(Action::EnterContentFocus)
        }
        _ => None,
    }
}

/// The open picker captures all keys so typing can search freely
fn handle_picker_keys(key_code: KeyCode) -> Option<Action> {
    let picker_action = match key_code {
        KeyCode::Esc => return Some(Action::NavigateUp),
        KeyCode::Up => PickerAction::Up,
        KeyCode::Down | KeyCode::Tab => PickerAction::Down,
        KeyCode::Enter | KeyCode::Char(' ') => PickerAction::Toggle,
        KeyCode::Backspace => PickerAction::Backspace,
        KeyCode::Char(c) => PickerAction::Input(c),
        _ => return None,
    };
    Some(Action::Picker(picker_action))
}

/// Handle list navigation when content is focused
///
/// Up on the first row returns focus to the tab bar.
fn handle_list_keys(key_code: KeyCode, list: &ListState) -> Option<Action> {
    let list_action = match key_code {
        KeyCode::Up if list.cursor == 0 => {
            debug!("KEY: Up on first row - returning to tab bar");
            return Some(Action::ExitContentFocus);
        }
        KeyCode::Up => ListAction::Up,
        KeyCode::Down => ListAction::Down,
        KeyCode::PageUp => ListAction::PageUp,
        KeyCode::PageDown => ListAction::PageDown,
        KeyCode::Home => ListAction::Home,
        KeyCode::End => ListAction::End,
        KeyCode::Enter | KeyCode::Char(' ') => ListAction::Activate,
        _ => return None,
    };
    Some(Action::List(list_action))
}

/// Convert a KeyEvent into an Action based on current application state
///
/// - Open picker: search input, item toggling, ESC closes
/// - Global keys: q quits, r/F5 refreshes, ESC navigates up
/// - Tab bar focus: Left/Right switch views, Down enters content
/// - Content focus: list navigation, Up on the first row returns to tab bar
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let current_view = state.navigation.current_view;
    let content_focused = state.navigation.content_focused;

    trace!(
        "KEY: {:?} (view={:?}, content_focused={}, picker_open={})",
        key.code,
        current_view,
        content_focused,
        state.panel.picker.open
    );

    // 1. Open picker takes every key
    if state.panel.picker.open {
        return handle_picker_keys(key.code);
    }

    // 2. Global keys (q, r, F5)
    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    // 3. ESC walks up the focus hierarchy
    if key.code == KeyCode::Esc {
        return Some(Action::NavigateUp);
    }

    // 4. Number keys for direct view switching
    if let Some(action) = handle_number_keys(key.code) {
        return Some(action);
    }

    // 5. Own list picker and save
    if current_view == View::OwnList {
        if let Some(action) = handle_own_list_keys(key.code) {
            return Some(action);
        }
    }

    // 6. Focus level
    if !content_focused {
        let action = handle_tab_bar_navigation(key.code);
        if action.is_some() {
            debug!("KEY: Tab bar navigation: {:?}", action);
        }
        return action;
    }

    match current_view {
        View::OwnList => handle_list_keys(key.code, &state.panel.own_list),
        View::Countries => handle_list_keys(key.code, &state.panel.countries_list),
        View::Global => None,
    }
}

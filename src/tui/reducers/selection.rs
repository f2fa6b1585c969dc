use tracing::debug;

use crate::config::Config;
use crate::panel::{normalize_selection, toggle_selection};
use crate::tui::action::{Action, PickerAction};
use crate::tui::component::Effect;
use crate::tui::reducers::data_loading::clamp_cursors;
use crate::tui::selectors::picker_items;
use crate::tui::state::AppState;

/// Handle own-list selection, picker and persistence actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_selection(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectionChanged(items) => Ok(set_selection(state, items.clone())),
        Action::Picker(picker_action) => Ok(reduce_picker(state, picker_action)),
        Action::SaveOwnList => Ok(save_own_list(state)),
        _ => Err(state),
    }
}

/// The selection becomes exactly the given items
fn set_selection(state: AppState, items: Vec<String>) -> (AppState, Effect) {
    debug!("SELECTION: Changed to {:?}", items);
    let mut new_state = state;
    new_state.panel.selection = normalize_selection(items);
    new_state.panel.selection_seeded = true;
    clamp_cursors(&mut new_state);
    (new_state, Effect::None)
}

/// Picker cursor runs over the filtered items plus the OK button at the end
fn reduce_picker(state: AppState, action: &PickerAction) -> (AppState, Effect) {
    let mut new_state = state;
    let item_count = picker_items(&new_state).len();
    let picker = &mut new_state.panel.picker;

    match action {
        PickerAction::Open => {
            debug!("PICKER: Open");
            picker.open = true;
            picker.query.clear();
            picker.cursor = 0;
        }
        PickerAction::Close => {
            debug!("PICKER: Close");
            picker.open = false;
            picker.query.clear();
            picker.cursor = 0;
        }
        PickerAction::Up => {
            picker.cursor = picker.cursor.saturating_sub(1);
        }
        PickerAction::Down => {
            picker.cursor = (picker.cursor + 1).min(item_count);
        }
        PickerAction::Input(c) => {
            picker.query.push(*c);
            picker.cursor = 0;
        }
        PickerAction::Backspace => {
            picker.query.pop();
            picker.cursor = 0;
        }
        PickerAction::Toggle => return toggle_highlighted(new_state),
    }

    (new_state, Effect::None)
}

fn toggle_highlighted(state: AppState) -> (AppState, Effect) {
    let items = picker_items(&state);
    let cursor = state.panel.picker.cursor;

    match items.get(cursor) {
        Some(item) => {
            let next = toggle_selection(&state.panel.selection, &item.record.country);
            debug!("PICKER: Toggled {}", item.record.country);
            (state, Effect::Action(Action::SelectionChanged(next)))
        }
        // Cursor on OK
        None => reduce_picker(state, &PickerAction::Close),
    }
}

fn save_own_list(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.system.config.own_countries = new_state.panel.selection.clone();
    let effect = save_config_effect(new_state.system.config.clone());
    (new_state, effect)
}

fn save_config_effect(config: Config) -> Effect {
    let saved_message = config.locale.strings().own_list_saved.to_string();
    Effect::Async(Box::pin(async move {
        match crate::config::write(&config) {
            Ok(()) => {
                debug!("CONFIG: Own list saved to disk");
                Action::SetStatusMessage {
                    message: saved_message,
                    is_error: false,
                }
            }
            Err(e) => {
                debug!("CONFIG: Failed to save: {}", e);
                Action::SetStatusMessage {
                    message: format!("Failed to save config: {}", e),
                    is_error: true,
                }
            }
        }
    }))
}

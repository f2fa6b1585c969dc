use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_data_loading, reduce_list, reduce_navigation, reduce_selection};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no side effects, no I/O, no async.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Navigation actions
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Mount, fetch and fetch completion
    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Own list selection and picker
    let state = match reduce_selection(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // List cursors
    let state = match reduce_list(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        other => {
            debug!("REDUCER: Unhandled action {:?}", other);
            (state, Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::action::{ListAction, PickerAction};
    use crate::tui::testing::loaded_state;
    use crate::tui::types::View;

    #[test]
    fn test_navigation_actions_are_handled() {
        let (new_state, _) = reduce(AppState::default(), Action::NavigateView(View::Global));
        assert_eq!(new_state.navigation.current_view, View::Global);
        assert!(!new_state.navigation.content_focused);
    }

    #[test]
    fn test_tab_switch_is_idempotent() {
        let state = loaded_state();
        let (once, _) = reduce(state, Action::NavigateView(View::Countries));
        let selection = once.panel.selection.clone();
        let (twice, effect) = reduce(once, Action::NavigateView(View::Countries));

        assert_eq!(twice.navigation.current_view, View::Countries);
        assert_eq!(twice.panel.selection, selection);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_data_loading_actions_are_handled() {
        let (new_state, effect) = reduce(AppState::default(), Action::Mount);
        assert!(new_state.panel.loading);
        assert!(matches!(effect, Effect::FetchSnapshot { .. }));
    }

    #[test]
    fn test_selection_actions_are_handled() {
        let (new_state, _) = reduce(
            loaded_state(),
            Action::SelectionChanged(vec!["Germany".to_string(), "France".to_string()]),
        );
        assert_eq!(
            new_state.panel.selection,
            vec!["Germany".to_string(), "France".to_string()]
        );
    }

    #[test]
    fn test_picker_actions_are_handled() {
        let (new_state, _) = reduce(loaded_state(), Action::Picker(PickerAction::Open));
        assert!(new_state.panel.picker.open);
    }

    #[test]
    fn test_list_actions_are_handled() {
        let mut state = loaded_state();
        state.navigation.current_view = View::Countries;
        let (new_state, _) = reduce(state, Action::List(ListAction::Down));
        assert_eq!(new_state.panel.countries_list.cursor, 1);
    }

    #[test]
    fn test_set_status_message() {
        let action = Action::SetStatusMessage {
            message: "Saved".to_string(),
            is_error: false,
        };
        let (new_state, _) = reduce(AppState::default(), action);
        assert_eq!(new_state.system.status_message, Some("Saved".to_string()));
        assert!(!new_state.system.status_is_error);
    }

    #[test]
    fn test_set_status_error_message() {
        let action = Action::SetStatusMessage {
            message: "Failed".to_string(),
            is_error: true,
        };
        let (new_state, _) = reduce(AppState::default(), action);
        assert!(new_state.system.status_is_error);
    }

    #[test]
    fn test_quit_action_does_nothing_to_state() {
        let state = loaded_state();
        let (new_state, effect) = reduce(state.clone(), Action::Quit);
        assert_eq!(new_state.navigation.current_view, state.navigation.current_view);
        assert_eq!(new_state.panel.selection, state.panel.selection);
        assert!(matches!(effect, Effect::None));
    }
}

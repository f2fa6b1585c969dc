use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::types::View;

/// Handle all navigation-related actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateView(view) => Ok(navigate_to_view(state, *view)),
        Action::NavigateViewLeft => {
            let view = state.navigation.current_view.previous();
            Ok(navigate_to_view(state, view))
        }
        Action::NavigateViewRight => {
            let view = state.navigation.current_view.next();
            Ok(navigate_to_view(state, view))
        }
        Action::EnterContentFocus => Ok(enter_content_focus(state)),
        Action::ExitContentFocus => Ok(exit_content_focus(state)),
        Action::NavigateUp => Ok(navigate_up(state)),
        _ => Err(state),
    }
}

fn navigate_to_view(state: AppState, view: View) -> (AppState, Effect) {
    trace!("Navigating to view: {:?}", view);
    let mut new_state = state;
    new_state.navigation.current_view = view;
    new_state.navigation.content_focused = false; // Return focus to tab bar
    new_state.panel.picker.open = false;
    new_state.panel.picker.query.clear();
    (new_state, Effect::None)
}

fn enter_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Entering content focus (Down key from tab bar)");
    let mut new_state = state;
    if new_state.navigation.current_view != View::Global {
        new_state.navigation.content_focused = true;
    }
    (new_state, Effect::None)
}

fn exit_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Exiting content focus (Up key to tab bar)");
    let mut new_state = state;
    new_state.navigation.content_focused = false;
    (new_state, Effect::None)
}

/// Unified "navigate up" action (ESC key)
///
/// Hierarchical fallthrough:
/// 1. If the picker is open → close it
/// 2. If content_focused → set content_focused = false
/// 3. Otherwise do nothing (already at top level)
fn navigate_up(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;

    if new_state.panel.picker.open {
        debug!("NAVIGATE_UP: Closing picker");
        new_state.panel.picker.open = false;
        new_state.panel.picker.query.clear();
        return (new_state, Effect::None);
    }

    if new_state.navigation.content_focused {
        debug!("NAVIGATE_UP: Exiting content focus");
        new_state.navigation.content_focused = false;
        return (new_state, Effect::None);
    }

    debug!("NAVIGATE_UP: Already at top level, ignoring");
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_to_view() {
        let mut state = AppState::default();
        state.navigation.content_focused = true;
        let (new_state, _) = navigate_to_view(state, View::Global);

        assert_eq!(new_state.navigation.current_view, View::Global);
        assert!(!new_state.navigation.content_focused);
    }

    #[test]
    fn test_navigate_to_same_view_twice_is_idempotent() {
        let (once, _) = navigate_to_view(AppState::default(), View::Countries);
        let (twice, _) = navigate_to_view(once.clone(), View::Countries);

        assert_eq!(once.navigation.current_view, twice.navigation.current_view);
        assert_eq!(once.navigation.content_focused, twice.navigation.content_focused);
        assert_eq!(once.panel.picker, twice.panel.picker);
    }

    #[test]
    fn test_view_left_navigation_cycles() {
        let state = AppState::default();

        let (state, _) = reduce_navigation(state, &Action::NavigateViewLeft).ok().unwrap();
        assert_eq!(state.navigation.current_view, View::Global);

        let (state, _) = reduce_navigation(state, &Action::NavigateViewLeft).ok().unwrap();
        assert_eq!(state.navigation.current_view, View::Countries);
    }

    #[test]
    fn test_view_right_navigation_cycles() {
        let mut state = AppState::default();
        state.navigation.current_view = View::Global;

        let (state, _) = reduce_navigation(state, &Action::NavigateViewRight).ok().unwrap();
        assert_eq!(state.navigation.current_view, View::OwnList);
    }

    #[test]
    fn test_switching_view_closes_picker() {
        let mut state = AppState::default();
        state.panel.picker.open = true;
        state.panel.picker.query = "fr".to_string();

        let (new_state, _) = navigate_to_view(state, View::Countries);
        assert!(!new_state.panel.picker.open);
        assert!(new_state.panel.picker.query.is_empty());
    }

    #[test]
    fn test_global_view_has_no_content_focus() {
        let mut state = AppState::default();
        state.navigation.current_view = View::Global;
        let (new_state, _) = enter_content_focus(state);
        assert!(!new_state.navigation.content_focused);
    }

    #[test]
    fn test_navigate_up_closes_picker_first() {
        let mut state = AppState::default();
        state.navigation.content_focused = true;
        state.panel.picker.open = true;

        let (new_state, _) = navigate_up(state);

        assert!(!new_state.panel.picker.open);
        assert!(new_state.navigation.content_focused);
    }

    #[test]
    fn test_navigate_up_exits_content_focus() {
        let mut state = AppState::default();
        state.navigation.content_focused = true;

        let (new_state, _) = navigate_up(state);

        assert!(!new_state.navigation.content_focused);
    }

    #[test]
    fn test_unrelated_action_is_passed_back() {
        let result = reduce_navigation(AppState::default(), &Action::Quit);
        assert!(result.is_err());
    }
}

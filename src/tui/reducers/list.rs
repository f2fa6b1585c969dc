use tracing::{debug, trace};

use crate::tui::action::{Action, ListAction};
use crate::tui::component::Effect;
use crate::tui::selectors::{countries_rows, list_len, own_list_rows};
use crate::tui::state::{AppState, ListState};
use crate::tui::types::View;

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Handle cursor movement and activation inside the current country list
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_list(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::List(list_action) => Ok(handle_list_action(state, *list_action)),
        _ => Err(state),
    }
}

fn handle_list_action(state: AppState, action: ListAction) -> (AppState, Effect) {
    let view = state.navigation.current_view;
    if view == View::Global {
        trace!("LIST: {:?} ignored on the global view", action);
        return (state, Effect::None);
    }

    // Valid cursor positions are 0..=len, where len is the refresh button
    let len = list_len(&state, view);

    if action == ListAction::Activate {
        return activate(state, view, len);
    }

    let mut new_state = state;
    let list = list_state_mut(&mut new_state, view);
    list.cursor = match action {
        ListAction::Up => list.cursor.saturating_sub(1),
        ListAction::Down => (list.cursor + 1).min(len),
        ListAction::PageUp => list.cursor.saturating_sub(PAGE_SIZE),
        ListAction::PageDown => (list.cursor + PAGE_SIZE).min(len),
        ListAction::Home => 0,
        ListAction::End => len,
        ListAction::Activate => list.cursor,
    };
    trace!("LIST: {:?} cursor -> {}", view, list.cursor);
    (new_state, Effect::None)
}

fn activate(state: AppState, view: View, len: usize) -> (AppState, Effect) {
    let cursor = list_state(&state, view).cursor;

    if cursor >= len {
        debug!("LIST: Refresh button pressed");
        return (state, Effect::Action(Action::FetchData { force_sync: true }));
    }

    // First row of the own list is always open
    if view == View::OwnList && cursor == 0 {
        return (state, Effect::None);
    }

    let rows = match view {
        View::OwnList => own_list_rows(&state),
        _ => countries_rows(&state),
    };
    let Some(country) = rows.get(cursor).map(|row| row.record.country.clone()) else {
        return (state, Effect::None);
    };

    let mut new_state = state;
    let list = list_state_mut(&mut new_state, view);
    if list.is_expanded(&country) {
        debug!("LIST: Collapsing {}", country);
        list.expanded.retain(|c| *c != country);
    } else {
        debug!("LIST: Expanding {}", country);
        list.expanded.push(country);
    }
    (new_state, Effect::None)
}

fn list_state(state: &AppState, view: View) -> &ListState {
    match view {
        View::OwnList => &state.panel.own_list,
        _ => &state.panel.countries_list,
    }
}

fn list_state_mut(state: &mut AppState, view: View) -> &mut ListState {
    match view {
        View::OwnList => &mut state.panel.own_list,
        _ => &mut state.panel.countries_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::loaded_state;

    fn countries_state() -> AppState {
        let mut state = loaded_state();
        state.navigation.current_view = View::Countries;
        state.navigation.content_focused = true;
        state
    }

    fn reduce(state: AppState, action: ListAction) -> (AppState, Effect) {
        reduce_list(state, &Action::List(action)).ok().unwrap()
    }

    #[test]
    fn test_down_stops_at_refresh_button() {
        let mut state = countries_state();
        let len = state.data.countries.len();
        for _ in 0..len + 3 {
            state = reduce(state, ListAction::Down).0;
        }
        assert_eq!(state.panel.countries_list.cursor, len);
    }

    #[test]
    fn test_up_saturates_at_zero() {
        let (state, _) = reduce(countries_state(), ListAction::Up);
        assert_eq!(state.panel.countries_list.cursor, 0);
    }

    #[test]
    fn test_paging_and_home_end() {
        let state = countries_state();
        let len = state.data.countries.len();

        let (state, _) = reduce(state, ListAction::PageDown);
        assert_eq!(state.panel.countries_list.cursor, PAGE_SIZE.min(len));

        let (state, _) = reduce(state, ListAction::Home);
        assert_eq!(state.panel.countries_list.cursor, 0);

        let (state, _) = reduce(state, ListAction::End);
        assert_eq!(state.panel.countries_list.cursor, len);

        let (state, _) = reduce(state, ListAction::PageUp);
        assert_eq!(state.panel.countries_list.cursor, len.saturating_sub(PAGE_SIZE));
    }

    #[test]
    fn test_activate_on_refresh_button_forces_sync() {
        let mut state = countries_state();
        state.panel.countries_list.cursor = state.data.countries.len();

        let (_, effect) = reduce(state, ListAction::Activate);
        assert!(matches!(
            effect,
            Effect::Action(Action::FetchData { force_sync: true })
        ));
    }

    #[test]
    fn test_activate_toggles_row() {
        let mut state = countries_state();
        state.panel.countries_list.cursor = 2; // France

        let (state, _) = reduce(state, ListAction::Activate);
        assert!(state.panel.countries_list.is_expanded("France"));

        let (state, _) = reduce(state, ListAction::Activate);
        assert!(!state.panel.countries_list.is_expanded("France"));
    }

    #[test]
    fn test_first_own_list_row_cannot_be_toggled() {
        let mut state = loaded_state();
        state.navigation.content_focused = true;
        state.panel.selection = vec!["Italy".to_string(), "Hungary".to_string()];

        let (state, _) = reduce(state, ListAction::Activate);
        assert!(state.panel.own_list.expanded.is_empty());

        let (state, _) = reduce(state, ListAction::Down);
        let (state, _) = reduce(state, ListAction::Activate);
        assert!(state.panel.own_list.is_expanded("Hungary"));
    }

    #[test]
    fn test_empty_own_list_cursor_sits_on_refresh() {
        let mut state = loaded_state();
        state.panel.selection.clear();

        let (state, _) = reduce(state, ListAction::Down);
        assert_eq!(state.panel.own_list.cursor, 0);

        let (_, effect) = reduce(state, ListAction::Activate);
        assert!(matches!(
            effect,
            Effect::Action(Action::FetchData { force_sync: true })
        ));
    }

    #[test]
    fn test_global_view_ignores_list_actions() {
        let mut state = loaded_state();
        state.navigation.current_view = View::Global;
        let (state, effect) = reduce(state, ListAction::End);
        assert_eq!(state.panel.countries_list.cursor, 0);
        assert!(matches!(effect, Effect::None));
    }
}

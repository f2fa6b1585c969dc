use std::sync::Arc;
use tracing::debug;

use crate::panel::seed_selection;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::selectors::list_len;
use crate::tui::state::AppState;
use crate::tui::types::View;
use crate::types::CovidSnapshot;

/// Handle mount, fetch requests and fetch completions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Mount => Ok(handle_mount(state)),
        Action::FetchData { force_sync } => Ok(start_fetch(state, *force_sync, false)),
        Action::DataLoaded {
            result,
            reset_selection,
        } => Ok(handle_data_loaded(state, result.clone(), *reset_selection)),
        _ => Err(state),
    }
}

fn handle_mount(state: AppState) -> (AppState, Effect) {
    if state.panel.mounted {
        debug!("DATA: Already mounted, ignoring");
        return (state, Effect::None);
    }
    let mut new_state = state;
    new_state.panel.mounted = true;
    start_fetch(new_state, false, true)
}

/// Fetch started: raise the loading flag and clear the previous error
fn start_fetch(state: AppState, force_sync: bool, reset_selection: bool) -> (AppState, Effect) {
    debug!("DATA: Fetch started (force_sync={})", force_sync);
    let mut new_state = state;
    new_state.panel.loading = true;
    new_state.panel.error = None;
    (
        new_state,
        Effect::FetchSnapshot {
            force_sync,
            reset_selection,
        },
    )
}

fn handle_data_loaded(
    state: AppState,
    result: Result<CovidSnapshot, String>,
    reset_selection: bool,
) -> (AppState, Effect) {
    let mut new_state = state;

    match result {
        Ok(snapshot) => {
            debug!("DATA: Loaded {} countries", snapshot.countries.len());
            new_state.data.countries = Arc::new(snapshot.countries);
            new_state.data.global = Arc::new(snapshot.global);
            new_state.data.last_sync = Some(snapshot.synced_at);
            new_state.panel.loading = false;
            new_state.panel.error = None;
        }
        Err(e) => {
            debug!("DATA: Fetch failed: {}", e);
            new_state.panel.loading = false;
            new_state.panel.error = Some(e);
        }
    }

    if reset_selection || !new_state.panel.selection_seeded {
        new_state = seed_from_own_countries(new_state);
    }

    clamp_cursors(&mut new_state);
    (new_state, Effect::None)
}

/// Reset the selection to the configured own list
///
/// Deferred while no countries are known, so the seed is not lost.
fn seed_from_own_countries(state: AppState) -> AppState {
    let mut new_state = state;
    if new_state.data.countries.is_empty() {
        debug!("DATA: No countries yet, deferring selection seed");
        return new_state;
    }
    new_state.panel.selection = seed_selection(
        &new_state.system.config.own_countries,
        &new_state.data.countries,
    );
    new_state.panel.selection_seeded = true;
    debug!("DATA: Selection seeded: {:?}", new_state.panel.selection);
    new_state
}

/// Keep list cursors within rows + refresh button after the data changed
pub(crate) fn clamp_cursors(state: &mut AppState) {
    let own_len = list_len(state, View::OwnList);
    let countries_len = list_len(state, View::Countries);
    state.panel.own_list.cursor = state.panel.own_list.cursor.min(own_len);
    state.panel.countries_list.cursor = state.panel.countries_list.cursor.min(countries_len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_countries;
    use crate::tui::testing::{loaded_state, mock_snapshot};

    #[test]
    fn test_mount_triggers_exactly_one_fetch() {
        let (state, effect) = reduce_data_loading(AppState::default(), &Action::Mount)
            .ok()
            .unwrap();
        assert!(state.panel.mounted);
        assert!(state.panel.loading);
        assert!(matches!(
            effect,
            Effect::FetchSnapshot {
                force_sync: false,
                reset_selection: true
            }
        ));

        let (_, second) = reduce_data_loading(state, &Action::Mount).ok().unwrap();
        assert!(matches!(second, Effect::None));
    }

    #[test]
    fn test_fetch_data_sets_loading_and_clears_error() {
        let mut state = AppState::default();
        state.panel.error = Some("old".to_string());

        let (state, effect) =
            reduce_data_loading(state, &Action::FetchData { force_sync: true })
                .ok()
                .unwrap();

        assert!(state.panel.loading);
        assert!(state.panel.error.is_none());
        assert!(matches!(
            effect,
            Effect::FetchSnapshot {
                force_sync: true,
                reset_selection: false
            }
        ));
    }

    #[test]
    fn test_success_clears_loading_and_error() {
        let mut state = AppState::default();
        state.panel.loading = true;

        let action = Action::DataLoaded {
            result: Ok(mock_snapshot()),
            reset_selection: false,
        };
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();

        assert!(!state.panel.loading);
        assert!(state.panel.error.is_none());
        assert_eq!(state.data.countries.len(), create_mock_countries().len());
        assert!(state.data.last_sync.is_some());
    }

    #[test]
    fn test_failure_stores_message() {
        let mut state = loaded_state();
        state.panel.loading = true;

        let action = Action::DataLoaded {
            result: Err("Network request failed".to_string()),
            reset_selection: false,
        };
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();

        assert!(!state.panel.loading);
        assert_eq!(state.panel.error.as_deref(), Some("Network request failed"));
        // Previously loaded data stays available
        assert!(!state.data.countries.is_empty());
    }

    #[test]
    fn test_mount_completion_resets_selection_to_own_countries() {
        let mut state = loaded_state();
        state.system.config.own_countries = vec!["Austria".to_string(), "Hungary".to_string()];
        state.panel.selection = vec!["USA".to_string()];

        let action = Action::DataLoaded {
            result: Ok(mock_snapshot()),
            reset_selection: true,
        };
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();

        assert_eq!(state.panel.selection, vec!["Austria".to_string(), "Hungary".to_string()]);
    }

    #[test]
    fn test_mount_failure_still_resets_selection() {
        let mut state = loaded_state();
        state.panel.selection = vec!["USA".to_string()];

        let action = Action::DataLoaded {
            result: Err("offline".to_string()),
            reset_selection: true,
        };
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();

        assert_eq!(state.panel.selection, vec!["Hungary".to_string()]);
    }

    #[test]
    fn test_seed_is_deferred_until_countries_arrive() {
        let mut state = AppState::default();
        state.panel.mounted = true;

        let failed = Action::DataLoaded {
            result: Err("offline".to_string()),
            reset_selection: true,
        };
        let (state, _) = reduce_data_loading(state, &failed).ok().unwrap();
        assert!(!state.panel.selection_seeded);
        assert!(state.panel.selection.is_empty());

        let refreshed = Action::DataLoaded {
            result: Ok(mock_snapshot()),
            reset_selection: false,
        };
        let (state, _) = reduce_data_loading(state, &refreshed).ok().unwrap();
        assert!(state.panel.selection_seeded);
        assert_eq!(state.panel.selection, vec!["Hungary".to_string()]);
    }

    #[test]
    fn test_later_refresh_keeps_user_selection() {
        let mut state = loaded_state();
        state.panel.selection = vec!["France".to_string()];

        let action = Action::DataLoaded {
            result: Ok(mock_snapshot()),
            reset_selection: false,
        };
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();
        assert_eq!(state.panel.selection, vec!["France".to_string()]);
    }

    #[test]
    fn test_cursor_clamped_when_rows_shrink() {
        let mut state = loaded_state();
        state.panel.countries_list.cursor = 500;

        let mut snapshot = mock_snapshot();
        snapshot.countries.truncate(3);
        let action = Action::DataLoaded {
            result: Ok(snapshot),
            reset_selection: false,
        };
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();
        assert_eq!(state.panel.countries_list.cursor, 3);
    }
}

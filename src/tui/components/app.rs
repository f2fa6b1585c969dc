use chrono::Utc;

use crate::panel::GlobalStats;
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::selectors::{countries_rows, own_list_rows, picker_items};
use crate::tui::state::AppState;
use crate::tui::types::View;
use crate::tui::widgets::MultiSelectItem;

use super::{
    CountriesTab, CountriesTabProps, GlobalTab, GlobalTabProps, Header, HeaderProps, OwnListTab,
    OwnListTabProps, StatusBar, StatusBarProps, TabItem, TabbedPanel, TabbedPanelProps,
};

/// Root App component
///
/// Top-level component rendering the whole panel from the global AppState.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        tracing::trace!("APP: view for {:?}", props.navigation.current_view);
        vertical(
            [
                Constraint::Length(2), // Header (last sync + error line)
                Constraint::Min(0),    // TabbedPanel (tabs + content)
                Constraint::Length(2), // StatusBar (separator + content)
            ],
            vec![
                self.render_header(props),
                self.render_tabs(props),
                self.render_status_bar(props),
            ],
        )
    }
}

impl App {
    fn render_header(&self, state: &AppState) -> Element {
        Header.view(&HeaderProps {
            error: state.panel.error.clone(),
            last_sync: state.data.last_sync,
            locale: state.system.config.locale,
            now: Utc::now(),
        })
    }

    /// Only the active view builds its content
    fn render_tabs(&self, state: &AppState) -> Element {
        let locale = state.system.config.locale;
        let current = state.navigation.current_view;

        let tabs = View::ALL
            .iter()
            .map(|&view| {
                let content = if view == current {
                    self.render_view(state, view)
                } else {
                    Element::None
                };
                TabItem::new(view.key(), view.label(locale), content)
            })
            .collect();

        TabbedPanel.view(&TabbedPanelProps {
            active_key: current.key().to_string(),
            tabs,
            focused: !state.navigation.content_focused,
        })
    }

    fn render_view(&self, state: &AppState, view: View) -> Element {
        let locale = state.system.config.locale;
        let focused = state.navigation.content_focused;
        let loading = state.panel.loading;

        match view {
            View::OwnList => {
                let picker_items = picker_items(state)
                    .into_iter()
                    .map(|c| MultiSelectItem {
                        selected: state.panel.selection.contains(&c.record.country),
                        label: c.display_name,
                    })
                    .collect();
                OwnListTab.view(&OwnListTabProps {
                    rows: own_list_rows(state),
                    picker_items,
                    selection_count: state.panel.selection.len(),
                    list: state.panel.own_list.clone(),
                    picker: state.panel.picker.clone(),
                    focused,
                    loading,
                    locale,
                })
            }
            View::Countries => CountriesTab.view(&CountriesTabProps {
                rows: countries_rows(state),
                list: state.panel.countries_list.clone(),
                focused,
                loading,
                locale,
            }),
            View::Global => GlobalTab.view(&GlobalTabProps {
                stats: GlobalStats::from_record(&state.data.global),
                locale,
            }),
        }
    }

    fn render_status_bar(&self, state: &AppState) -> Element {
        let system = &state.system;
        StatusBar.view(&StatusBarProps {
            message: system.status_message.clone(),
            is_error: system.status_is_error,
            activity: state
                .panel
                .loading
                .then(|| system.config.locale.strings().refreshing.to_string()),
        })
    }
}

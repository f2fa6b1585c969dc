use crate::locale::Locale;
use crate::tui::component::{Component, Element};
use crate::tui::state::ListState;
use crate::tui::widgets::{CountryItem, CountryList};
use crate::types::DisplayCountry;

use super::own_list_tab::refresh_label;

/// Props for the countries tab
#[derive(Debug, Clone)]
pub struct CountriesTabProps {
    /// Every country, in received order
    pub rows: Vec<DisplayCountry>,
    pub list: ListState,
    pub focused: bool,
    pub loading: bool,
    pub locale: Locale,
}

/// Countries tab - every country as a collapsible row
pub struct CountriesTab;

impl Component for CountriesTab {
    type Props = CountriesTabProps;

    fn view(&self, props: &Self::Props) -> Element {
        let items = props
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                CountryItem::new(row, props.locale)
                    .opened(props.list.is_expanded(&row.record.country))
                    .highlighted(props.focused && i == props.list.cursor, props.focused)
            })
            .collect();

        Element::Widget(Box::new(CountryList {
            items,
            cursor: props.list.cursor,
            focused: props.focused,
            refresh_label: refresh_label(props.loading, props.locale),
            empty_label: props.locale.strings().no_countries.to_string(),
        }))
    }
}

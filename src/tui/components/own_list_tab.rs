use crate::locale::Locale;
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::{ListState, PickerState};
use crate::tui::widgets::multi_select::HEADER_HEIGHT;
use crate::tui::widgets::{CountryItem, CountryList, MultiSelectDropdown, MultiSelectHeader, MultiSelectItem};
use crate::types::DisplayCountry;

/// Props for the own list tab
#[derive(Debug, Clone)]
pub struct OwnListTabProps {
    /// Selected countries in collection order
    pub rows: Vec<DisplayCountry>,
    /// Picker items after the search filter, with their selected state
    pub picker_items: Vec<MultiSelectItem>,
    pub selection_count: usize,
    pub list: ListState,
    pub picker: PickerState,
    pub focused: bool,
    pub loading: bool,
    pub locale: Locale,
}

/// Own list tab - the country picker above the list of selected countries
///
/// The first selected country is always shown opened.
pub struct OwnListTab;

impl Component for OwnListTab {
    type Props = OwnListTabProps;

    fn view(&self, props: &Self::Props) -> Element {
        let strings = props.locale.strings();

        let mut header = MultiSelectHeader::new(props.selection_count, strings.select_text, strings.selected_text);
        header.open = props.picker.open;
        header.focused = props.focused;

        let items = props
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                CountryItem::new(row, props.locale)
                    .always_open(i == 0)
                    .opened(props.list.is_expanded(&row.record.country))
                    .highlighted(props.focused && i == props.list.cursor, props.focused)
            })
            .collect();

        let list = CountryList {
            items,
            cursor: props.list.cursor,
            focused: props.focused,
            refresh_label: refresh_label(props.loading, props.locale),
            empty_label: strings.no_countries.to_string(),
        };

        let base = vertical(
            [Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)],
            vec![Element::Widget(Box::new(header)), Element::Widget(Box::new(list))],
        );

        if !props.picker.open {
            return base;
        }

        let dropdown = MultiSelectDropdown {
            query: props.picker.query.clone(),
            placeholder: strings.search_placeholder.to_string(),
            items: props.picker_items.clone(),
            cursor: props.picker.cursor,
            not_found: strings.not_found.to_string(),
            close_label: strings.close.to_string(),
        };

        Element::Overlay {
            base: Box::new(base),
            overlay: Box::new(vertical(
                [Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)],
                vec![Element::None, Element::Widget(Box::new(dropdown))],
            )),
        }
    }
}

/// Label of the refresh button, showing progress while a fetch runs
pub fn refresh_label(loading: bool, locale: Locale) -> String {
    let strings = locale.strings();
    if loading {
        strings.refreshing.to_string()
    } else {
        strings.refresh.to_string()
    }
}

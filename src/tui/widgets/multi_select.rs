/// Multi-select picker widgets
///
/// `MultiSelectHeader` is the collapsed, always visible line showing either
/// the prompt or how many items are selected. `MultiSelectDropdown` is the
/// open panel: a search input, the matching items with their selected state,
/// a "not found" line when nothing matches, and an OK button that closes it.
/// Selected items are not repeated as tags below the picker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

use super::buffer_utils::{draw_box, draw_horizontal_line};

/// Height of the collapsed header box
pub const HEADER_HEIGHT: u16 = 3;

/// Border, search line, separator, OK line and bottom border
const DROPDOWN_CHROME: u16 = 5;

/// Collapsed picker line
#[derive(Debug, Clone)]
pub struct MultiSelectHeader {
    pub text: String,
    pub open: bool,
    pub focused: bool,
}

impl MultiSelectHeader {
    /// "Add country" while nothing is selected, "N selected" otherwise
    pub fn new(selected_count: usize, select_text: &str, selected_text: &str) -> Self {
        let text = if selected_count == 0 {
            select_text.to_string()
        } else {
            format!("{} {}", selected_count, selected_text)
        };
        Self {
            text,
            open: false,
            focused: false,
        }
    }
}

impl ElementWidget for MultiSelectHeader {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height < HEADER_HEIGHT {
            return;
        }
        let border_style = if self.open {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        let box_area = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT);
        draw_box(buf, box_area, &config.box_chars, border_style);

        let marker = if self.open {
            &config.box_chars.expanded
        } else {
            &config.box_chars.collapsed
        };
        let inner = area.width.saturating_sub(6) as usize;
        buf.set_stringn(area.x + 2, area.y + 1, &self.text, inner, Style::default());
        buf.set_string(area.x + area.width - 3, area.y + 1, marker, border_style);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(HEADER_HEIGHT)
    }
}

/// One row of the open picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectItem {
    pub label: String,
    pub selected: bool,
}

/// Open picker panel
#[derive(Debug, Clone)]
pub struct MultiSelectDropdown {
    pub query: String,
    pub placeholder: String,
    pub items: Vec<MultiSelectItem>,
    /// Over the items, then the OK button at `items.len()`
    pub cursor: usize,
    pub not_found: String,
    pub close_label: String,
}

impl MultiSelectDropdown {
    /// Lines needed to show every item without scrolling
    pub fn full_height(&self) -> u16 {
        DROPDOWN_CHROME + (self.items.len().max(1) as u16)
    }

    /// First item drawn so the cursor stays inside `visible` rows
    fn item_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.cursor < visible {
            return 0;
        }
        let cursor = self.cursor.min(self.items.len().saturating_sub(1));
        (cursor + 1).saturating_sub(visible)
    }

    fn item_style(&self, index: usize, item: &MultiSelectItem, config: &DisplayConfig) -> Style {
        let mut style = if item.selected {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        if index == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl ElementWidget for MultiSelectDropdown {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 6 || area.height < DROPDOWN_CHROME + 1 {
            return;
        }
        let chars = &config.box_chars;
        let height = self.full_height().min(area.height);
        let box_area = Rect::new(area.x, area.y, area.width, height);

        // Clear what the panel covers
        for y in box_area.top()..box_area.bottom() {
            buf.set_string(area.x, y, " ".repeat(area.width as usize), Style::default());
        }
        draw_box(buf, box_area, chars, Style::default().fg(config.selection_fg));

        let inner_x = area.x + 2;
        let inner_width = area.width.saturating_sub(4) as usize;
        let mut y = area.y + 1;

        // Search input
        if self.query.is_empty() {
            buf.set_stringn(
                inner_x,
                y,
                &self.placeholder,
                inner_width,
                Style::default().add_modifier(Modifier::DIM),
            );
        } else {
            buf.set_stringn(inner_x, y, format!("{}_", self.query), inner_width, Style::default());
        }
        y += 1;
        draw_horizontal_line(buf, area.x + 1, y, area.width - 2, chars, Style::default());
        y += 1;

        // Items
        let visible = (height - DROPDOWN_CHROME) as usize;
        if self.items.is_empty() {
            buf.set_stringn(
                inner_x,
                y,
                &self.not_found,
                inner_width,
                Style::default().add_modifier(Modifier::ITALIC),
            );
            y += 1;
        } else {
            let offset = self.item_offset(visible);
            for (index, item) in self.items.iter().enumerate().skip(offset).take(visible) {
                let mark = if item.selected { &chars.checked } else { &chars.unchecked };
                let text = format!("{} {}", mark, item.label);
                buf.set_stringn(inner_x, y, text, inner_width, self.item_style(index, item, config));
                y += 1;
            }
            y = y.max(area.y + 3 + visible as u16);
        }

        // OK button
        let ok_style = if self.cursor >= self.items.len() {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        buf.set_stringn(inner_x, y, format!("[ {} ]", self.close_label), inner_width, ok_style);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.full_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    fn dropdown(labels: &[(&str, bool)], cursor: usize) -> MultiSelectDropdown {
        MultiSelectDropdown {
            query: String::new(),
            placeholder: "Start typing a country...".to_string(),
            items: labels
                .iter()
                .map(|(label, selected)| MultiSelectItem {
                    label: label.to_string(),
                    selected: *selected,
                })
                .collect(),
            cursor,
            not_found: "No such item.".to_string(),
            close_label: "OK".to_string(),
        }
    }

    #[test]
    fn test_header_prompt_when_nothing_selected() {
        let header = MultiSelectHeader::new(0, "Add country", "selected");
        let buf = render_widget(&header, 20, 3);
        assert_buffer_line(&buf, 0, "╭──────────────────╮");
        assert_buffer_line(&buf, 1, "│ Add country    ▸ │");
        assert_buffer_line(&buf, 2, "╰──────────────────╯");
    }

    #[test]
    fn test_header_count_when_selected() {
        let mut header = MultiSelectHeader::new(3, "Add country", "selected");
        header.open = true;
        let buf = render_widget(&header, 20, 3);
        assert_buffer_line(&buf, 1, "│ 3 selected     ▾ │");
    }

    #[test]
    fn test_dropdown_lists_items_with_marks() {
        let widget = dropdown(&[("Austria", true), ("Brazil", false)], 1);
        assert_eq!(widget.full_height(), 7);

        let buf = render_widget(&widget, 24, 10);
        assert_buffer_line(&buf, 0, "╭──────────────────────╮");
        assert_buffer_line(&buf, 1, "│ Start typing a count │");
        assert_buffer_line(&buf, 2, "│──────────────────────│");
        assert_buffer_line(&buf, 3, "│ ✔ Austria            │");
        assert_buffer_line(&buf, 4, "│   Brazil             │");
        assert_buffer_line(&buf, 5, "│ [ OK ]               │");
        assert_buffer_line(&buf, 6, "╰──────────────────────╯");
        assert_buffer_line(&buf, 7, "");

        assert!(buf[(2, 4)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(2, 3)].fg, test_config().selection_fg);
    }

    #[test]
    fn test_dropdown_shows_query_and_not_found() {
        let mut widget = dropdown(&[], 0);
        widget.query = "zz".to_string();

        let buf = render_widget(&widget, 24, 8);
        assert_buffer_line(&buf, 1, "│ zz_                  │");
        assert_buffer_line(&buf, 3, "│ No such item.        │");
        assert_buffer_line(&buf, 4, "│ [ OK ]               │");
    }

    #[test]
    fn test_dropdown_scrolls_to_cursor() {
        let labels: Vec<(String, bool)> = (0..10).map(|i| (format!("Item {}", i), false)).collect();
        let refs: Vec<(&str, bool)> = labels.iter().map(|(l, s)| (l.as_str(), *s)).collect();
        let widget = dropdown(&refs, 8);

        // 8 lines: 3 visible items
        let buf = render_widget(&widget, 20, 8);
        assert_buffer_line(&buf, 3, "│   Item 6         │");
        assert_buffer_line(&buf, 5, "│   Item 8         │");
        assert_buffer_line(&buf, 6, "│ [ OK ]           │");
    }
}

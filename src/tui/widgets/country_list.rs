/// Scrollable list of country rows followed by a refresh button
///
/// The cursor runs over the rows and then the button, so a list with N rows
/// has N + 1 cursor positions. The viewport scrolls just enough to keep the
/// row under the cursor fully visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

use super::country_item::CountryItem;

#[derive(Debug, Clone)]
pub struct CountryList {
    pub items: Vec<CountryItem>,
    pub cursor: usize,
    pub focused: bool,
    pub refresh_label: String,
    /// Shown instead of rows when there are none
    pub empty_label: String,
}

impl CountryList {
    /// Heights of every cursor position, the refresh button included
    fn heights(&self) -> Vec<u16> {
        let mut heights: Vec<u16> = self.items.iter().map(|item| item.height()).collect();
        heights.push(1);
        heights
    }

    /// First entry drawn so that the cursor entry ends inside the viewport
    fn scroll_offset(&self, viewport: u16) -> usize {
        let heights = self.heights();
        let cursor = self.cursor.min(heights.len() - 1);

        let mut start = 0;
        while start < cursor {
            let needed: u16 = heights[start..=cursor].iter().sum();
            if needed <= viewport {
                break;
            }
            start += 1;
        }
        start
    }

    fn button_highlighted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    fn render_button(&self, x: u16, y: u16, width: u16, buf: &mut Buffer, config: &DisplayConfig) {
        let label = format!("[ {} ]", self.refresh_label);
        let style = match (self.button_highlighted(), self.focused) {
            (true, true) => Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(config.unfocused_selection_fg()),
            _ => Style::default(),
        };
        let prefix = if self.button_highlighted() {
            format!("{} ", config.box_chars.selector)
        } else {
            "  ".to_string()
        };
        buf.set_stringn(x, y, format!("{}{}", prefix, label), width as usize, style);
    }
}

impl ElementWidget for CountryList {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bottom = area.y + area.height;
        let mut y = area.y;

        if self.items.is_empty() {
            buf.set_stringn(
                area.x + 2,
                y,
                &self.empty_label,
                area.width.saturating_sub(2) as usize,
                Style::default().add_modifier(Modifier::DIM),
            );
            y += 1;
        } else {
            let start = self.scroll_offset(area.height);
            for item in self.items.iter().skip(start) {
                if y >= bottom {
                    return;
                }
                let height = item.height().min(bottom - y);
                item.render(Rect::new(area.x, y, area.width, height), buf, config);
                y += item.height();
            }
        }

        if y < bottom {
            self.render_button(area.x, y, area.width, buf, config);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

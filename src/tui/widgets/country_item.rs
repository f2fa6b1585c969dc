/// CountryItem widget - one collapsible row of a country list
///
/// Collapsed, the row shows the display name and the case count. Opened, it
/// adds today's changes and the remaining counters below. Rows marked
/// `always_open` render opened and show no collapse marker change.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::{format_delta, number_with_commas};
use crate::locale::Locale;
use crate::tui::component::ElementWidget;
use crate::types::{CountryRecord, DisplayCountry};

/// Detail lines shown below an opened row
pub const DETAIL_LINES: u16 = 6;

const DETAIL_INDENT: u16 = 4;

#[derive(Debug, Clone)]
pub struct CountryItem {
    pub display_name: String,
    pub record: CountryRecord,
    pub always_open: bool,
    pub opened: bool,
    /// Row is under the list cursor
    pub highlighted: bool,
    /// List has keyboard focus (affects highlight color)
    pub focused: bool,
    pub locale: Locale,
}

impl CountryItem {
    pub fn new(country: &DisplayCountry, locale: Locale) -> Self {
        Self {
            display_name: country.display_name.clone(),
            record: country.record.clone(),
            always_open: false,
            opened: false,
            highlighted: false,
            focused: false,
            locale,
        }
    }

    pub fn always_open(mut self, always_open: bool) -> Self {
        self.always_open = always_open;
        self
    }

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub fn highlighted(mut self, highlighted: bool, focused: bool) -> Self {
        self.highlighted = highlighted;
        self.focused = focused;
        self
    }

    pub fn is_open(&self) -> bool {
        self.always_open || self.opened
    }

    /// Rendered height in lines
    pub fn height(&self) -> u16 {
        if self.is_open() {
            1 + DETAIL_LINES
        } else {
            1
        }
    }

    fn detail_lines(&self) -> Vec<String> {
        let s = self.locale.strings();
        let r = &self.record;
        let with_today = |label: &str, total: u64, today: i64| {
            format!(
                "{} {} ({}: {})",
                label,
                number_with_commas(total),
                s.today,
                format_delta(today)
            )
        };
        vec![
            with_today(s.cases, r.cases, r.today_cases),
            with_today(s.deaths, r.deaths, r.today_deaths),
            with_today(s.recovered, r.recovered, r.today_recovered),
            format!("{} {}", s.active, number_with_commas(r.active)),
            format!("{} {}", s.critical, number_with_commas(r.critical)),
            format!("{} {}", s.tests, number_with_commas(r.tests)),
        ]
    }

    fn row_style(&self, config: &DisplayConfig) -> Style {
        match (self.highlighted, self.focused) {
            (true, true) => Style::default().fg(config.selection_fg),
            (true, false) => Style::default().fg(config.unfocused_selection_fg()),
            _ => Style::default(),
        }
    }
}

impl ElementWidget for CountryItem {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chars = &config.box_chars;
        let style = self.row_style(config);

        let selector = if self.highlighted {
            format!("{} ", chars.selector)
        } else {
            "  ".to_string()
        };
        let marker = if self.is_open() {
            &chars.expanded
        } else {
            &chars.collapsed
        };
        let left = format!("{}{} {}", selector, marker, self.display_name);
        let cases = number_with_commas(self.record.cases);

        buf.set_stringn(area.x, area.y, &left, area.width as usize, style);
        let right_x = area.width.saturating_sub(cases.width() as u16);
        if right_x as usize > left.width() {
            buf.set_string(area.x + right_x, area.y, &cases, style);
        }

        if !self.is_open() {
            return;
        }

        let detail_width = area.width.saturating_sub(DETAIL_INDENT) as usize;
        for (i, line) in self.detail_lines().iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            buf.set_stringn(area.x + DETAIL_INDENT, y, line, detail_width, Style::default());
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.height())
    }
}

/// StatBox widget - one headline figure of the global view
///
/// ```text
/// ╭─Elhunytak száma:─────╮
/// │ 7,010,681            │
/// │ 0.99%                │
/// ╰──────────────────────╯
/// ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

use super::buffer_utils::draw_titled_box;

pub const STAT_BOX_HEIGHT: u16 = 4;

#[derive(Debug, Clone)]
pub struct StatBox {
    pub title: String,
    pub value: String,
    /// Percentage of all cases, already formatted
    pub rate: Option<String>,
    pub color: Color,
}

impl ElementWidget for StatBox {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height < STAT_BOX_HEIGHT {
            return;
        }
        let box_area = Rect::new(area.x, area.y, area.width, STAT_BOX_HEIGHT);
        let border_style = Style::default().fg(self.color);
        draw_titled_box(buf, box_area, &self.title, &config.box_chars, border_style);

        let inner_width = area.width.saturating_sub(4) as usize;
        buf.set_stringn(
            area.x + 2,
            area.y + 1,
            &self.value,
            inner_width,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if let Some(rate) = &self.rate {
            buf.set_stringn(
                area.x + 2,
                area.y + 2,
                format!("{}%", rate),
                inner_width,
                Style::default().fg(self.color),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(STAT_BOX_HEIGHT)
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::state::DEFAULT_STATUS_MESSAGE;
use crate::tui::widgets::buffer_utils::draw_horizontal_line;

/// Props for the status bar
#[derive(Debug, Clone)]
pub struct StatusBarProps {
    pub message: Option<String>,
    pub is_error: bool,
    /// Shown on the right while a fetch is running
    pub activity: Option<String>,
}

/// StatusBar component - key help or the last status message, fetch activity on the right
pub struct StatusBar;

impl Component for StatusBar {
    type Props = StatusBarProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(StatusBarWidget {
            message: props
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string()),
            is_error: props.is_error,
            activity: props.activity.clone(),
        }))
    }
}

#[derive(Debug, Clone)]
struct StatusBarWidget {
    message: String,
    is_error: bool,
    activity: Option<String>,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // First line: separator
        draw_horizontal_line(buf, area.x, area.y, area.width, &config.box_chars, Style::default());

        // Second line: message on the left, activity on the right
        let y = area.y + 1;
        let right = self.activity.as_deref().map(|a| format!(" {} ", a));
        let right_width = right.as_ref().map(|r| r.width() as u16).unwrap_or(0);
        let left_width = area.width.saturating_sub(right_width + 1) as usize;

        let message_style = if self.is_error {
            Style::default().fg(config.error_fg)
        } else {
            Style::default().fg(Color::Gray)
        };
        buf.set_stringn(area.x + 1, y, &self.message, left_width, message_style);

        if let Some(right) = right {
            let x = area.x + area.width.saturating_sub(right_width);
            buf.set_string(x, y, &right, Style::default().fg(config.selection_fg));
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}

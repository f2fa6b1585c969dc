use chrono::{DateTime, Utc};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::formatting::format_last_sync;
use crate::locale::Locale;
use crate::tui::component::{Component, Element, ElementWidget};

/// Props for the always-visible header
#[derive(Debug, Clone)]
pub struct HeaderProps {
    pub error: Option<String>,
    pub last_sync: Option<DateTime<Utc>>,
    pub locale: Locale,
    /// Reference time for the relative "last updated" text
    pub now: DateTime<Utc>,
}

/// Header component - last sync time and the fetch error banner
pub struct Header;

impl Component for Header {
    type Props = HeaderProps;

    fn view(&self, props: &Self::Props) -> Element {
        let strings = props.locale.strings();
        Element::Widget(Box::new(HeaderWidget {
            updated_text: format!(
                "{} {}",
                strings.last_updated,
                format_last_sync(props.last_sync, props.now, props.locale)
            ),
            error: props.error.clone(),
        }))
    }
}

#[derive(Debug, Clone)]
struct HeaderWidget {
    updated_text: String,
    error: Option<String>,
}

impl ElementWidget for HeaderWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        buf.set_stringn(area.x, area.y, &self.updated_text, width, Style::default());

        if let Some(error) = &self.error {
            if area.height > 1 {
                buf.set_stringn(
                    area.x,
                    area.y + 1,
                    error,
                    width,
                    Style::default().fg(config.error_fg),
                );
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::{vertical, Component, Constraint, Element, ElementWidget};

const ACTIVE_TAB_MODIFIER: Modifier = Modifier::REVERSED.union(Modifier::BOLD);

/// A single tab item containing its label and content
#[derive(Clone)]
pub struct TabItem {
    /// Unique key identifying this tab
    pub key: String,
    /// Display title for the tab
    pub title: String,
    /// Content to show when this tab is active
    pub content: Element,
}

impl TabItem {
    /// Create a new tab item
    pub fn new(key: impl Into<String>, title: impl Into<String>, content: Element) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content,
        }
    }
}

/// Props for TabbedPanel component
#[derive(Clone)]
pub struct TabbedPanelProps {
    /// Currently active tab key
    pub active_key: String,
    /// List of tabs with their content
    pub tabs: Vec<TabItem>,
    /// Whether the tab bar is focused (affects styling)
    pub focused: bool,
}

/// TabbedPanel component - renders a tab bar with the active tab's content
pub struct TabbedPanel;

impl Component for TabbedPanel {
    type Props = TabbedPanelProps;

    fn view(&self, props: &Self::Props) -> Element {
        let active_content = props
            .tabs
            .iter()
            .find(|tab| tab.key == props.active_key)
            .map(|tab| tab.content.clone())
            .unwrap_or(Element::None);

        let labels: Vec<TabLabel> = props
            .tabs
            .iter()
            .map(|tab| TabLabel {
                title: tab.title.clone(),
                active: tab.key == props.active_key,
            })
            .collect();

        vertical(
            [
                Constraint::Length(2), // Tab bar (2 lines: labels + separator)
                Constraint::Min(0),    // Content area
            ],
            vec![
                Element::Widget(Box::new(TabBarWidget {
                    labels,
                    focused: props.focused,
                })),
                active_content,
            ],
        )
    }
}

/// Label for a single tab in the tab bar
#[derive(Clone)]
struct TabLabel {
    title: String,
    active: bool,
}

/// Widget that renders the tab bar (labels + separator line)
#[derive(Clone)]
struct TabBarWidget {
    labels: Vec<TabLabel>,
    focused: bool,
}

impl TabBarWidget {
    fn box_char_style(&self) -> Style {
        if self.focused {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// Build segments for the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let box_style = self.box_char_style();
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), box_style));
            }

            let style = match (label.active, self.focused) {
                (true, true) => Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(ACTIVE_TAB_MODIFIER),
                (true, false) => Style::default()
                    .fg(config.unfocused_selection_fg())
                    .add_modifier(ACTIVE_TAB_MODIFIER),
                _ => Style::default(),
            };

            segments.push((label.title.clone(), style));
        }

        segments
    }

    /// Build the separator line with connectors under tab gaps
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> Vec<(String, Style)> {
        let horizontal = &config.box_chars.horizontal;
        let connector = &config.box_chars.connector;
        let box_style = self.box_char_style();

        let mut segments = Vec::new();
        let mut pos = 0;

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                segments.push((horizontal.clone(), box_style));
                segments.push((connector.clone(), box_style));
                segments.push((horizontal.clone(), box_style));
                pos += 3; // " │ "
            }
            let tab_width = label.title.width();
            segments.push((horizontal.repeat(tab_width), box_style));
            pos += tab_width;
        }

        if pos < area_width {
            segments.push((horizontal.repeat(area_width - pos), box_style));
        }

        segments
    }
}

impl ElementWidget for TabBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.labels.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }

        let tab_segments = self.build_tab_line(config);
        let separator_segments = self.build_separator_line(area.width as usize, config);

        for (row, segments) in [(area.y, tab_segments), (area.y + 1, separator_segments)] {
            let mut x = area.x;
            for (text, style) in segments {
                if x >= area.x + area.width {
                    break;
                }
                let remaining = (area.x + area.width - x) as usize;
                buf.set_stringn(x, row, &text, remaining, style);
                x += text.width() as u16; // Display width, not byte length
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Tab line + separator line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, RENDER_WIDTH};
    use crate::tui::widgets::testing::{render_widget, render_widget_with_config, test_config_ascii};

    fn tab_bar(active: usize, focused: bool) -> TabBarWidget {
        TabBarWidget {
            labels: ["Saját lista", "Országok", "Összesített"]
                .iter()
                .enumerate()
                .map(|(i, title)| TabLabel {
                    title: title.to_string(),
                    active: i == active,
                })
                .collect(),
            focused,
        }
    }

    #[test]
    fn test_tabbed_panel_renders_container() {
        let props = TabbedPanelProps {
            active_key: "tab1".into(),
            tabs: vec![
                TabItem::new("tab1", "Tab 1", Element::None),
                TabItem::new("tab2", "Tab 2", Element::None),
            ],
            focused: true,
        };

        match TabbedPanel.view(&props) {
            Element::Container { children, .. } => assert_eq!(children.len(), 2),
            _ => panic!("Expected container element"),
        }
    }

    #[test]
    fn test_nonexistent_active_key_shows_none() {
        let props = TabbedPanelProps {
            active_key: "nonexistent".into(),
            tabs: vec![TabItem::new("tab1", "Tab 1", Element::None)],
            focused: true,
        };

        match TabbedPanel.view(&props) {
            Element::Container { children, .. } => {
                assert!(matches!(children[1], Element::None));
            }
            _ => panic!("Expected container element"),
        }
    }

    #[test]
    fn test_tab_item_builder() {
        let tab = TabItem::new("key", "Title", Element::None);
        assert_eq!(tab.key, "key");
        assert_eq!(tab.title, "Title");
    }

    #[test]
    fn test_tab_bar_unicode() {
        let buf = render_widget(&tab_bar(0, true), RENDER_WIDTH, 2);
        assert_buffer(
            &buf,
            &[
                "Saját lista │ Országok │ Összesített",
                "────────────┴──────────┴────────────────────────────────────────────────────────",
            ],
        );
    }

    #[test]
    fn test_tab_bar_ascii() {
        let buf = render_widget_with_config(&tab_bar(1, true), 40, 2, &test_config_ascii());
        assert_buffer(
            &buf,
            &[
                "Saját lista | Országok | Összesített",
                "----------------------------------------",
            ],
        );
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let buf = render_widget(&tab_bar(1, true), 40, 2);
        // "Országok" starts after "Saját lista │ "
        assert!(buf[(14, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(0, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_unfocused_tab_bar_dims_separators() {
        let buf = render_widget(&tab_bar(0, false), 40, 2);
        assert_eq!(buf[(0, 1)].fg, Color::DarkGray);
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui. The whole tree is drawn
/// every frame; ratatui's own buffer diff keeps terminal writes small.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&mut self, element: Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        self.render_element(&element, area, buf, config);
    }

    fn render_element(&self, element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, config),

            Element::Container { children, layout } => {
                let chunks = self.calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render_element(child, *chunk, buf, config);
                }
            }

            Element::Overlay { base, overlay } => {
                self.render_element(base, area, buf, config);
                self.render_element(overlay, area, buf, config);
            }

            Element::None => {}
        }
    }

    /// Calculate layout constraints and split the area
    fn calculate_layout(&self, layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };

        let ratatui_constraints = constraints
            .iter()
            .map(|c| self.convert_constraint(*c))
            .collect::<Vec<_>>();

        RatatuiLayout::default()
            .direction(direction)
            .constraints(ratatui_constraints)
            .split(area)
            .to_vec()
    }

    /// Convert our Constraint type to ratatui's Constraint
    fn convert_constraint(&self, constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
            Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
        }
    }
}

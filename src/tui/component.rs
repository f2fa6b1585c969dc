use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use crate::config::DisplayConfig;

/// Core component trait - like React.Component
///
/// Components receive a slice of the application state as props and render
/// to an Element tree. State changes never happen inside a component; they
/// go through actions and the reducer.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (for the picker dropdown)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

/// Layout for container elements
#[derive(Clone, Debug)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Percentage(u16),
}

/// Side effects produced by the reducer
pub enum Effect {
    None,
    /// Dispatch another action (widget callbacks)
    Action(Action),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Load a snapshot through the data effects handler
    FetchSnapshot { force_sync: bool, reset_selection: bool },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchSnapshot {
                force_sync,
                reset_selection,
            } => f
                .debug_struct("FetchSnapshot")
                .field("force_sync", force_sync)
                .field("reset_selection", reset_selection)
                .finish(),
        }
    }
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}

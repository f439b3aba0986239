//! Component system for the Herbarium TUI.
//!
//! Components are self-contained UI elements that handle their own input and
//! rendering. They may edit the form draft and move the row selection, but
//! they never add or remove records: those requests go out as [`Effect`]s,
//! which the runtime turns into messages for
//! [`App::update`](crate::app::App::update).

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::{App, Effect};

/// A UI element with its own input handling and rendering.
///
/// # Lifecycle
///
/// 1. Key and mouse events are routed to the focused (or hit) component.
/// 2. The component updates local UI state and returns effects.
/// 3. `render` draws it into the rectangle assigned by the main view.
pub(crate) trait Component {
    /// Handle key events while this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that landed inside this component's last area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should only draw and remember hit areas; state changes
    /// belong in the event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the status bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}

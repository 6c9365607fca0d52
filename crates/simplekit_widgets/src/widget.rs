//! Base widget trait

use simplekit_core::{PointerEvent, WidgetId};
use simplekit_paint::PaintContext;

use crate::element::Element;

/// Base trait for all widgets
pub trait Widget {
    /// The widget's box model
    fn element(&self) -> &Element;

    /// Get the widget's unique ID
    fn id(&self) -> WidgetId {
        self.element().id()
    }

    /// Record the widget's appearance into `ctx`
    fn draw(&self, ctx: &mut PaintContext);

    /// Handle a pointer event. Returns `true` if the event was consumed.
    fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool;
}

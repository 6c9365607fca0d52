//! Pointer and action events
//!
//! Pointer events are delivered to widgets one at a time by the host dispatch
//! loop. Widgets answer with a "consumed" flag and may emit higher-level
//! action events to a registered listener.

use crate::focus::WidgetId;

/// Kind of pointer event produced by the dispatch loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer button pressed
    Down,
    /// Pointer button released
    Up,
    Move,
    /// Pointer entered an element's bounds
    Enter,
    /// Pointer left an element's bounds
    Exit,
    /// Press and release without movement
    Click,
    DoubleClick,
    /// Pointer moved while a button is held
    Drag,
    Wheel,
}

/// A pointer event with its position and time of delivery
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
    /// Milliseconds since the dispatch loop started
    pub timestamp: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32, timestamp: u64) -> Self {
        Self {
            kind,
            x,
            y,
            timestamp,
        }
    }

    /// Event of the given kind at the origin
    pub fn at(kind: PointerEventKind, timestamp: u64) -> Self {
        Self::new(kind, 0.0, 0.0, timestamp)
    }

    pub fn down(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerEventKind::Down, x, y, timestamp)
    }

    pub fn up(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerEventKind::Up, x, y, timestamp)
    }

    pub fn enter(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerEventKind::Enter, x, y, timestamp)
    }

    pub fn exit(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerEventKind::Exit, x, y, timestamp)
    }
}

/// Semantic action kinds emitted by widgets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// The widget was triggered (e.g. a button was clicked)
    Activate,
}

/// A semantic event emitted by a widget in response to pointer input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    pub kind: ActionKind,
    pub source: WidgetId,
    pub timestamp: u64,
}

impl ActionEvent {
    pub fn activate(source: WidgetId, timestamp: u64) -> Self {
        Self {
            kind: ActionKind::Activate,
            source,
            timestamp,
        }
    }
}

/// Listener for action events. Returns `true` if it consumed the event.
pub type ActionListener = Box<dyn FnMut(&ActionEvent) -> bool + Send>;

//! Box-model element
//!
//! [`Element`] holds the geometry every widget shares:
//!
//! ```text
//! (x, y) ┌──────────── margin box ─────────────┐
//!        │  ┌────────── padding box ────────┐  │
//!        │  │  ┌──── content box ───────┐   │  │
//!        │  │  │                        │   │  │
//!        │  │  └────────────────────────┘   │  │
//!        │  └───────────────────────────────┘  │
//!        └─────────────────────────────────────┘
//! ```
//!
//! `width` and `height` are the padding-box size (content plus padding on
//! both sides); `x` and `y` locate the margin box.

use simplekit_core::WidgetId;
use simplekit_paint::{Color, PaintContext, Point, Rect};

use crate::style::Style;

const DEBUG_MARGIN_COLOUR: Color = Color::new(1.0, 0.65, 0.0, 0.6);
const DEBUG_PADDING_COLOUR: Color = Color::new(0.0, 0.5, 0.0, 0.6);
const DEBUG_CONTENT_COLOUR: Color = Color::new(0.0, 0.0, 1.0, 0.6);

/// Geometry and base appearance of a widget
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    id: WidgetId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    /// Caller-supplied sizes that minimal sizing must not override
    explicit_width: Option<f32>,
    explicit_height: Option<f32>,
    margin: f32,
    padding: f32,
    fill: Color,
    border: Color,
    debug: bool,
}

impl Element {
    pub fn new(style: &Style) -> Self {
        Self {
            id: WidgetId::next(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            explicit_width: None,
            explicit_height: None,
            margin: 0.0,
            padding: 0.0,
            fill: Color::TRANSPARENT,
            border: style.border,
            debug: style.debug,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn border(&self) -> Color {
        self.border
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn explicit_width(&self) -> Option<f32> {
        self.explicit_width
    }

    pub fn explicit_height(&self) -> Option<f32> {
        self.explicit_height
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin.max(0.0);
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding.max(0.0);
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    pub fn set_border(&mut self, border: Color) {
        self.border = border;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Pin the width (`Some`) or hand it back to minimal sizing (`None`).
    /// A pinned width takes effect immediately.
    pub fn set_explicit_width(&mut self, width: Option<f32>) {
        self.explicit_width = width;
        if let Some(width) = width {
            self.width = width;
        }
    }

    /// Pin the height (`Some`) or hand it back to minimal sizing (`None`).
    /// A pinned height takes effect immediately.
    pub fn set_explicit_height(&mut self, height: Option<f32>) {
        self.explicit_height = height;
        if let Some(height) = height {
            self.height = height;
        }
    }

    /// Store the smallest size the element can be laid out at
    pub fn set_minimal_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Place the margin box's top-left corner
    pub fn layout(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn margin_box(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width + self.margin * 2.0,
            self.height + self.margin * 2.0,
        )
    }

    pub fn padding_box(&self) -> Rect {
        Rect::new(
            self.x + self.margin,
            self.y + self.margin,
            self.width,
            self.height,
        )
    }

    pub fn content_box(&self) -> Rect {
        self.padding_box().inset(self.padding)
    }

    /// Whether `point` (in parent coordinates) falls inside the padding box
    pub fn hit_test(&self, point: Point) -> bool {
        self.padding_box().contains(point)
    }

    /// Draw box-model outlines when debug drawing is on.
    ///
    /// Widgets call this after their own drawing so the outlines sit on top
    /// and outside any clip the widget set up.
    pub fn draw(&self, ctx: &mut PaintContext) {
        if !self.debug {
            return;
        }
        ctx.stroke_rect(self.margin_box(), DEBUG_MARGIN_COLOUR, 1.0);
        ctx.stroke_rect(self.padding_box(), DEBUG_PADDING_COLOUR, 1.0);
        ctx.stroke_rect(self.content_box(), DEBUG_CONTENT_COLOUR, 1.0);
    }
}

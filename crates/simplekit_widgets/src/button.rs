//! Button widget with FSM-driven interactions
//!
//! The Button widget provides:
//! - Interaction states: idle, hover, down
//! - Minimal sizing from the measured label, with a minimum hit-target width
//! - An activate event emitted on pointer release
//! - Canvas drawing of outline, background and a clipped, centred label
//!
//! # Example
//!
//! ```rust
//! use simplekit_core::PointerEvent;
//! use simplekit_paint::PaintContext;
//! use simplekit_widgets::{button, ButtonEnv, ButtonState};
//!
//! let env = ButtonEnv::default();
//! let mut ok = button("OK").on_activate(|_| true).build(&env);
//! assert!(ok.width() >= 80.0);
//!
//! ok.handle_pointer_event(&PointerEvent::down(10.0, 10.0, 0));
//! assert_eq!(ok.state(), ButtonState::Down);
//! assert!(ok.handle_pointer_event(&PointerEvent::up(10.0, 10.0, 5)));
//!
//! let mut ctx = PaintContext::new();
//! ok.draw(&mut ctx);
//! ```

use std::fmt;
use std::sync::Arc;

use simplekit_core::events::{ActionEvent, ActionListener, PointerEvent, PointerEventKind};
use simplekit_core::focus::{FocusArbiter, PointerFocus, SharedFocus, WidgetId};
use simplekit_core::fsm::StateMachine;
use simplekit_paint::{Color, PaintContext, Rect, TextAlign, TextBaseline, TextStyle};

use crate::element::Element;
use crate::style::Style;
use crate::text::{EstimatingMeasurer, SharedMeasurer, TextMeasurer};
use crate::widget::Widget;

/// Line width of the outline drawn while hovered or pressed
const HIGHLIGHT_LINE_WIDTH: f32 = 8.0;
const BORDER_LINE_WIDTH: f32 = 2.0;
const PRESSED_BORDER_LINE_WIDTH: f32 = 4.0;

/// Button interaction states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonState {
    #[default]
    Idle,
    Hover,
    Down,
}

/// Collaborators a button is wired to at construction
#[derive(Clone)]
pub struct ButtonEnv {
    pub style: Arc<Style>,
    pub measurer: SharedMeasurer,
    pub focus: SharedFocus,
}

impl ButtonEnv {
    pub fn new(style: Style, measurer: SharedMeasurer, focus: SharedFocus) -> Self {
        Self {
            style: Arc::new(style),
            measurer,
            focus,
        }
    }
}

impl Default for ButtonEnv {
    /// Default style, estimated text metrics and a private focus arbiter
    fn default() -> Self {
        Self::new(
            Style::default(),
            EstimatingMeasurer::shared(),
            PointerFocus::shared(),
        )
    }
}

/// Button widget
pub struct Button {
    element: Element,
    fsm: StateMachine<ButtonState, PointerEventKind>,
    text: String,
    font: String,
    font_colour: Color,
    highlight_colour: Color,
    radius: f32,
    text_baseline: TextBaseline,
    /// Floor applied to the width when none is given explicitly
    min_width: f32,
    measurer: SharedMeasurer,
    focus: SharedFocus,
    on_activate: Option<ActionListener>,
}

impl Button {
    /// Create a button with the default fill
    pub fn new(env: &ButtonEnv, label: impl Into<String>) -> Self {
        button(label).build(env)
    }

    /// Create the button FSM
    ///
    /// Every transition fires from any state, so a press always lands in
    /// `Down` even if the host pipeline dropped an enter or exit.
    fn create_fsm() -> StateMachine<ButtonState, PointerEventKind> {
        StateMachine::builder(ButtonState::Idle)
            .on_any(PointerEventKind::Down, ButtonState::Down)
            .on_any(PointerEventKind::Up, ButtonState::Hover)
            .on_any(PointerEventKind::Enter, ButtonState::Hover)
            .on_any(PointerEventKind::Exit, ButtonState::Idle)
            .build()
    }

    /// Get the widget ID
    pub fn id(&self) -> WidgetId {
        self.element.id()
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn state(&self) -> ButtonState {
        self.fsm.current_state()
    }

    pub fn width(&self) -> f32 {
        self.element.width()
    }

    pub fn height(&self) -> f32 {
        self.element.height()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Change the label and recompute the minimal size
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update_minimal_size();
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    /// Change the label font and recompute the minimal size
    pub fn set_font(&mut self, font: impl Into<String>) {
        self.font = font.into();
        self.update_minimal_size();
    }

    /// Pin the width, or pass `None` to size from the label again
    pub fn set_width(&mut self, width: Option<f32>) {
        self.element.set_explicit_width(width);
        self.update_minimal_size();
    }

    /// Pin the height, or pass `None` to size from the label again
    pub fn set_height(&mut self, height: Option<f32>) {
        self.element.set_explicit_height(height);
        self.update_minimal_size();
    }

    pub fn font_colour(&self) -> Color {
        self.font_colour
    }

    pub fn set_font_colour(&mut self, colour: Color) {
        self.font_colour = colour;
    }

    pub fn highlight_colour(&self) -> Color {
        self.highlight_colour
    }

    pub fn set_highlight_colour(&mut self, colour: Color) {
        self.highlight_colour = colour;
    }

    pub fn fill(&self) -> Color {
        self.element.fill()
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.element.set_fill(fill);
    }

    pub fn border(&self) -> Color {
        self.element.border()
    }

    pub fn set_border(&mut self, border: Color) {
        self.element.set_border(border);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn text_baseline(&self) -> TextBaseline {
        self.text_baseline
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.text_baseline = baseline;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.element.set_debug(debug);
    }

    /// Place the button's margin box at `(x, y)`
    pub fn layout(&mut self, x: f32, y: f32) {
        self.element.layout(x, y);
    }

    /// Register the activate listener, replacing any previous one
    pub fn on_activate<F>(&mut self, listener: F)
    where
        F: FnMut(&ActionEvent) -> bool + Send + 'static,
    {
        self.on_activate = Some(Box::new(listener));
    }

    pub fn clear_activate_listener(&mut self) {
        self.on_activate = None;
    }

    /// Recompute the minimal size from the label's measured extent.
    ///
    /// Explicit width and height win over the measurement; without an explicit
    /// width the result is floored at the style's minimum button width. If the
    /// label can't be measured the current geometry is kept.
    pub fn update_minimal_size(&mut self) {
        let metrics = match self.measurer.measure(&self.text, &self.font) {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!("text measurement failed for {}: {}", self, err);
                return;
            }
        };

        let padding = self.element.padding();
        let height = self
            .element
            .explicit_height()
            .unwrap_or(metrics.height + padding * 2.0);
        let width = match self.element.explicit_width() {
            Some(width) => width,
            None => (metrics.width + padding * 2.0).max(self.min_width),
        };

        self.element.set_minimal_size(width, height);
    }

    /// Handle a pointer event. Returns `true` if the event was consumed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.transition(event.kind);
                self.focus.request_focus(self.id());
                true
            }
            PointerEventKind::Up => {
                // Bounds are not re-checked: releasing after dragging off the
                // button still activates it.
                self.transition(event.kind);
                self.send_activate(event.timestamp)
            }
            PointerEventKind::Enter | PointerEventKind::Exit => {
                self.transition(event.kind);
                true
            }
            PointerEventKind::Move
            | PointerEventKind::Click
            | PointerEventKind::DoubleClick
            | PointerEventKind::Drag
            | PointerEventKind::Wheel => false,
        }
    }

    fn transition(&mut self, kind: PointerEventKind) {
        let from = self.fsm.current_state();
        let to = self.fsm.send(kind);
        if from != to {
            tracing::debug!("{} {:?} -> {:?} on {:?}", self, from, to, kind);
        }
    }

    /// Dispatch an activate event; `false` when nobody is listening
    fn send_activate(&mut self, timestamp: u64) -> bool {
        let event = ActionEvent::activate(self.id(), timestamp);
        match self.on_activate.as_mut() {
            Some(listener) => listener(&event),
            None => false,
        }
    }

    /// Draw the button into its padding box, then the element's debug overlay
    pub fn draw(&self, ctx: &mut PaintContext) {
        let state = self.state();
        {
            let mut gc = ctx.save();
            let margin = self.element.margin();
            gc.translate(margin, margin);

            let bounds = Rect::new(
                self.element.x(),
                self.element.y(),
                self.element.width(),
                self.element.height(),
            );

            if matches!(state, ButtonState::Hover | ButtonState::Down) {
                gc.stroke_rounded_rect(
                    bounds,
                    self.radius,
                    self.highlight_colour,
                    HIGHLIGHT_LINE_WIDTH,
                );
            }

            let (fill, line_width) = match state {
                ButtonState::Down => (self.highlight_colour, PRESSED_BORDER_LINE_WIDTH),
                ButtonState::Idle | ButtonState::Hover => {
                    (self.element.fill(), BORDER_LINE_WIDTH)
                }
            };
            gc.fill_rounded_rect(bounds, self.radius, fill);
            gc.stroke_rounded_rect(bounds, self.radius, self.element.border(), line_width);
            // Long labels are cut off at the button edge
            gc.clip_rounded_rect(bounds, self.radius);

            let center = bounds.center();
            gc.draw_text(
                self.text.as_str(),
                center.x,
                center.y,
                TextStyle {
                    font: self.font.clone(),
                    color: self.font_colour,
                    align: TextAlign::Center,
                    baseline: self.text_baseline,
                },
            );
        }

        self.element.draw(ctx);
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Button '{}'", self.text)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id())
            .field("text", &self.text)
            .field("state", &self.state())
            .field("padding_box", &self.element.padding_box())
            .finish_non_exhaustive()
    }
}

impl Widget for Button {
    fn element(&self) -> &Element {
        &self.element
    }

    fn draw(&self, ctx: &mut PaintContext) {
        Button::draw(self, ctx);
    }

    fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        Button::handle_pointer_event(self, event)
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        label: label.into(),
        fill: None,
        font: None,
        width: None,
        height: None,
        margin: 0.0,
        position: (0.0, 0.0),
        on_activate: None,
    }
}

/// Builder for creating buttons
pub struct ButtonBuilder {
    label: String,
    fill: Option<Color>,
    font: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    margin: f32,
    position: (f32, f32),
    on_activate: Option<ActionListener>,
}

impl ButtonBuilder {
    /// Set the background color (defaults to the style's button fill)
    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = Some(color.into());
        self
    }

    /// Set the label font (defaults to the style's font)
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Pin the width instead of sizing from the label
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Pin the height instead of sizing from the label
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Position of the margin box for the initial layout pass
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    /// Set the activate listener
    pub fn on_activate<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&ActionEvent) -> bool + Send + 'static,
    {
        self.on_activate = Some(Box::new(listener));
        self
    }

    /// Build the button, compute its minimal size and lay it out
    pub fn build(self, env: &ButtonEnv) -> Button {
        let style = &env.style;

        let mut element = Element::new(style);
        element.set_padding(style.text_padding);
        element.set_margin(self.margin);
        element.set_fill(self.fill.unwrap_or(style.button_fill));
        element.set_explicit_width(self.width);
        element.set_explicit_height(self.height);

        let mut button = Button {
            element,
            fsm: Button::create_fsm(),
            text: self.label,
            font: self.font.unwrap_or_else(|| style.font.clone()),
            font_colour: style.font_colour,
            highlight_colour: style.highlight_colour,
            radius: style.button_radius,
            text_baseline: TextBaseline::Middle,
            min_width: style.min_button_width,
            measurer: env.measurer.clone(),
            focus: env.focus.clone(),
            on_activate: self.on_activate,
        };

        button.update_minimal_size();
        let (x, y) = self.position;
        button.layout(x, y);
        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplekit_paint::{PaintCommand, RoundedRect, StrokeStyle};

    fn make_event(kind: PointerEventKind) -> PointerEvent {
        PointerEvent::at(kind, 0)
    }

    fn strokes(ctx: &PaintContext) -> Vec<StrokeStyle> {
        ctx.commands()
            .iter()
            .filter_map(|c| match c {
                PaintCommand::StrokeRoundedRect { style, .. } => Some(*style),
                _ => None,
            })
            .collect()
    }

    fn fill_colour(ctx: &PaintContext) -> Option<Color> {
        ctx.commands().iter().find_map(|c| match c {
            PaintCommand::FillRoundedRect { color, .. } => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn test_button_creation() {
        let env = ButtonEnv::default();
        let button = Button::new(&env, "Click me");

        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(button.text(), "Click me");
        assert_eq!(button.fill(), Color::LIGHT_GREY);
        assert_eq!(button.font(), env.style.font);
        assert_eq!(button.radius(), 4.0);
        assert_eq!(button.text_baseline(), TextBaseline::Middle);
        assert_eq!(button.element().padding(), env.style.text_padding);
    }

    #[test]
    fn test_button_state_transitions() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Click me");

        assert!(button.handle_pointer_event(&make_event(PointerEventKind::Enter)));
        assert_eq!(button.state(), ButtonState::Hover);

        assert!(button.handle_pointer_event(&make_event(PointerEventKind::Down)));
        assert_eq!(button.state(), ButtonState::Down);

        // No listener registered: not consumed, but the state still moves
        assert!(!button.handle_pointer_event(&make_event(PointerEventKind::Up)));
        assert_eq!(button.state(), ButtonState::Hover);

        assert!(button.handle_pointer_event(&make_event(PointerEventKind::Exit)));
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_press_from_idle_skips_hover() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Go");

        button.handle_pointer_event(&make_event(PointerEventKind::Down));
        assert_eq!(button.state(), ButtonState::Down);
        assert_eq!(env.focus.focused(), Some(button.id()));
    }

    #[test]
    fn test_unrecognized_kinds_not_consumed() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Go");
        button.handle_pointer_event(&make_event(PointerEventKind::Enter));

        for kind in [
            PointerEventKind::Move,
            PointerEventKind::Click,
            PointerEventKind::DoubleClick,
            PointerEventKind::Drag,
            PointerEventKind::Wheel,
        ] {
            assert!(!button.handle_pointer_event(&make_event(kind)));
            assert_eq!(button.state(), ButtonState::Hover);
        }
    }

    #[test]
    fn test_listener_result_is_returned() {
        let env = ButtonEnv::default();
        let mut button = button("Save").on_activate(|_| false).build(&env);
        assert!(!button.handle_pointer_event(&make_event(PointerEventKind::Up)));

        button.on_activate(|event| event.timestamp == 42);
        assert!(button.handle_pointer_event(&PointerEvent::up(0.0, 0.0, 42)));

        button.clear_activate_listener();
        assert!(!button.handle_pointer_event(&make_event(PointerEventKind::Up)));
    }

    #[test]
    fn test_activate_carries_source() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Save");
        let id = button.id();
        button.on_activate(move |event| event.source == id);
        assert!(button.handle_pointer_event(&make_event(PointerEventKind::Up)));
    }

    #[test]
    fn test_minimum_width_floor() {
        let env = ButtonEnv::default();
        let button = Button::new(&env, "OK");
        assert_eq!(button.width(), 80.0);

        let wide = Button::new(&env, "A considerably longer label than fits in eighty");
        assert!(wide.width() > 80.0);
    }

    #[test]
    fn test_explicit_size_overrides_measurement() {
        let env = ButtonEnv::default();
        let mut button = button("OK").width(40.0).height(12.0).build(&env);
        assert_eq!((button.width(), button.height()), (40.0, 12.0));

        button.set_text("Much longer text than before");
        assert_eq!((button.width(), button.height()), (40.0, 12.0));

        button.set_width(None);
        assert!(button.width() > 80.0);
        assert_eq!(button.height(), 12.0);
    }

    #[test]
    fn test_font_change_resizes() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Resize me please");
        let before = (button.width(), button.height());

        button.set_font("24px serif");
        assert!(button.width() > before.0);
        assert!(button.height() > before.1);
    }

    #[test]
    fn test_bad_font_keeps_geometry() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Keep");
        let before = (button.width(), button.height());

        button.set_font("not a font");
        assert_eq!(button.font(), "not a font");
        assert_eq!((button.width(), button.height()), before);
    }

    #[test]
    fn test_draw_idle() {
        let env = ButtonEnv::default();
        let button = button("Idle").margin(3.0).at(10.0, 20.0).build(&env);
        let mut ctx = PaintContext::new();
        button.draw(&mut ctx);

        let bounds = Rect::new(10.0, 20.0, button.width(), button.height());
        let shape = RoundedRect::new(bounds, 4.0);
        let label = TextStyle {
            font: env.style.font.clone(),
            color: Color::BLACK,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        };
        assert_eq!(
            ctx.commands(),
            &[
                PaintCommand::Save,
                PaintCommand::Translate { dx: 3.0, dy: 3.0 },
                PaintCommand::FillRoundedRect {
                    rect: shape,
                    color: Color::LIGHT_GREY,
                },
                PaintCommand::StrokeRoundedRect {
                    rect: shape,
                    style: StrokeStyle {
                        color: Color::GREY,
                        width: 2.0,
                    },
                },
                PaintCommand::ClipRoundedRect { rect: shape },
                PaintCommand::DrawText {
                    text: "Idle".to_string(),
                    position: bounds.center(),
                    style: label,
                },
                PaintCommand::Restore,
            ]
        );
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_draw_hover_adds_outline() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Hover");
        button.handle_pointer_event(&make_event(PointerEventKind::Enter));

        let mut ctx = PaintContext::new();
        button.draw(&mut ctx);

        let strokes = strokes(&ctx);
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].color, Color::LIGHT_BLUE);
        assert_eq!(strokes[0].width, 8.0);
        assert_eq!(strokes[1].width, 2.0);
        assert_eq!(fill_colour(&ctx), Some(Color::LIGHT_GREY));
    }

    #[test]
    fn test_draw_down_uses_highlight_fill() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Down");
        button.set_highlight_colour(Color::RED);
        button.handle_pointer_event(&make_event(PointerEventKind::Down));

        let mut ctx = PaintContext::new();
        button.draw(&mut ctx);

        assert_eq!(fill_colour(&ctx), Some(Color::RED));
        let strokes = strokes(&ctx);
        assert_eq!(strokes[0].color, Color::RED);
        assert_eq!(strokes[1].width, 4.0);
    }

    #[test]
    fn test_debug_overlay_drawn_after_restore() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Debug");
        button.set_debug(true);

        let mut ctx = PaintContext::new();
        button.draw(&mut ctx);

        let restore = ctx
            .commands()
            .iter()
            .position(|c| *c == PaintCommand::Restore)
            .unwrap();
        let overlay: Vec<_> = ctx.commands()[restore + 1..].to_vec();
        assert_eq!(overlay.len(), 3);
        assert!(overlay
            .iter()
            .all(|c| matches!(c, PaintCommand::StrokeRect { .. })));
    }

    #[test]
    fn test_visual_setters() {
        let env = ButtonEnv::default();
        let mut button = Button::new(&env, "Style");
        let size = (button.width(), button.height());

        button.set_fill(Color::WHITE);
        button.set_border(Color::BLACK);
        button.set_font_colour(Color::BLUE);
        button.set_radius(9.0);
        button.set_text_baseline(TextBaseline::Top);

        assert_eq!(button.fill(), Color::WHITE);
        assert_eq!(button.border(), Color::BLACK);
        assert_eq!(button.font_colour(), Color::BLUE);
        assert_eq!(button.radius(), 9.0);
        assert_eq!(button.text_baseline(), TextBaseline::Top);
        assert_eq!((button.width(), button.height()), size);
    }

    #[test]
    fn test_display() {
        let env = ButtonEnv::default();
        let button = Button::new(&env, "Submit");
        assert_eq!(button.to_string(), "Button 'Submit'");
    }
}

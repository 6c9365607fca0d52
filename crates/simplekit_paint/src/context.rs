//! Paint context - the main drawing API

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::primitives::*;

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Horizontal anchor of drawn text relative to its position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical anchor of drawn text relative to its position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Everything needed to place and color a run of text
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font descriptor, e.g. `"12pt sans-serif"`
    pub font: String,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "10px sans-serif".to_string(),
            color: Color::BLACK,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Push the current translation and clip
    Save,
    /// Pop back to the most recently saved translation and clip
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        style: StrokeStyle,
    },
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
    },
    StrokeRoundedRect {
        rect: RoundedRect,
        style: StrokeStyle,
    },
    /// Intersect the clip with a rounded rectangle until the next restore
    ClipRoundedRect {
        rect: RoundedRect,
    },
    DrawText {
        text: String,
        position: Point,
        style: TextStyle,
    },
}

/// Translation and clip in effect at some point of the recording
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct GraphicsState {
    offset: Point,
    clip: Option<RoundedRect>,
}

/// The paint context used for widget drawing
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of saves not yet restored
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Cumulative translation applied to subsequent drawing
    pub fn offset(&self) -> Point {
        self.state.offset
    }

    /// Active clip shape, in the coordinates it was set in
    pub fn clip(&self) -> Option<RoundedRect> {
        self.state.clip
    }

    // === State ===

    /// Save translation and clip. They are restored when the returned guard
    /// is dropped, whichever way the enclosing scope exits.
    pub fn save(&mut self) -> SaveGuard<'_> {
        self.saved.push(self.state);
        self.commands.push(PaintCommand::Save);
        SaveGuard { ctx: self }
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => {
                self.state = state;
                self.commands.push(PaintCommand::Restore);
            }
            None => tracing::warn!("restore without a matching save"),
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset = self.state.offset.offset(dx, dy);
        self.commands.push(PaintCommand::Translate { dx, dy });
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokeRect {
            rect,
            style: StrokeStyle { color, width },
        });
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect: RoundedRect::new(rect, radius),
            color,
        });
    }

    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokeRoundedRect {
            rect: RoundedRect::new(rect, radius),
            style: StrokeStyle { color, width },
        });
    }

    // === Clipping ===

    pub fn clip_rounded_rect(&mut self, rect: Rect, radius: f32) {
        let shape = RoundedRect::new(rect, radius);
        self.state.clip = Some(shape);
        self.commands
            .push(PaintCommand::ClipRoundedRect { rect: shape });
    }

    // === Text ===

    pub fn draw_text(&mut self, text: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        self.commands.push(PaintCommand::DrawText {
            text: text.into(),
            position: Point::new(x, y),
            style,
        });
    }
}

/// Scoped save of a [`PaintContext`]; restores on drop
pub struct SaveGuard<'a> {
    ctx: &'a mut PaintContext,
}

impl Deref for SaveGuard<'_> {
    type Target = PaintContext;

    fn deref(&self) -> &PaintContext {
        self.ctx
    }
}

impl DerefMut for SaveGuard<'_> {
    fn deref_mut(&mut self) -> &mut PaintContext {
        self.ctx
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut ctx = PaintContext::new();
        {
            let mut gc = ctx.save();
            gc.translate(5.0, 5.0);
            gc.clip_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0);
            assert_eq!(gc.depth(), 1);
            assert_eq!(gc.offset(), Point::new(5.0, 5.0));
            assert!(gc.clip().is_some());
        }
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.offset(), Point::ZERO);
        assert_eq!(ctx.clip(), None);
        assert_eq!(ctx.commands().first(), Some(&PaintCommand::Save));
        assert_eq!(ctx.commands().last(), Some(&PaintCommand::Restore));
    }

    #[test]
    fn test_nested_saves() {
        let mut ctx = PaintContext::new();
        ctx.translate(1.0, 0.0);
        {
            let mut outer = ctx.save();
            outer.translate(2.0, 0.0);
            {
                let mut inner = outer.save();
                inner.translate(4.0, 0.0);
                assert_eq!(inner.offset().x, 7.0);
            }
            assert_eq!(outer.offset().x, 3.0);
        }
        assert_eq!(ctx.offset().x, 1.0);
    }

    #[test]
    fn test_guard_restores_during_unwind() {
        let mut ctx = PaintContext::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut gc = ctx.save();
            gc.translate(3.0, 3.0);
            panic!("surface failure");
        }));
        assert!(result.is_err());
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.commands().last(), Some(&PaintCommand::Restore));
    }

    #[test]
    fn test_take_commands() {
        let mut ctx = PaintContext::new();
        ctx.fill_rect(0.0, 0.0, 1.0, 1.0, Color::RED);
        ctx.stroke_rounded_rect(Rect::new(0.0, 0.0, 1.0, 1.0), 0.5, Color::BLUE, 2.0);

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(ctx.commands().is_empty());
        assert_eq!(
            commands[1],
            PaintCommand::StrokeRoundedRect {
                rect: RoundedRect::new(Rect::new(0.0, 0.0, 1.0, 1.0), 0.5),
                style: StrokeStyle {
                    color: Color::BLUE,
                    width: 2.0
                },
            }
        );
    }
}

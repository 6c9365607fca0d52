//! Text measurement
//!
//! Widgets size themselves from the rendered extent of their labels. The
//! measurement backend sits behind [`TextMeasurer`] so a real font stack,
//! the built-in estimator, or a test double can be plugged in.

use std::sync::Arc;

use crate::error::MeasureError;

/// Rendered extent of a run of text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Measures single-line text in a given font
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font: &str) -> Result<TextMetrics, MeasureError>;
}

/// Measurer shared between widgets
pub type SharedMeasurer = Arc<dyn TextMeasurer>;

/// Parsed CSS-style font shorthand: `[style/weight...] <size>(px|pt) <family>`
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Size in pixels
    pub size: f32,
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn parse(font: &str) -> Result<Self, MeasureError> {
        let tokens: Vec<&str> = font.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(MeasureError::EmptyFont);
        }

        let unparsable = || MeasureError::UnparsableFont(font.to_string());

        let (size_idx, size) = tokens
            .iter()
            .enumerate()
            .find_map(|(i, token)| parse_size(token).map(|size| (i, size)))
            .ok_or_else(unparsable)?;

        let family = tokens[size_idx + 1..]
            .join(" ")
            .trim_matches(|c: char| c == '"' || c == '\'')
            .to_string();
        if family.is_empty() {
            return Err(unparsable());
        }

        let modifiers = &tokens[..size_idx];
        Ok(Self {
            size,
            family,
            bold: modifiers
                .iter()
                .any(|m| matches!(*m, "bold" | "bolder" | "600" | "700" | "800" | "900")),
            italic: modifiers.iter().any(|m| matches!(*m, "italic" | "oblique")),
        })
    }
}

/// `12px` or `9pt` (1pt = 4/3 px)
fn parse_size(token: &str) -> Option<f32> {
    let (number, scale) = if let Some(n) = token.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = token.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else {
        return None;
    };
    let value: f32 = number.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value * scale)
}

/// Measurer that estimates extents from average glyph proportions
///
/// Used when no font backend is wired in; deterministic for a given input.
#[derive(Clone, Copy, Debug)]
pub struct EstimatingMeasurer {
    /// Average advance as a fraction of the font size
    pub char_width: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl Default for EstimatingMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.55,
            line_height: 1.2,
        }
    }
}

impl EstimatingMeasurer {
    pub fn shared() -> SharedMeasurer {
        Arc::new(Self::default())
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure(&self, text: &str, font: &str) -> Result<TextMetrics, MeasureError> {
        let spec = FontSpec::parse(font)?;
        let weight = if spec.bold { 1.1 } else { 1.0 };
        let chars = text.chars().count() as f32;

        Ok(TextMetrics {
            width: chars * spec.size * self.char_width * weight,
            height: spec.size * self.line_height,
        })
    }
}

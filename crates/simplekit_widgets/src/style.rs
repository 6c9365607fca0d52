//! Toolkit-wide style defaults
//!
//! Every widget starts from a [`Style`] and copies the values it needs, so
//! per-instance overrides never leak back into the table.
//!
//! A style can be partially overridden from TOML; keys that are left out keep
//! their defaults and colours accept either `#rrggbb[aa]` or a named colour:
//!
//! ```toml
//! font = "14pt serif"
//! highlight_colour = "#3080ff"
//! text_padding = 6
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use simplekit_paint::Color;

use crate::error::StyleError;

/// Default visual constants for widgets
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Font descriptor used for labels
    pub font: String,
    pub font_colour: Color,
    /// Colour of the hover outline and of a pressed button's fill
    pub highlight_colour: Color,
    pub border: Color,
    /// Background of a button when no fill is given
    pub button_fill: Color,
    /// Space between a label and its box edge, on every side
    pub text_padding: f32,
    pub button_radius: f32,
    /// Narrowest a button gets when no explicit width is given
    pub min_button_width: f32,
    /// Draw box-model outlines on top of every element
    pub debug: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: "12pt sans-serif".to_string(),
            font_colour: Color::BLACK,
            highlight_colour: Color::LIGHT_BLUE,
            border: Color::GREY,
            button_fill: Color::LIGHT_GREY,
            text_padding: 5.0,
            button_radius: 4.0,
            min_button_width: 80.0,
            debug: false,
        }
    }
}

/// On-disk form of a style; every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    font: Option<String>,
    font_colour: Option<String>,
    highlight_colour: Option<String>,
    border: Option<String>,
    button_fill: Option<String>,
    text_padding: Option<f32>,
    button_radius: Option<f32>,
    min_button_width: Option<f32>,
    debug: Option<bool>,
}

fn colour(key: &'static str, value: Option<String>, fallback: Color) -> Result<Color, StyleError> {
    match value {
        Some(raw) => Color::parse(&raw).map_err(|source| StyleError::Colour { key, source }),
        None => Ok(fallback),
    }
}

impl Style {
    /// Parse a TOML style, filling unspecified keys from [`Style::default`]
    pub fn from_toml_str(input: &str) -> Result<Self, StyleError> {
        let file: StyleFile = toml::from_str(input)?;
        let defaults = Self::default();

        Ok(Self {
            font_colour: colour("font_colour", file.font_colour, defaults.font_colour)?,
            highlight_colour: colour(
                "highlight_colour",
                file.highlight_colour,
                defaults.highlight_colour,
            )?,
            border: colour("border", file.border, defaults.border)?,
            button_fill: colour("button_fill", file.button_fill, defaults.button_fill)?,
            font: file.font.unwrap_or(defaults.font),
            text_padding: file.text_padding.unwrap_or(defaults.text_padding),
            button_radius: file.button_radius.unwrap_or(defaults.button_radius),
            min_button_width: file.min_button_width.unwrap_or(defaults.min_button_width),
            debug: file.debug.unwrap_or(defaults.debug),
        })
    }

    /// Load a TOML style file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded style");
        Ok(style)
    }
}

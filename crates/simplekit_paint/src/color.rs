//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a color string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color `{0}` (expected #rrggbb or #rrggbbaa)")]
    InvalidHex(String),

    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// CSS `grey` (#808080)
    pub const GREY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    /// CSS `lightgrey` (#d3d3d3)
    pub const LIGHT_GREY: Color = Color::rgb(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0);
    /// CSS `lightblue` (#add8e6)
    pub const LIGHT_BLUE: Color = Color::rgb(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse a CSS-style color: `#rrggbb`, `#rrggbbaa`, or one of the
    /// named colors the toolkit's style table uses.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = input.strip_prefix('#') {
            let valid = matches!(digits.len(), 6 | 8)
                && digits.chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(ColorParseError::InvalidHex(input.to_string()));
            }
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidHex(input.to_string()))?;
            return Ok(if digits.len() == 8 {
                let [r, g, b, a] = value.to_be_bytes();
                Self::from_rgba8(r, g, b, a)
            } else {
                Self::from_hex(value)
            });
        }

        match input.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            "grey" | "gray" => Ok(Self::GREY),
            "lightgrey" | "lightgray" => Ok(Self::LIGHT_GREY),
            "lightblue" => Ok(Self::LIGHT_BLUE),
            "transparent" => Ok(Self::TRANSPARENT),
            _ => Err(ColorParseError::UnknownName(input.to_string())),
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#d3d3d3"), Ok(Color::LIGHT_GREY));
        assert_eq!(Color::parse("#ff000080").map(|c| c.to_rgba8()), Ok([255, 0, 0, 128]));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("lightblue".parse::<Color>(), Ok(Color::LIGHT_BLUE));
        assert_eq!(Color::parse(" LightGray "), Ok(Color::LIGHT_GREY));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Color::parse(""), Err(ColorParseError::Empty));
        assert!(matches!(Color::parse("#12345"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Color::parse("#gggggg"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Color::parse("mauve"), Err(ColorParseError::UnknownName(_))));
    }

    #[test]
    fn test_display_round_trips_through_hex() {
        assert_eq!(Color::LIGHT_BLUE.to_string(), "#add8e6");
        assert_eq!(Color::BLACK.with_alpha(0.0).to_string(), "#00000000");
    }
}

//! SimpleKit Paint API
//!
//! A 2D drawing API modelled on an HTML canvas. Drawing calls are recorded
//! as [`PaintCommand`]s rather than rasterized, so a backend can replay them
//! and tests can assert on exactly what a widget drew.
//!
//! # Features
//!
//! - Rectangles and rounded rectangles, filled and stroked
//! - Text with horizontal alignment and vertical baseline
//! - Scoped save/restore of translation and clip via [`SaveGuard`]
//! - Rounded-rectangle clipping

pub mod color;
pub mod context;
pub mod primitives;

pub use color::{Color, ColorParseError};
pub use context::{
    PaintCommand, PaintContext, SaveGuard, StrokeStyle, TextAlign, TextBaseline, TextStyle,
};
pub use primitives::*;

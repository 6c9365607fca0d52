//! SimpleKit Widget Library
//!
//! Canvas-drawn widgets with FSM-driven interactions. Each widget owns an
//! [`Element`] for its box model, measures its own minimal size through a
//! [`TextMeasurer`], and records its appearance into a
//! [`PaintContext`](simplekit_paint::PaintContext).

pub mod button;
pub mod element;
pub mod error;
pub mod style;
pub mod text;
pub mod widget;

pub use button::{button, Button, ButtonBuilder, ButtonEnv, ButtonState};
pub use element::Element;
pub use error::{MeasureError, StyleError};
pub use style::Style;
pub use text::{EstimatingMeasurer, FontSpec, SharedMeasurer, TextMeasurer, TextMetrics};
pub use widget::Widget;

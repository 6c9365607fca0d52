//! Widget error types

use std::path::PathBuf;

use simplekit_paint::ColorParseError;
use thiserror::Error;

/// Text could not be measured
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("no font given")]
    EmptyFont,

    #[error("cannot parse font descriptor `{0}`")]
    UnparsableFont(String),

    #[error("font `{0}` is not available")]
    Unavailable(String),
}

/// Style table could not be loaded
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("invalid colour for `{key}`: {source}")]
    Colour {
        key: &'static str,
        #[source]
        source: ColorParseError,
    },
}

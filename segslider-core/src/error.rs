//! Construction-time errors.
//!
//! Drag and set operations never fail; out-of-range input is clamped.
//! Only building a track or seeding a slider can be rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("track needs at least 2 point markers, got {count}")]
    TooFewMarkers { count: usize },

    #[error("track has no usable width (start {start}, end {end})")]
    EmptyTrack { start: f64, end: f64 },

    #[error("handle width must be finite and non-negative, got {0}")]
    InvalidHandleWidth(f64),

    #[error("invalid seed points: green {green}, amber {amber} (need 0 <= green <= amber <= 100)")]
    InvalidSeed { green: f64, amber: f64 },

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SliderError {
    fn from(e: toml::de::Error) -> Self {
        SliderError::Config(e.to_string())
    }
}

//! Slider configuration — seed points and optional track override, loaded from TOML.
//!
//! A file is either the bare seeds (`initial_green = 20` at top level) or
//! the sectioned form below. Unknown keys are rejected.
//!
//! ```toml
//! [slider]
//! initial_green = 20
//! initial_amber = 70
//!
//! [track]
//! width = 240
//! padding_left = 20
//! padding_right = 20
//! marker_count = 11
//! handle_width = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SliderError;
use crate::geometry::{ContainerMetrics, MAX_POINT, MIN_POINT};

pub const DEFAULT_GREEN: f64 = 10.0;
pub const DEFAULT_AMBER: f64 = 50.0;

/// Seed values for a slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub initial_green: f64,
    pub initial_amber: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self { initial_green: DEFAULT_GREEN, initial_amber: DEFAULT_AMBER }
    }
}

impl SliderConfig {
    pub fn new(initial_green: f64, initial_amber: f64) -> Self {
        Self { initial_green, initial_amber }
    }

    /// Override whichever seeds are given, keeping the rest.
    pub fn with_overrides(self, green: Option<f64>, amber: Option<f64>) -> Self {
        Self {
            initial_green: green.unwrap_or(self.initial_green),
            initial_amber: amber.unwrap_or(self.initial_amber),
        }
    }

    /// Seeds must be finite, on the scale, and ordered.
    pub fn validate(&self) -> Result<(), SliderError> {
        let (g, a) = (self.initial_green, self.initial_amber);
        let on_scale = |p: f64| p.is_finite() && (MIN_POINT..=MAX_POINT).contains(&p);
        if on_scale(g) && on_scale(a) && g <= a {
            Ok(())
        } else {
            Err(SliderError::InvalidSeed { green: g, amber: a })
        }
    }

    /// Parse bare top-level seeds or a whole config file with a `[slider]` table.
    pub fn from_toml(content: &str) -> Result<Self, SliderError> {
        let file = SliderFile::from_toml(content)?;
        Ok(file.slider)
    }

    pub fn from_file(path: &Path) -> Result<Self, SliderError> {
        Ok(SliderFile::from_file(path)?.slider)
    }
}

/// Whole config file: seeds plus an optional track override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderFile {
    pub slider: SliderConfig,
    pub track: Option<ContainerMetrics>,
}

impl SliderFile {
    /// Sectioned when a `[slider]` or `[track]` table is present,
    /// otherwise the whole document is read as bare seeds.
    pub fn from_toml(content: &str) -> Result<Self, SliderError> {
        let value: toml::Value = toml::from_str(content)?;
        let sectioned = value.get("slider").is_some() || value.get("track").is_some();
        let file = if sectioned {
            value.try_into::<SliderFile>()?
        } else {
            SliderFile { slider: value.try_into::<SliderConfig>()?, track: None }
        };
        file.slider.validate()?;
        Ok(file)
    }

    pub fn from_file(path: &Path) -> Result<Self, SliderError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ten_and_fifty() {
        let c = SliderConfig::default();
        assert_eq!(c.initial_green, 10.0);
        assert_eq!(c.initial_amber, 50.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let c = SliderConfig::from_toml("[slider]\ninitial_amber = 80.0\n").unwrap();
        assert_eq!(c, SliderConfig::new(10.0, 80.0));
    }

    #[test]
    fn bare_seeds_are_read() {
        let c = SliderConfig::from_toml("initial_green = 20.0\ninitial_amber = 70.0\n").unwrap();
        assert_eq!(c, SliderConfig::new(20.0, 70.0));

        let c = SliderConfig::from_toml("initial_amber = 90.0\n").unwrap();
        assert_eq!(c, SliderConfig::new(10.0, 90.0));
    }

    #[test]
    fn bare_crossed_seeds_are_rejected() {
        let err = SliderConfig::from_toml("initial_green = 80.0\ninitial_amber = 20.0\n").unwrap_err();
        assert!(matches!(err, SliderError::InvalidSeed { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(SliderConfig::from_toml("initial_gren = 20.0\n"), Err(SliderError::Config(_))));
        assert!(matches!(
            SliderConfig::from_toml("[slider]\ninitial_green = 20.0\n[extra]\nx = 1\n"),
            Err(SliderError::Config(_))
        ));
        assert!(matches!(
            SliderConfig::from_toml("[slider]\ninitial_gren = 20.0\n"),
            Err(SliderError::Config(_))
        ));
    }

    #[test]
    fn empty_toml_is_default() {
        let file = SliderFile::from_toml("").unwrap();
        assert_eq!(file.slider, SliderConfig::default());
        assert!(file.track.is_none());
    }

    #[test]
    fn track_table_is_parsed() {
        let file = SliderFile::from_toml(
            "[track]\nwidth = 240.0\npadding_left = 20.0\npadding_right = 20.0\nmarker_count = 11\nhandle_width = 6.0\n",
        )
        .unwrap();
        let track = file.track.unwrap();
        assert_eq!(track.width, 240.0);
        assert_eq!(track.marker_count, 11);
    }

    #[test]
    fn crossed_seeds_are_rejected() {
        let err = SliderConfig::from_toml("[slider]\ninitial_green = 60.0\ninitial_amber = 40.0\n")
            .unwrap_err();
        assert!(matches!(err, SliderError::InvalidSeed { .. }));
    }

    #[test]
    fn off_scale_seed_is_rejected() {
        assert!(SliderConfig::new(-10.0, 50.0).validate().is_err());
        assert!(SliderConfig::new(10.0, 110.0).validate().is_err());
        assert!(SliderConfig::new(f64::NAN, 50.0).validate().is_err());
    }

    #[test]
    fn overrides_replace_only_given_seeds() {
        let c = SliderConfig::default().with_overrides(Some(30.0), None);
        assert_eq!(c, SliderConfig::new(30.0, 50.0));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        assert!(matches!(SliderConfig::from_toml("[slider"), Err(SliderError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SliderConfig::from_file(Path::new("/nonexistent/segslider.toml")).unwrap_err();
        assert!(matches!(err, SliderError::Io(_)));
    }
}

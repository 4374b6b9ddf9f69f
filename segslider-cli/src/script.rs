//! Drag scripts — a TOML list of handle moves replayed against a slider.
//!
//! ```toml
//! [[step]]
//! handle = "green"
//! offset = 85.0      # drag the handle's left edge to this pixel offset
//!
//! [[step]]
//! handle = "amber"
//! point = 70.0       # or set the point directly
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use segslider_core::{Handle, PointChange, SegmentedSlider};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("step {index}: give exactly one of `offset` or `point`")]
    AmbiguousStep { index: usize },

    #[error("script has no steps")]
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub handle: Handle,
    #[serde(default)]
    pub offset: Option<f64>,
    #[serde(default)]
    pub point: Option<f64>,
}

/// One resolved action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Drag(Handle, f64),
    Set(Handle, f64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragScript {
    #[serde(default)]
    pub step: Vec<Step>,
}

impl DragScript {
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: DragScript = toml::from_str(content)?;
        if script.step.is_empty() {
            return Err(ScriptError::Empty);
        }
        // Surface bad steps before anything runs.
        script.actions()?;
        Ok(script)
    }

    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn actions(&self) -> Result<Vec<Action>, ScriptError> {
        self.step
            .iter()
            .enumerate()
            .map(|(index, step)| match (step.offset, step.point) {
                (Some(offset), None) => Ok(Action::Drag(step.handle, offset)),
                (None, Some(point)) => Ok(Action::Set(step.handle, point)),
                _ => Err(ScriptError::AmbiguousStep { index }),
            })
            .collect()
    }

    /// Run every step in order, returning each resulting change.
    pub fn replay(&self, slider: &mut SegmentedSlider) -> Result<Vec<PointChange>, ScriptError> {
        let changes = self
            .actions()?
            .into_iter()
            .map(|action| match action {
                Action::Drag(handle, offset) => slider.drag(handle, offset),
                Action::Set(handle, point) => slider.set_point(handle, point),
            })
            .collect();
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segslider_core::{ContainerMetrics, SliderConfig, TrackGeometry};

    const REFERENCE: &str = r#"
[[step]]
handle = "green"
offset = 85.0

[[step]]
handle = "green"
offset = 140.0

[[step]]
handle = "amber"
point = 90.0
"#;

    #[test]
    fn parses_drag_and_set_steps() {
        let script = DragScript::from_toml(REFERENCE).unwrap();
        assert_eq!(
            script.actions().unwrap(),
            vec![
                Action::Drag(Handle::Green, 85.0),
                Action::Drag(Handle::Green, 140.0),
                Action::Set(Handle::Amber, 90.0),
            ]
        );
    }

    #[test]
    fn replay_follows_reference_scenario() {
        let geometry = TrackGeometry::from_container(&ContainerMetrics::default()).unwrap();
        let mut slider = SegmentedSlider::new(geometry, &SliderConfig::default()).unwrap();
        let changes = DragScript::from_toml(REFERENCE).unwrap().replay(&mut slider).unwrap();

        let points: Vec<(f64, f64)> = changes.iter().map(|c| (c.green, c.amber)).collect();
        assert_eq!(points, vec![(45.0, 50.0), (50.0, 50.0), (50.0, 90.0)]);
        assert!(changes[1].clamped);
    }

    #[test]
    fn step_with_both_targets_is_rejected() {
        let err = DragScript::from_toml("[[step]]\nhandle = \"amber\"\noffset = 1.0\npoint = 2.0\n")
            .unwrap_err();
        assert!(matches!(err, ScriptError::AmbiguousStep { index: 0 }));
    }

    #[test]
    fn step_with_no_target_is_rejected() {
        let err = DragScript::from_toml("[[step]]\nhandle = \"green\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::AmbiguousStep { index: 0 }));
    }

    #[test]
    fn unknown_handle_is_a_parse_error() {
        let err = DragScript::from_toml("[[step]]\nhandle = \"blue\"\noffset = 1.0\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(matches!(DragScript::from_toml(""), Err(ScriptError::Empty)));
    }
}

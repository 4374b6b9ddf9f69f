//! Slider state persistence — JSON save/load across restarts.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use segslider_core::Handle;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub green: Option<f64>,
    pub amber: Option<f64>,
    pub active_handle: Handle,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            green: None,
            amber: None,
            active_handle: Handle::Green,
            saved_at: None,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        green: Some(app.slider.green_point()),
        amber: Some(app.slider.amber_point()),
        active_handle: app.active,
        saved_at: Some(Utc::now()),
    }
}

/// Apply persisted state to AppState. Saved points replace the config
/// seeds only when both are present and still form a valid pair.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active = state.active_handle;
    if let (Some(green), Some(amber)) = (state.green, state.amber) {
        match app.slider.set_points(green, amber) {
            Ok(_) => app.set_status(format!("Restored {}", app.readout())),
            Err(e) => app.set_warning(format!("Saved points ignored: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use segslider_core::SliderConfig;

    fn app() -> AppState {
        AppState::new(SliderConfig::default(), Rect::new(0, 0, 80, 24)).unwrap()
    }

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("segslider_persist_test");
        let path = dir.join("state.json");

        let mut source = app();
        source.slider.set_points(30.0, 75.0).unwrap();
        source.active = Handle::Amber;
        save(&path, &extract(&source)).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.green, Some(30.0));
        assert_eq!(loaded.amber, Some(75.0));
        assert!(loaded.saved_at.is_some());

        let mut target = app();
        apply(&mut target, loaded);
        assert_eq!(target.slider.green_point(), 30.0);
        assert_eq!(target.slider.amber_point(), 75.0);
        assert_eq!(target.active, Handle::Amber);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.green.is_none());
        assert_eq!(loaded.active_handle, Handle::Green);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("segslider_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.amber.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn crossed_saved_points_are_ignored() {
        let mut app = app();
        let state = PersistedState {
            green: Some(80.0),
            amber: Some(20.0),
            ..PersistedState::default()
        };
        apply(&mut app, state);
        assert_eq!(app.slider.green_point(), 10.0);
        assert_eq!(app.slider.amber_point(), 50.0);
    }
}

//! Application state — single-owner, main-thread only.
//!
//! The slider is the only model. Terminal cells act as pixels: the track
//! area's columns become the track's coordinate space, so a mouse column
//! maps straight onto a handle offset.

use ratatui::layout::Rect;
use tracing::{debug, warn};

use segslider_core::{
    ContainerMetrics, DragGesture, Handle, PointChange, RecordingObserver, SegmentedSlider,
    SliderConfig, SliderError, TrackGeometry, POINT_STEP,
};

use crate::ui;

/// Empty cells kept on each side of the track.
pub const TRACK_PADDING: f64 = 2.0;
/// Point markers 0, 10, .., 100.
pub const MARKER_COUNT: usize = 11;
/// Handles are one cell wide.
pub const HANDLE_WIDTH: f64 = 1.0;

/// Container metrics for a track area `width` cells wide.
pub fn track_metrics(width: u16) -> ContainerMetrics {
    ContainerMetrics {
        width: f64::from(width),
        padding_left: TRACK_PADDING,
        padding_right: TRACK_PADDING,
        marker_count: MARKER_COUNT,
        handle_width: HANDLE_WIDTH,
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// A mouse gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseDrag {
    pub gesture: DragGesture,
    pub start_column: u16,
}

pub struct AppState {
    pub slider: SegmentedSlider,
    pub config: SliderConfig,
    pub active: Handle,
    pub drag: Option<MouseDrag>,
    /// Where the track was last laid out, in absolute terminal cells.
    pub track_area: Rect,
    /// Every `(green, amber)` the slider has reported.
    pub notifications: RecordingObserver,
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
    pub running: bool,
}

impl AppState {
    pub fn new(config: SliderConfig, screen: Rect) -> Result<Self, SliderError> {
        let track_area = ui::screen_layout(screen).track;
        let geometry = TrackGeometry::from_container(&track_metrics(track_area.width))?;

        let notifications = RecordingObserver::new();
        let mut slider = SegmentedSlider::new(geometry, &config)?;
        slider.subscribe(notifications.clone());
        slider.subscribe(|green: f64, amber: f64| debug!(green, amber, "breakpoints"));
        slider.initialize();

        Ok(Self {
            slider,
            config,
            active: Handle::Green,
            drag: None,
            track_area,
            notifications,
            status_message: None,
            overlay: Overlay::None,
            running: true,
        })
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Error));
    }

    /// Re-derive the track for a new terminal size, keeping the points.
    pub fn resize(&mut self, screen: Rect) {
        let track_area = ui::screen_layout(screen).track;
        match TrackGeometry::from_container(&track_metrics(track_area.width)) {
            Ok(geometry) => {
                self.track_area = track_area;
                self.drag = None;
                self.slider.set_geometry(geometry);
            }
            Err(e) => {
                warn!(width = track_area.width, error = %e, "terminal too narrow for track");
                self.set_warning(format!("Terminal too narrow: {e}"));
            }
        }
    }

    pub fn toggle_active(&mut self) {
        self.active = self.active.other();
        self.set_status(format!("Active handle: {}", self.active.label()));
    }

    /// Move the active handle by `steps` point steps.
    pub fn nudge(&mut self, steps: f64) {
        let target = self.slider.point(self.active) + steps * POINT_STEP;
        let change = self.slider.set_point(self.active, target);
        self.report(change);
    }

    pub fn snap(&mut self) {
        self.slider.snap_to_steps();
        self.set_status(format!("Snapped: {}", self.readout()));
    }

    /// Back to the configured seeds.
    pub fn reset(&mut self) {
        let (g, a) = (self.config.initial_green, self.config.initial_amber);
        match self.slider.set_points(g, a) {
            Ok(_) => self.set_status(format!("Reset: {}", self.readout())),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Absolute terminal column of a handle's centre cell.
    pub fn handle_column(&self, handle: Handle) -> u16 {
        let centre = self.slider.handle_offset(handle) + HANDLE_WIDTH / 2.0;
        self.track_area.x + centre.floor().max(0.0) as u16
    }

    /// Handle under (or next to) a column. Ties go to the active handle.
    pub fn handle_at(&self, column: u16, row: u16) -> Option<Handle> {
        let rows = self.track_area.y..self.track_area.y + self.track_area.height;
        if !rows.contains(&row) {
            return None;
        }
        let distance = |h: Handle| self.handle_column(h).abs_diff(column);
        let (first, second) = (self.active, self.active.other());
        let best = if distance(second) < distance(first) { second } else { first };
        (distance(best) <= 1).then_some(best)
    }

    pub fn begin_mouse_drag(&mut self, column: u16, row: u16) {
        match self.handle_at(column, row) {
            Some(handle) => {
                self.active = handle;
                self.drag = Some(MouseDrag {
                    gesture: self.slider.begin_drag(handle),
                    start_column: column,
                });
            }
            None => self.drag = None,
        }
    }

    pub fn mouse_drag_to(&mut self, column: u16) {
        let Some(drag) = self.drag else { return };
        let delta = f64::from(column) - f64::from(drag.start_column);
        let change = self.slider.drag_move(&drag.gesture, delta);
        self.report(change);
    }

    pub fn end_mouse_drag(&mut self) {
        self.drag = None;
    }

    pub fn readout(&self) -> String {
        format!(
            "green {:.1} · amber {:.1}",
            self.slider.green_point(),
            self.slider.amber_point()
        )
    }

    fn report(&mut self, change: PointChange) {
        let msg = self.readout();
        if change.clamped {
            let other = change.handle.other().label();
            self.set_warning(format!("{msg} (stopped at {other})"));
        } else {
            self.set_status(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn app() -> AppState {
        AppState::new(SliderConfig::default(), Rect::new(0, 0, 80, 24)).unwrap()
    }

    #[test]
    fn new_reports_seed() {
        let app = app();
        assert_eq!(app.notifications.notifications(), vec![(10.0, 50.0)]);
        assert_eq!(app.active, Handle::Green);
        assert!(app.running);
    }

    #[test]
    fn nudge_moves_active_by_one_step() {
        let mut app = app();
        app.nudge(1.0);
        assert_eq!(app.slider.green_point(), 20.0);
        app.toggle_active();
        app.nudge(-1.0);
        assert_eq!(app.slider.amber_point(), 40.0);
    }

    #[test]
    fn nudge_past_other_handle_warns() {
        let mut app = app();
        app.nudge(10.0);
        assert_eq!(app.slider.green_point(), 50.0);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn mouse_drag_moves_grabbed_handle() {
        let mut app = app();
        let row = app.track_area.y;
        let column = app.handle_column(Handle::Amber);
        app.begin_mouse_drag(column, row);
        assert_eq!(app.active, Handle::Amber);
        app.mouse_drag_to(column + 200);
        assert!((app.slider.amber_point() - 100.0).abs() < 1e-9);
        app.end_mouse_drag();
        assert!(app.drag.is_none());
    }

    #[test]
    fn click_away_from_handles_grabs_nothing() {
        let mut app = app();
        let row = app.track_area.y;
        let far = app.track_area.x + app.track_area.width - 1;
        app.begin_mouse_drag(far, row);
        assert!(app.drag.is_none());
        app.mouse_drag_to(0);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn resize_keeps_points() {
        let mut app = app();
        app.nudge(2.0);
        app.resize(Rect::new(0, 0, 120, 30));
        assert_eq!(app.slider.green_point(), 30.0);
        assert_eq!(app.track_area.width, ui::screen_layout(Rect::new(0, 0, 120, 30)).track.width);
    }

    #[test]
    fn reset_restores_config_seeds() {
        let mut app = app();
        app.nudge(3.0);
        app.reset();
        assert_eq!(app.slider.green_point(), 10.0);
        assert_eq!(app.slider.amber_point(), 50.0);
    }

    proptest! {
        /// Arbitrary mouse gestures on any terminal width keep the points
        /// ordered and both handles inside the track area.
        #[test]
        fn mouse_gestures_keep_handles_on_track(
            width in 20u16..240,
            moves in prop::collection::vec((prop::bool::ANY, 0u16..300), 1..40),
        ) {
            let mut app = AppState::new(SliderConfig::default(), Rect::new(0, 0, width, 24)).unwrap();
            let row = app.track_area.y;
            for (grab_amber, column) in moves {
                let handle = if grab_amber { Handle::Amber } else { Handle::Green };
                app.begin_mouse_drag(app.handle_column(handle), row);
                app.mouse_drag_to(column);
                app.end_mouse_drag();

                prop_assert!(app.slider.green_point() <= app.slider.amber_point());
                let track = app.track_area;
                for h in [Handle::Green, Handle::Amber] {
                    let col = app.handle_column(h);
                    prop_assert!(col >= track.x && col < track.x + track.width);
                }
            }
        }
    }
}

//! SegmentedSlider — two ordered control points over a fixed track.
//!
//! State is the pair `(green_point, amber_point)`. Every mutation goes
//! through the same pipeline: clamp the handle to the track, convert to a
//! point, clamp against the other point, recompute the full layout, then
//! notify observers. `green_point <= amber_point` holds after every call.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::geometry::{snap_to_step, TrackGeometry, MAX_POINT, MIN_POINT};
use crate::layout::{compute_layout, SliderLayout};
use crate::observer::PointObserver;

/// Which control point a handle drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Green,
    Amber,
}

impl Handle {
    pub fn label(self) -> &'static str {
        match self {
            Handle::Green => "green",
            Handle::Amber => "amber",
        }
    }

    pub fn other(self) -> Handle {
        match self {
            Handle::Green => Handle::Amber,
            Handle::Amber => Handle::Green,
        }
    }
}

/// Outcome of a single mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointChange {
    pub handle: Handle,
    pub green: f64,
    pub amber: f64,
    pub layout: SliderLayout,
    /// The requested point would have crossed the other handle and was
    /// stopped at it.
    pub clamped: bool,
}

/// A press-drag-release sequence on one handle.
///
/// Deltas are relative to where the handle's left edge was when the
/// gesture began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub handle: Handle,
    pub origin: f64,
}

pub struct SegmentedSlider {
    geometry: TrackGeometry,
    green_point: f64,
    amber_point: f64,
    layout: SliderLayout,
    observers: Vec<Box<dyn PointObserver>>,
}

impl std::fmt::Debug for SegmentedSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedSlider")
            .field("geometry", &self.geometry)
            .field("green_point", &self.green_point)
            .field("amber_point", &self.amber_point)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SegmentedSlider {
    /// Build a slider seeded from `config`. No observer is notified until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(geometry: TrackGeometry, config: &SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let (green, amber) = (config.initial_green, config.initial_amber);
        Ok(Self {
            geometry,
            green_point: green,
            amber_point: amber,
            layout: compute_layout(green, amber, &geometry),
            observers: Vec::new(),
        })
    }

    /// Construct, subscribe one observer, and run the initial notification.
    pub fn with_observer<O>(
        geometry: TrackGeometry,
        config: &SliderConfig,
        observer: O,
    ) -> Result<Self, SliderError>
    where
        O: PointObserver + 'static,
    {
        let mut slider = Self::new(geometry, config)?;
        slider.subscribe(observer);
        slider.initialize();
        Ok(slider)
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: PointObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Place both handles at the current points and notify observers.
    pub fn initialize(&mut self) -> SliderLayout {
        self.layout = compute_layout(self.green_point, self.amber_point, &self.geometry);
        debug!(green = self.green_point, amber = self.amber_point, "slider initialized");
        self.notify();
        self.layout
    }

    pub fn green_point(&self) -> f64 {
        self.green_point
    }

    pub fn amber_point(&self) -> f64 {
        self.amber_point
    }

    pub fn point(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Green => self.green_point,
            Handle::Amber => self.amber_point,
        }
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    /// Current left edge of a handle.
    pub fn handle_offset(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Green => self.layout.green_handle,
            Handle::Amber => self.layout.amber_handle,
        }
    }

    /// Drag the green handle's left edge to `offset`.
    pub fn drag_green(&mut self, offset: f64) -> PointChange {
        self.drag(Handle::Green, offset)
    }

    /// Drag the amber handle's left edge to `offset`.
    pub fn drag_amber(&mut self, offset: f64) -> PointChange {
        self.drag(Handle::Amber, offset)
    }

    pub fn drag(&mut self, handle: Handle, offset: f64) -> PointChange {
        let clamped_offset = self.geometry.clamp_handle_offset(offset);
        if clamped_offset != offset {
            trace!(handle = handle.label(), offset, clamped_offset, "handle clamped to track");
        }
        let candidate = self
            .geometry
            .position_to_point(clamped_offset)
            .clamp(MIN_POINT, self.scale_top());
        self.apply(handle, candidate)
    }

    /// Highest reachable point: the end of the track, capped at 100.
    fn scale_top(&self) -> f64 {
        self.geometry.max_point().min(MAX_POINT).max(MIN_POINT)
    }

    /// Set the green point directly; clamped to the track and to amber.
    pub fn set_green_point(&mut self, point: f64) -> PointChange {
        self.set_point(Handle::Green, point)
    }

    /// Set the amber point directly; clamped to the track and to green.
    pub fn set_amber_point(&mut self, point: f64) -> PointChange {
        self.set_point(Handle::Amber, point)
    }

    pub fn set_point(&mut self, handle: Handle, point: f64) -> PointChange {
        let candidate = if point.is_nan() {
            self.point(handle)
        } else {
            point.clamp(MIN_POINT, self.scale_top())
        };
        self.apply(handle, candidate)
    }

    /// Replace both points at once, e.g. when restoring saved state.
    /// The pair must be a valid seed; observers are notified once.
    pub fn set_points(&mut self, green: f64, amber: f64) -> Result<SliderLayout, SliderError> {
        SliderConfig::new(green, amber).validate()?;
        self.green_point = green;
        self.amber_point = amber;
        Ok(self.initialize())
    }

    /// Round both points to the nearest step. Rounding is monotonic, so
    /// the ordering survives; observers are notified once.
    pub fn snap_to_steps(&mut self) -> SliderLayout {
        self.green_point = snap_to_step(self.green_point);
        self.amber_point = snap_to_step(self.amber_point);
        self.initialize()
    }

    /// Start a gesture anchored at the handle's current position.
    pub fn begin_drag(&self, handle: Handle) -> DragGesture {
        DragGesture { handle, origin: self.handle_offset(handle) }
    }

    /// Apply a displacement measured from the gesture's start.
    pub fn drag_move(&mut self, gesture: &DragGesture, delta: f64) -> PointChange {
        self.drag(gesture.handle, gesture.origin + delta)
    }

    /// Swap in new track geometry, keeping the points. Observers are
    /// notified since handle positions move.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) -> SliderLayout {
        self.geometry = geometry;
        self.initialize()
    }

    fn apply(&mut self, handle: Handle, candidate: f64) -> PointChange {
        let clamped = match handle {
            Handle::Green => {
                if candidate <= self.amber_point {
                    self.green_point = candidate;
                    false
                } else {
                    self.green_point = self.amber_point;
                    true
                }
            }
            Handle::Amber => {
                if candidate >= self.green_point {
                    self.amber_point = candidate;
                    false
                } else {
                    self.amber_point = self.green_point;
                    true
                }
            }
        };
        if clamped {
            trace!(handle = handle.label(), candidate, "stopped at the other handle");
        }

        self.layout = compute_layout(self.green_point, self.amber_point, &self.geometry);
        debug!(
            handle = handle.label(),
            green = self.green_point,
            amber = self.amber_point,
            "points changed"
        );
        self.notify();

        PointChange {
            handle,
            green: self.green_point,
            amber: self.amber_point,
            layout: self.layout,
            clamped,
        }
    }

    fn notify(&mut self) {
        let (green, amber) = (self.green_point, self.amber_point);
        for observer in &mut self.observers {
            observer.points_changed(green, amber);
        }
    }
}

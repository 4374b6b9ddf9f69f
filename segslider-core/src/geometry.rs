//! Track geometry — linear mapping between pixel offsets and the point scale.
//!
//! The track is a 1-D coordinate space. Discrete points on the 0..=100
//! scale sit `point_interval` pixels apart, starting at `start_position`.
//! Handles are positioned by their left edge, so every handle-related
//! conversion accounts for half the handle width.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Distance on the point scale between two adjacent markers.
pub const POINT_STEP: f64 = 10.0;
/// Lowest selectable point.
pub const MIN_POINT: f64 = 0.0;
/// Highest selectable point.
pub const MAX_POINT: f64 = 100.0;

/// Measurements a host reports about the container the slider lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    /// Outer width of the container.
    pub width: f64,
    /// Inner spacing before the first point.
    pub padding_left: f64,
    /// Inner spacing after the last point.
    pub padding_right: f64,
    /// Number of point markers along the track.
    pub marker_count: usize,
    /// Rendered width of a drag handle.
    pub handle_width: f64,
}

impl Default for ContainerMetrics {
    /// 200px track, no padding, 11 markers, 10px handles.
    fn default() -> Self {
        Self {
            width: 200.0,
            padding_left: 0.0,
            padding_right: 0.0,
            marker_count: 11,
            handle_width: 10.0,
        }
    }
}

/// Resolved track bounds and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub start_position: f64,
    pub end_position: f64,
    pub point_interval: f64,
    pub handle_width: f64,
}

impl TrackGeometry {
    pub fn new(start_position: f64, end_position: f64, point_interval: f64, handle_width: f64) -> Self {
        Self { start_position, end_position, point_interval, handle_width }
    }

    /// Derive the track from container measurements.
    ///
    /// Rejects fewer than two markers (the interval would divide by zero),
    /// a track with no usable width, and a negative or non-finite handle.
    pub fn from_container(metrics: &ContainerMetrics) -> Result<Self, SliderError> {
        if metrics.marker_count < 2 {
            return Err(SliderError::TooFewMarkers { count: metrics.marker_count });
        }
        if !metrics.handle_width.is_finite() || metrics.handle_width < 0.0 {
            return Err(SliderError::InvalidHandleWidth(metrics.handle_width));
        }

        let start = metrics.padding_left;
        let end = metrics.width - metrics.padding_right;
        if !(start.is_finite() && end.is_finite()) || end <= start {
            return Err(SliderError::EmptyTrack { start, end });
        }

        let interval = (end - start) / (metrics.marker_count - 1) as f64;
        Ok(Self::new(start, end, interval, metrics.handle_width))
    }

    fn half_handle(&self) -> f64 {
        self.handle_width / 2.0
    }

    /// Usable track length in pixels.
    pub fn track_width(&self) -> f64 {
        self.end_position - self.start_position
    }

    /// Number of discrete positions the track spans.
    pub fn point_count(&self) -> usize {
        (self.track_width() / self.point_interval).round() as usize + 1
    }

    /// Point value at the end of the track. Equals [`MAX_POINT`] for the
    /// standard eleven markers.
    pub fn max_point(&self) -> f64 {
        self.track_width() / self.point_interval * POINT_STEP
    }

    /// Map a point to a pixel offset.
    ///
    /// `centered == true` gives the point's own coordinate (segment
    /// boundaries). `centered == false` gives the left edge of a handle
    /// centred on that point.
    pub fn point_to_position(&self, point: f64, centered: bool) -> f64 {
        let position = self.start_position + point / POINT_STEP * self.point_interval;
        if centered {
            position
        } else {
            position - self.half_handle()
        }
    }

    /// Inverse of `point_to_position(_, false)`: handle left edge to point.
    pub fn position_to_point(&self, position: f64) -> f64 {
        (position + self.half_handle() - self.start_position) / self.point_interval * POINT_STEP
    }

    /// Keep a handle's centre inside `[start_position, end_position]`.
    pub fn clamp_handle_offset(&self, offset: f64) -> f64 {
        let min = self.start_position - self.half_handle();
        let max = self.end_position - self.half_handle();
        if offset.is_nan() {
            return min;
        }
        offset.clamp(min, max)
    }

    /// Left edges for point markers of the given widths, each centred on
    /// its evenly spaced coordinate.
    pub fn marker_offsets(&self, marker_widths: &[f64]) -> Vec<f64> {
        marker_widths
            .iter()
            .enumerate()
            .map(|(i, w)| self.start_position + i as f64 * self.point_interval - w / 2.0)
            .collect()
    }
}

/// Round a point to the nearest multiple of [`POINT_STEP`].
pub fn snap_to_step(point: f64) -> f64 {
    ((point / POINT_STEP).round() * POINT_STEP).clamp(MIN_POINT, MAX_POINT)
}

//! SegSlider Core — geometry, layout and state for a two-handle segmented slider.
//!
//! The slider splits a track into green, amber and red segments at two
//! control points on a 0..=100 scale:
//! - Track geometry and pixel/point mapping
//! - Pure layout computation (segments + handle offsets)
//! - Stateful `SegmentedSlider` with drag clamping and ordering invariant
//! - Observer seam for change notification
//! - TOML configuration for seeds and track metrics

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod observer;
pub mod slider;

pub use config::{SliderConfig, SliderFile};
pub use error::SliderError;
pub use geometry::{snap_to_step, ContainerMetrics, TrackGeometry, MAX_POINT, MIN_POINT, POINT_STEP};
pub use layout::{compute_layout, Segment, SegmentRect, SliderLayout};
pub use observer::{PointObserver, RecordingObserver};
pub use slider::{DragGesture, Handle, PointChange, SegmentedSlider};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the value types a host may ship across threads
    /// are Send + Sync. The slider itself is not, since observers are
    /// arbitrary closures.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<TrackGeometry>();
        require_sync::<TrackGeometry>();
        require_send::<ContainerMetrics>();
        require_sync::<ContainerMetrics>();
        require_send::<SliderLayout>();
        require_sync::<SliderLayout>();
        require_send::<SliderConfig>();
        require_sync::<SliderConfig>();
        require_send::<PointChange>();
        require_sync::<PointChange>();
        require_send::<SliderError>();
        require_sync::<SliderError>();
    }
}

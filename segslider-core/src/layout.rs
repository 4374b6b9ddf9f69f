//! Pure layout computation: two control points in, five geometry values out.

use serde::{Deserialize, Serialize};

use crate::geometry::TrackGeometry;

/// The three coloured regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Green,
    Amber,
    Red,
}

/// A horizontal region of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRect {
    pub offset: f64,
    pub width: f64,
}

impl SegmentRect {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// Right edge of the region.
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }
}

/// Everything a renderer needs to draw the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderLayout {
    pub green: SegmentRect,
    pub amber: SegmentRect,
    pub red: SegmentRect,
    /// Left edge of the green handle.
    pub green_handle: f64,
    /// Left edge of the amber handle.
    pub amber_handle: f64,
}

impl SliderLayout {
    pub fn rect(&self, segment: Segment) -> SegmentRect {
        match segment {
            Segment::Green => self.green,
            Segment::Amber => self.amber,
            Segment::Red => self.red,
        }
    }

    /// Segment covering track coordinate `x`, or `None` off the track.
    ///
    /// Boundaries belong to the lower segment: green is `[start, g]`,
    /// amber `(g, a]`, red `(a, end]`.
    pub fn segment_at(&self, x: f64) -> Option<Segment> {
        if x < self.green.offset || x > self.red.end() {
            None
        } else if x <= self.green.end() {
            Some(Segment::Green)
        } else if x <= self.amber.end() {
            Some(Segment::Amber)
        } else {
            Some(Segment::Red)
        }
    }
}

/// Compute segments and handle offsets for `(green, amber)`.
///
/// All five values come from the same pair of points, so a renderer that
/// applies the whole layout can never show a half-updated slider.
pub fn compute_layout(green: f64, amber: f64, geometry: &TrackGeometry) -> SliderLayout {
    let start = geometry.start_position;
    let end = geometry.end_position;
    let green_boundary = geometry.point_to_position(green, true);
    let amber_boundary = geometry.point_to_position(amber, true);

    SliderLayout {
        green: SegmentRect::new(start, green_boundary - start),
        amber: SegmentRect::new(green_boundary, amber_boundary - green_boundary),
        red: SegmentRect::new(amber_boundary, end - amber_boundary),
        green_handle: geometry.point_to_position(green, false),
        amber_handle: geometry.point_to_position(amber, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> TrackGeometry {
        TrackGeometry::new(0.0, 200.0, 20.0, 10.0)
    }

    #[test]
    fn default_seed_layout() {
        let l = compute_layout(10.0, 50.0, &geometry());
        assert_eq!(l.green, SegmentRect::new(0.0, 20.0));
        assert_eq!(l.amber, SegmentRect::new(20.0, 80.0));
        assert_eq!(l.red, SegmentRect::new(100.0, 100.0));
        assert_eq!(l.green_handle, 15.0);
        assert_eq!(l.amber_handle, 95.0);
    }

    #[test]
    fn segments_tile_the_track() {
        let g = geometry();
        let l = compute_layout(30.0, 80.0, &g);
        assert_eq!(l.green.offset, g.start_position);
        assert_eq!(l.green.end(), l.amber.offset);
        assert_eq!(l.amber.end(), l.red.offset);
        assert_eq!(l.red.end(), g.end_position);
    }

    #[test]
    fn equal_points_collapse_amber() {
        let l = compute_layout(50.0, 50.0, &geometry());
        assert_eq!(l.green.width, 100.0);
        assert_eq!(l.amber.width, 0.0);
        assert_eq!(l.green_handle, l.amber_handle);
    }

    #[test]
    fn segment_at_assigns_boundaries_low() {
        let l = compute_layout(10.0, 50.0, &geometry());
        assert_eq!(l.segment_at(-1.0), None);
        assert_eq!(l.segment_at(0.0), Some(Segment::Green));
        assert_eq!(l.segment_at(20.0), Some(Segment::Green));
        assert_eq!(l.segment_at(20.5), Some(Segment::Amber));
        assert_eq!(l.segment_at(100.0), Some(Segment::Amber));
        assert_eq!(l.segment_at(150.0), Some(Segment::Red));
        assert_eq!(l.segment_at(200.0), Some(Segment::Red));
        assert_eq!(l.segment_at(200.1), None);
        assert_eq!(l.rect(Segment::Red), l.red);
    }

    #[test]
    fn offset_track() {
        let g = TrackGeometry::new(20.0, 220.0, 20.0, 6.0);
        let l = compute_layout(0.0, 100.0, &g);
        assert_eq!(l.green, SegmentRect::new(20.0, 0.0));
        assert_eq!(l.amber, SegmentRect::new(20.0, 200.0));
        assert_eq!(l.red.width, 0.0);
        assert_eq!(l.green_handle, 17.0);
        assert_eq!(l.amber_handle, 217.0);
    }
}

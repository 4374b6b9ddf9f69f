//! Segmented track widget.
//!
//! Draws a [`SliderLayout`] into four rows: handles, the coloured bar,
//! tick marks and point labels. Each terminal cell is one unit of track
//! coordinate; cell `x` covers `[x, x + 1)` and is coloured by the
//! segment containing its centre.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use segslider_core::{Handle, SliderLayout, TrackGeometry, POINT_STEP};

use crate::theme::Theme;

const BAR: &str = "━";
const TICK: &str = "┴";
const HANDLE: &str = "▼";

pub struct SegmentedTrack<'a> {
    layout: &'a SliderLayout,
    geometry: &'a TrackGeometry,
    active: Handle,
    dragging: bool,
    theme: Theme,
}

impl<'a> SegmentedTrack<'a> {
    pub fn new(layout: &'a SliderLayout, geometry: &'a TrackGeometry) -> Self {
        Self {
            layout,
            geometry,
            active: Handle::Green,
            dragging: false,
            theme: Theme::default(),
        }
    }

    pub fn active(mut self, handle: Handle) -> Self {
        self.active = handle;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Cell column (relative to the widget) holding track coordinate `x`.
    fn cell(x: f64) -> Option<u16> {
        (x >= 0.0).then(|| x.floor() as u16)
    }

    fn handle_style(&self, handle: Handle) -> Style {
        let style = Style::default().fg(self.theme.handle_color(handle));
        if handle == self.active {
            let style = style.add_modifier(Modifier::BOLD);
            if self.dragging {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            }
        } else {
            style
        }
    }
}

impl Widget for SegmentedTrack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row = |i: u16| (i < area.height).then(|| area.y + i);

        // Bar
        if let Some(y) = row(1) {
            for col in 0..area.width {
                let centre = f64::from(col) + 0.5;
                let (symbol, style) = match self.layout.segment_at(centre) {
                    Some(segment) => (BAR, Style::default().fg(self.theme.segment_color(segment))),
                    None => (" ", Style::default().fg(self.theme.muted)),
                };
                buf.set_string(area.x + col, y, symbol, style);
            }
        }

        // Ticks and labels
        let markers = self.geometry.marker_offsets(&vec![1.0; self.geometry.point_count()]);
        let mut label_end = 0u16;
        for (i, left) in markers.iter().enumerate() {
            let Some(col) = Self::cell(left + 0.5).filter(|c| *c < area.width) else {
                continue;
            };
            if let Some(y) = row(2) {
                buf.set_string(area.x + col, y, TICK, Style::default().fg(self.theme.muted));
            }
            if let Some(y) = row(3) {
                let label = format!("{:.0}", i as f64 * POINT_STEP);
                let width = label.len() as u16;
                let start = col.saturating_sub(width / 2);
                if start >= label_end && start + width <= area.width {
                    buf.set_string(
                        area.x + start,
                        y,
                        &label,
                        Style::default().fg(self.theme.text_secondary),
                    );
                    label_end = start + width + 1;
                }
            }
        }

        // Handles, inactive first so the active one wins a shared cell.
        if let Some(y) = row(0) {
            for handle in [self.active.other(), self.active] {
                let left = match handle {
                    Handle::Green => self.layout.green_handle,
                    Handle::Amber => self.layout.amber_handle,
                };
                let centre = left + self.geometry.handle_width / 2.0;
                if let Some(col) = Self::cell(centre).filter(|c| *c < area.width) {
                    buf.set_string(area.x + col, y, HANDLE, self.handle_style(handle));
                }
            }
        }
    }
}

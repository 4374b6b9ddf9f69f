//! Traffic-light theme tokens for the SegSlider TUI.
//!
//! # Color Palette
//! - **Accent**: electric cyan (focus, active handle)
//! - **Green / Amber / Red**: the three track segments
//! - **Muted**: steel blue (ticks, hints, off-track padding)

use ratatui::style::{Color, Modifier, Style};

use segslider_core::{Handle, Segment};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Green segment
    pub green: Color,
    /// Amber segment
    pub amber: Color,
    /// Red segment
    pub red: Color,
    /// Steel blue (ticks, hints)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::traffic_light()
    }
}

impl Theme {
    pub fn traffic_light() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            green: Color::Rgb(0, 200, 83),
            amber: Color::Rgb(255, 176, 0),
            red: Color::Rgb(229, 57, 53),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    pub fn segment_color(&self, segment: Segment) -> Color {
        match segment {
            Segment::Green => self.green,
            Segment::Amber => self.amber,
            Segment::Red => self.red,
        }
    }

    /// A handle is drawn in the colour of the segment it closes.
    pub fn handle_color(&self, handle: Handle) -> Color {
        match handle {
            Handle::Green => self.green,
            Handle::Amber => self.amber,
        }
    }
}

// ── Style helpers ────────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().amber)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().red)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn panel_border() -> Style {
    accent()
}

pub fn panel_title() -> Style {
    accent_bold()
}

//! SegSlider TUI - terminal host for the segmented slider
//!
//! Renders the green/amber/red track with ratatui and drives it with:
//! - Mouse press/drag/release gestures on the handles
//! - Vim-style keys for stepping the active handle
//! - JSON persistence of the last breakpoints

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;

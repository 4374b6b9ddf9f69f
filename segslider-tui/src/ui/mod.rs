//! Top-level UI layout — slider panel, readout, status bar.

pub mod overlays;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use segslider_core::Handle;

use crate::app::{AppState, Overlay};
use crate::theme::{self, Theme};
use widgets::slider::SegmentedTrack;

/// Rows the track widget occupies: handles, bar, ticks, labels.
pub const TRACK_HEIGHT: u16 = 4;

/// Named regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub panel: Rect,
    pub hints: Rect,
    pub track: Rect,
    pub readout: Rect,
    pub status: Rect,
}

/// Split the screen. Pure, so input handling can hit-test against the
/// same rectangles the renderer draws into.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let panel = chunks[0];
    let status = chunks[1];

    let inner = Block::default().borders(Borders::ALL).inner(panel);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(TRACK_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    ScreenLayout {
        panel,
        hints: rows[0],
        track: rows[2],
        readout: rows[4],
        status,
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let screen = screen_layout(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(" SegSlider ")
        .title_style(theme::panel_title());
    f.render_widget(block, screen.panel);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "[drag]move handle [h/l]step [H/L]half step [Tab]switch [s]snap [r]reset [?]help [q]quit",
            theme::muted(),
        ))),
        screen.hints,
    );

    let track = SegmentedTrack::new(app.slider.layout(), app.slider.geometry())
        .active(app.active)
        .dragging(app.drag.is_some())
        .theme(Theme::default());
    f.render_widget(track, app.track_area);

    render_readout(f, screen.readout, app);
    status_bar::render(f, screen.status, app);

    if app.overlay == Overlay::Help {
        overlays::render_help(f, screen.panel);
    }
}

fn render_readout(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = Theme::default();
    let layout = app.slider.layout();

    let point_line = |handle: Handle, value: f64| {
        let marker = if handle == app.active { "▶ " } else { "  " };
        Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(
                format!("{:<6}", handle.label()),
                Style::default().fg(palette.handle_color(handle)),
            ),
            Span::styled(format!("{value:>6.1}"), theme::text()),
        ])
    };

    let lines = vec![
        point_line(Handle::Green, app.slider.green_point()),
        point_line(Handle::Amber, app.slider.amber_point()),
        Line::from(Span::styled(
            format!(
                "  segments  green {:.1}  amber {:.1}  red {:.1}  ({} notifications)",
                layout.green.width,
                layout.amber.width,
                layout.red.width,
                app.notifications.len()
            ),
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

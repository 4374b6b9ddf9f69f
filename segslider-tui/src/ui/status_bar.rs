//! Bottom status bar — last status message and drag state.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let mode = match app.drag {
        Some(drag) => format!(" dragging {}", drag.gesture.handle.label()),
        None => format!(" active: {}", app.active.label()),
    };
    spans.push(Span::styled(mode, theme::muted()));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}

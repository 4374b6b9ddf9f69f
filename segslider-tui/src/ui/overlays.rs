//! Overlay widgets — key help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Mouse");
    key(&mut lines, "click + drag", "Grab the nearest handle and move it");
    key(&mut lines, "release", "End the drag; points stay where they are");
    lines.push(Line::from(""));

    section(&mut lines, "Keyboard");
    key(&mut lines, "Tab", "Switch active handle (green / amber)");
    key(&mut lines, "h / l  ← / →", "Move active handle one step");
    key(&mut lines, "H / L", "Move active handle half a step");
    key(&mut lines, "s", "Snap both points to the nearest step");
    key(&mut lines, "r", "Reset to the configured seeds");
    key(&mut lines, "q / Esc", "Quit (points are saved)");
    lines.push(Line::from(""));

    section(&mut lines, "Rules");
    key(&mut lines, "", "Green can never pass amber, and amber never drops below green");
    key(&mut lines, "", "Handles stop at the ends of the track (0 and 100)");

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

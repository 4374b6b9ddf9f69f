//! Input dispatch — overlays → global keys → slider keys; mouse drags.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Slider keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_active(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge(-1.0),
        KeyCode::Char('l') | KeyCode::Right => app.nudge(1.0),
        KeyCode::Char('H') => app.nudge(-0.5),
        KeyCode::Char('L') => app.nudge(0.5),
        KeyCode::Char('s') => app.snap(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

/// Handle a mouse event: press grabs a handle, drag moves it, release lets go.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.begin_mouse_drag(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.mouse_drag_to(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.end_mouse_drag(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;
    use segslider_core::{Handle, SliderConfig};

    fn app() -> AppState {
        AppState::new(SliderConfig::default(), Rect::new(0, 0, 80, 24)).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('l'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.slider.green_point(), 10.0);
    }

    #[test]
    fn step_keys_move_active_handle() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('l')));
        handle_key(&mut app, press(KeyCode::Char('L')));
        assert_eq!(app.slider.green_point(), 25.0);
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.active, Handle::Amber);
        assert_eq!(app.slider.amber_point(), 40.0);
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.slider.green_point(), 30.0);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.slider.green_point(), 10.0);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn mouse_gesture_drags_green() {
        let mut app = app();
        let row = app.track_area.y;
        let col = app.handle_column(Handle::Green);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), col + 500, row));
        // Green stops at amber.
        assert_eq!(app.slider.green_point(), 50.0);
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), col + 500, row));
        assert!(app.drag.is_none());
    }
}

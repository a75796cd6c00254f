use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::event::Action;
use crate::graph::CanvasGeometry;
use crate::ui::layout::AppLayout;
use crate::ui::toolbar;

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse, app),
        Event::Resize(width, height) => Some(Action::Resize(*width, *height)),
        _ => None,
    }
}

/// Application-level shortcuts. The canvas itself only reacts to the pointer.
fn handle_key_press(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Tab | KeyCode::Right => Some(Action::NextEntity),
        KeyCode::Char('p') | KeyCode::BackTab | KeyCode::Left => Some(Action::PrevEntity),
        KeyCode::Char('+' | '=') => Some(Action::ZoomIn),
        KeyCode::Char('-') => Some(Action::ZoomOut),
        KeyCode::Char('0') => Some(Action::ResetView),
        _ => None,
    }
}

/// Maps mouse input over the toolbar and canvas.
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Option<Action> {
    let layout = AppLayout::new(app.terminal_area);
    let geometry = CanvasGeometry::new(layout.canvas_inner);
    let on_canvas = geometry.to_surface(mouse.column, mouse.row);
    let dragging = app.view.is_dragging();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(button) = toolbar::button_at(layout.toolbar, mouse.column, mouse.row) {
                return Some(button.action());
            }
            on_canvas.map(Action::PointerDown)
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved if dragging => {
            Some(on_canvas.map_or(Action::PointerLeave, Action::PointerMove))
        }
        MouseEventKind::Up(MouseButton::Left) if dragging => Some(Action::PointerUp),
        MouseEventKind::ScrollUp if on_canvas.is_some() => Some(Action::ZoomIn),
        MouseEventKind::ScrollDown if on_canvas.is_some() => Some(Action::ZoomOut),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::StaticDirectory;
    use crate::graph::Point;
    use ratatui::crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;
    use rstest::rstest;

    fn app() -> App {
        App::new(
            Box::new(StaticDirectory::builtin()),
            &AppConfig::default(),
            Rect::new(0, 0, 100, 40),
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn canvas_cell(app: &App) -> (u16, u16) {
        let inner = AppLayout::new(app.terminal_area).canvas_inner;
        (inner.x + inner.width / 2, inner.y + inner.height / 2)
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), Some(Action::Quit))]
    #[case::escape(KeyCode::Esc, Some(Action::Quit))]
    #[case::next(KeyCode::Char('n'), Some(Action::NextEntity))]
    #[case::prev(KeyCode::BackTab, Some(Action::PrevEntity))]
    #[case::zoom_in(KeyCode::Char('+'), Some(Action::ZoomIn))]
    #[case::zoom_out(KeyCode::Char('-'), Some(Action::ZoomOut))]
    #[case::reset(KeyCode::Char('0'), Some(Action::ResetView))]
    #[case::unbound(KeyCode::Char('x'), None)]
    fn test_key_bindings(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        assert_eq!(handle_event(&app(), &key(code)), expected);
    }

    #[test]
    fn test_key_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(&app(), &event), None);
    }

    #[test]
    fn test_press_on_canvas_starts_drag() {
        let app = app();
        let (col, row) = canvas_cell(&app);
        let action = handle_event(&app, &mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert!(matches!(action, Some(Action::PointerDown(_))));
    }

    #[test]
    fn test_press_outside_canvas_ignored() {
        let app = app();
        assert_eq!(
            handle_event(&app, &mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            None
        );
    }

    #[test]
    fn test_drag_moves_then_leaves() {
        let mut app = app();
        let (col, row) = canvas_cell(&app);
        app.update(Action::PointerDown(Point::new(400.0, 300.0)));

        let inside = handle_event(&app, &mouse(MouseEventKind::Drag(MouseButton::Left), col, row));
        assert!(matches!(inside, Some(Action::PointerMove(_))));

        let outside = handle_event(&app, &mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0));
        assert_eq!(outside, Some(Action::PointerLeave));

        let up = handle_event(&app, &mouse(MouseEventKind::Up(MouseButton::Left), col, row));
        assert_eq!(up, Some(Action::PointerUp));
    }

    #[test]
    fn test_drag_without_press_ignored() {
        let app = app();
        let (col, row) = canvas_cell(&app);
        assert_eq!(
            handle_event(&app, &mouse(MouseEventKind::Drag(MouseButton::Left), col, row)),
            None
        );
    }

    #[test]
    fn test_scroll_over_canvas_zooms() {
        let app = app();
        let (col, row) = canvas_cell(&app);
        assert_eq!(
            handle_event(&app, &mouse(MouseEventKind::ScrollUp, col, row)),
            Some(Action::ZoomIn)
        );
        assert_eq!(
            handle_event(&app, &mouse(MouseEventKind::ScrollDown, col, row)),
            Some(Action::ZoomOut)
        );
    }

    #[test]
    fn test_toolbar_buttons_clickable() {
        let app = app();
        let toolbar_area = AppLayout::new(app.terminal_area).toolbar;
        for (button, rect) in toolbar::button_areas(toolbar_area) {
            let event = mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y);
            assert_eq!(handle_event(&app, &event), Some(button.action()));
        }
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            handle_event(&app(), &Event::Resize(90, 30)),
            Some(Action::Resize(90, 30))
        );
    }
}

//! Decoding crossterm events into editor actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pathgrid_core::Grid;

use crate::editor::Action;
use crate::screen::cell_at;

/// Map a terminal event to an action on `grid`, if it means anything.
///
/// Left button press or drag paints, right button press or drag erases.
/// Only key presses count; repeats and releases are dropped.
pub fn to_action(event: &Event, grid: &Grid) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(me) => mouse_action(me, grid),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Run),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Clear),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Scatter),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn mouse_action(me: &MouseEvent, grid: &Grid) -> Option<Action> {
    let button = match me.kind {
        MouseEventKind::Down(b) | MouseEventKind::Drag(b) => b,
        _ => return None,
    };
    let p = cell_at(grid, me.column, me.row)?;
    match button {
        MouseButton::Left => Some(Action::Paint(p)),
        MouseButton::Right => Some(Action::Erase(p)),
        MouseButton::Middle => None,
    }
}

/// Whether `event` asks to stop, used while a search is running.
pub fn is_cancel(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key_action(key) == Some(Action::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::Pos;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        let g = Grid::new(4).unwrap();
        assert_eq!(to_action(&key(KeyCode::Char(' ')), &g), Some(Action::Run));
        assert_eq!(to_action(&key(KeyCode::Enter), &g), Some(Action::Run));
        assert_eq!(to_action(&key(KeyCode::Char('c')), &g), Some(Action::Clear));
        assert_eq!(to_action(&key(KeyCode::Char('r')), &g), Some(Action::Scatter));
        assert_eq!(to_action(&key(KeyCode::Esc), &g), Some(Action::Quit));
        assert_eq!(to_action(&key(KeyCode::Char('x')), &g), None);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(to_action(&ctrl_c, &g), Some(Action::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let g = Grid::new(4).unwrap();
        let mut ev = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(to_action(&Event::Key(ev), &g), None);
    }

    #[test]
    fn mouse_buttons() {
        let g = Grid::new(4).unwrap();
        assert_eq!(
            to_action(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), &g),
            Some(Action::Paint(Pos::new(2, 1)))
        );
        assert_eq!(
            to_action(&mouse(MouseEventKind::Drag(MouseButton::Right), 0, 0), &g),
            Some(Action::Erase(Pos::new(0, 0)))
        );
        assert_eq!(
            to_action(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), &g),
            None
        );
        assert_eq!(to_action(&mouse(MouseEventKind::Moved, 0, 0), &g), None);
    }

    #[test]
    fn clicks_outside_grid_are_dropped() {
        let g = Grid::new(4).unwrap();
        assert_eq!(
            to_action(&mouse(MouseEventKind::Down(MouseButton::Left), 8, 0), &g),
            None
        );
        assert_eq!(
            to_action(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 4), &g),
            None
        );
    }

    #[test]
    fn cancel_keys() {
        assert!(is_cancel(&key(KeyCode::Char('q'))));
        assert!(is_cancel(&key(KeyCode::Esc)));
        assert!(!is_cancel(&key(KeyCode::Char(' '))));
        assert!(!is_cancel(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            0,
            0
        )));
    }
}

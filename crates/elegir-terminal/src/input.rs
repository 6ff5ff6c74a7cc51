//! Translation from crossterm input events to widget events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton as CrosstermMouseButton,
    MouseEvent, MouseEventKind,
};
use elegir_core::{Event, Key, MouseButton, Point};

/// Translate a crossterm event into a widget event.
///
/// Events with no widget-level meaning (focus reports, scroll, unmapped
/// keys) translate to `None`.
#[must_use]
pub fn translate(event: &CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => translate_key(key_event),
        CrosstermEvent::Mouse(mouse_event) => translate_mouse(mouse_event),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: f32::from(*width),
            height: f32::from(*height),
        }),
        _ => None,
    }
}

fn translate_key(event: &KeyEvent) -> Option<Event> {
    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    match event.kind {
        KeyEventKind::Release => Some(Event::KeyUp { key }),
        KeyEventKind::Press | KeyEventKind::Repeat => Some(Event::KeyDown { key }),
    }
}

fn translate_mouse(event: &MouseEvent) -> Option<Event> {
    let position = Point::new(f32::from(event.column), f32::from(event.row));
    match event.kind {
        MouseEventKind::Down(button) => Some(Event::MouseDown {
            position,
            button: translate_button(button),
        }),
        MouseEventKind::Up(button) => Some(Event::MouseUp {
            position,
            button: translate_button(button),
        }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Event::MouseMove { position }),
        _ => None,
    }
}

fn translate_button(button: CrosstermMouseButton) -> MouseButton {
    match button {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            translate(&press(KeyCode::Enter)),
            Some(Event::KeyDown { key: Key::Enter })
        );
        assert_eq!(
            translate(&press(KeyCode::Char(' '))),
            Some(Event::KeyDown { key: Key::Space })
        );
        assert_eq!(
            translate(&press(KeyCode::Char('q'))),
            Some(Event::KeyDown { key: Key::Char('q') })
        );
        assert_eq!(translate(&press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_key_release() {
        let release = CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(
            translate(&release),
            Some(Event::KeyUp { key: Key::Escape })
        );
    }

    #[test]
    fn test_mouse_mapping() {
        let down = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(CrosstermMouseButton::Left),
            column: 5,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(&down),
            Some(Event::MouseDown {
                position: Point::new(5.0, 3.0),
                button: MouseButton::Left,
            })
        );
    }

    #[test]
    fn test_resize_mapping() {
        assert_eq!(
            translate(&CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize {
                width: 80.0,
                height: 24.0,
            })
        );
    }

    #[test]
    fn test_scroll_is_dropped() {
        let scroll = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&scroll), None);
    }
}

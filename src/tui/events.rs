use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Cancel,
    ClearQuery,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Confirm,
    UpdateQuery(char),
    DeleteChar,
    DeleteWord,
    ClearLine,
    Redraw,
    None,
}

/// Block until the next terminal event and convert it to an action
pub fn read_action() -> io::Result<Action> {
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(key_to_action(key)),
        Event::Resize(_, _) => Ok(Action::Redraw),
        _ => Ok(Action::None),
    }
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Abort
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Cancel,
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => Action::Cancel,
        (KeyCode::Esc, _) => Action::ClearQuery,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        (KeyCode::Enter, _) => Action::Confirm,

        // Query editing
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateQuery(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

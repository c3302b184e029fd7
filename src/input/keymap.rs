//! Key mapping from terminal events to keypad buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::buttons::Buttons;

/// Map a keyboard event to the keypad button it stands in for.
pub fn buttons_for_key(key: KeyEvent) -> Buttons {
    match key.code {
        // Left pad
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Buttons::LL,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Buttons::LR,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Buttons::LU,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Buttons::LD,

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Buttons::A
        }
        KeyCode::Backspace | KeyCode::Char('x') | KeyCode::Char('X') => Buttons::B,
        KeyCode::Tab => Buttons::STA,

        _ => Buttons::NONE,
    }
}

/// Check if key should quit the host.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

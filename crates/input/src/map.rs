//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Selection
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Select(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Select(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Select(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Select(Direction::Right))
        }

        // Commit
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Move),

        // Marks
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::ToggleWumpus),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(GameAction::ToggleUnknown),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Keys that steer the selection (arrows and hjkl). Ignored on the game-over
/// screen so a player still steering does not dismiss the result by accident.
pub fn is_navigation_key(key: KeyEvent) -> bool {
    matches!(handle_key_event(key), Some(GameAction::Select(_)))
}

//! Mapping from pointer clicks and key characters to game actions.

use crate::layout::Layout;
use crate::types::GameAction;

/// Map a click at pixel (px, py) to a cell action. Clicks off the board map to nothing.
pub fn map_click(layout: &Layout, px: f32, py: f32) -> Option<GameAction> {
    layout.cell_at(px, py).map(GameAction::ClickCell)
}

/// Map a key character to a game action.
pub fn map_key(key: char) -> Option<GameAction> {
    match key {
        'r' | 'R' => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if a key character should quit the game (Escape or q).
pub fn should_quit(key: char) -> bool {
    matches!(key, 'q' | 'Q' | '\u{1b}')
}

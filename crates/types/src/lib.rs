//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, headless runners).
//!
//! # Board Dimensions
//!
//! The default board is a 10x10 grid:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `HIGHLIGHT_MS` | 300 | Steady highlight of condemned pieces |
//! | `FAST_BLINK_MS` | 1000 | Fast blink phase before removal |
//! | `FAST_BLINK_TOGGLE_MS` | 150 | Blink toggle period during fast blink |
//! | `SELECTION_BLINK_MS` | 250 | Blink toggle period of the selected piece |
//! | `FLOATING_SCORE_TTL_MS` | 2000 | Lifetime of a floating score popup |
//!
//! # Scoring
//!
//! Every removed piece is worth `POINTS_PER_PIECE x combo`. A removal pass of
//! `n >= MIN_LINE_LENGTH` pieces earns an extra `(n - 2) x LENGTH_BONUS x combo`.
//!
//! # Examples
//!
//! ```
//! use lines_types::{Coord, GameAction, PieceColor, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let color = PieceColor::from_str("purple").unwrap();
//! assert_eq!(color, PieceColor::Purple);
//! assert_eq!(PieceColor::from_code(color.code()), Some(color));
//!
//! let action = GameAction::ClickCell(Coord::new(3, 4));
//! assert_eq!(action.as_str(), "clickCell");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 10);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (10 rows)
pub const BOARD_HEIGHT: u8 = 10;

/// Largest supported board side
pub const MAX_BOARD_SIDE: u8 = 64;

/// Smallest supported board side
pub const MIN_BOARD_SIDE: u8 = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Highlight phase duration (steady, fully visible)
pub const HIGHLIGHT_MS: u32 = 300;

/// Fast blink phase duration
pub const FAST_BLINK_MS: u32 = 1000;

/// Visibility toggle period inside the fast blink phase
pub const FAST_BLINK_TOGGLE_MS: u32 = 150;

/// Visibility toggle period of the selected piece
pub const SELECTION_BLINK_MS: u32 = 250;

/// Floating score popups are pruned once they reach this age
pub const FLOATING_SCORE_TTL_MS: u32 = 2000;

/// Minimum run length that counts as a line
pub const MIN_LINE_LENGTH: u8 = 3;

/// Pieces committed per spawn, and the size of the lookahead queue
pub const SPAWN_COUNT: usize = 2;

/// Pieces placed on a fresh board
pub const INITIAL_PIECES: u8 = 5;

/// Base points per removed piece (multiplied by combo)
pub const POINTS_PER_PIECE: u32 = 10;

/// Length bonus per piece beyond two (multiplied by combo)
pub const LENGTH_BONUS: u32 = 30;

/// The six piece colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl PieceColor {
    pub const ALL: [PieceColor; 6] = [
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Yellow,
        PieceColor::Purple,
        PieceColor::Orange,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lines_types::PieceColor;
    ///
    /// assert_eq!(PieceColor::from_str("RED"), Some(PieceColor::Red));
    /// assert_eq!(PieceColor::from_str("orange"), Some(PieceColor::Orange));
    /// assert_eq!(PieceColor::from_str("cyan"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(PieceColor::Red),
            "green" => Some(PieceColor::Green),
            "blue" => Some(PieceColor::Blue),
            "yellow" => Some(PieceColor::Yellow),
            "purple" => Some(PieceColor::Purple),
            "orange" => Some(PieceColor::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Green => "green",
            PieceColor::Blue => "blue",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Orange => "orange",
        }
    }

    /// Stable numeric code (1-6). Code 0 is reserved for an empty cell.
    pub fn code(&self) -> u8 {
        match self {
            PieceColor::Red => 1,
            PieceColor::Green => 2,
            PieceColor::Blue => 3,
            PieceColor::Yellow => 4,
            PieceColor::Purple => 5,
            PieceColor::Orange => 6,
        }
    }

    /// Inverse of [`PieceColor::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Grid coordinate. Signed so callers can express (and be refused for)
/// positions off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Step by (dx, dy), clamping at the `i16` range
    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan distance, the lower bound for any path between two cells
    pub fn manhattan(self, other: Coord) -> u32 {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        dx + dy
    }
}

impl From<(i16, i16)> for Coord {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Cell holding a piece of that color
pub type Cell = Option<PieceColor>;

/// Phases of the removal animation
///
/// The cycle always runs Highlight → FastBlink → Remove; Remove is
/// instantaneous and either restarts at Highlight (chain reaction) or ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    Highlight,
    FastBlink,
    Remove,
}

impl AnimationPhase {
    /// Phase that follows this one inside a single cycle
    pub fn next(&self) -> Self {
        match self {
            AnimationPhase::Highlight => AnimationPhase::FastBlink,
            AnimationPhase::FastBlink => AnimationPhase::Remove,
            AnimationPhase::Remove => AnimationPhase::Remove,
        }
    }

    /// Duration of the phase in milliseconds (0 for the instantaneous Remove)
    pub fn duration_ms(&self) -> u32 {
        match self {
            AnimationPhase::Highlight => HIGHLIGHT_MS,
            AnimationPhase::FastBlink => FAST_BLINK_MS,
            AnimationPhase::Remove => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationPhase::Highlight => "highlight",
            AnimationPhase::FastBlink => "fastBlink",
            AnimationPhase::Remove => "remove",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are used by both pointer input and automated players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Click a board cell: select, deselect, or move the selected piece there
    ClickCell(Coord),
    /// Reinitialize the board, score and queue
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::ClickCell(_) => "clickCell",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(HIGHLIGHT_MS, 300);
        assert_eq!(FAST_BLINK_MS, 1000);
        assert_eq!(FAST_BLINK_TOGGLE_MS, 150);
        assert_eq!(FLOATING_SCORE_TTL_MS, 2000);
        assert_eq!(SPAWN_COUNT, 2);
    }

    #[test]
    fn color_codes_roundtrip() {
        for color in PieceColor::ALL {
            assert_eq!(PieceColor::from_code(color.code()), Some(color));
            assert_eq!(PieceColor::from_str(color.as_str()), Some(color));
        }
        assert_eq!(PieceColor::from_code(0), None);
        assert_eq!(PieceColor::from_code(7), None);
    }

    #[test]
    fn phase_order() {
        assert_eq!(AnimationPhase::Highlight.next(), AnimationPhase::FastBlink);
        assert_eq!(AnimationPhase::FastBlink.next(), AnimationPhase::Remove);
        assert_eq!(AnimationPhase::Remove.duration_ms(), 0);
    }

    #[test]
    fn coord_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, 4)), 7);
        assert_eq!(Coord::new(2, 2).offset(-1, 1), Coord::new(1, 3));
        assert_eq!(Coord::new(i16::MAX, 0).offset(1, 0), Coord::new(i16::MAX, 0));
        assert_eq!(Coord::new(i16::MIN, 0).offset(0, -1), Coord::new(i16::MIN, -1));
        assert_eq!(
            Coord::new(i16::MIN, 0).manhattan(Coord::new(i16::MAX, 0)),
            u16::MAX as u32
        );
    }
}

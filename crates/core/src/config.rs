//! Game configuration and validation

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, INITIAL_PIECES, MAX_BOARD_SIDE, MIN_BOARD_SIDE, MIN_LINE_LENGTH,
};

/// Errors produced when validating a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {width}x{height} is outside {min}..={max} per side")]
    BoardSize {
        width: u8,
        height: u8,
        min: u8,
        max: u8,
    },

    #[error("minimum line length {len} must be between {min} and {max}")]
    LineLength { len: u8, min: u8, max: u8 },

    #[error("{pieces} initial pieces do not fit on a board of {cells} cells")]
    InitialPieces { pieces: u8, cells: usize },

    #[error("grid is {actual_w}x{actual_h} but the config asks for {width}x{height}")]
    GridMismatch {
        width: u8,
        height: u8,
        actual_w: u8,
        actual_h: u8,
    },
}

/// Tunables of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Shortest run that counts as a line
    pub min_line_length: u8,
    /// Pieces scattered on a fresh board
    pub initial_pieces: u8,
    pub seed: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |s: u8| (MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&s);
        if !side_ok(self.width) || !side_ok(self.height) {
            return Err(ConfigError::BoardSize {
                width: self.width,
                height: self.height,
                min: MIN_BOARD_SIDE,
                max: MAX_BOARD_SIDE,
            });
        }

        let longest = self.width.max(self.height);
        if self.min_line_length < MIN_LINE_LENGTH || self.min_line_length > longest {
            return Err(ConfigError::LineLength {
                len: self.min_line_length,
                min: MIN_LINE_LENGTH,
                max: longest,
            });
        }

        let cells = self.width as usize * self.height as usize;
        if self.initial_pieces as usize > cells {
            return Err(ConfigError::InitialPieces {
                pieces: self.initial_pieces,
                cells,
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            min_line_length: MIN_LINE_LENGTH,
            initial_pieces: INITIAL_PIECES,
            seed: 1,
        }
    }
}

//! Board placement on screen, in pixels.

use crate::types::{Coord, BOARD_HEIGHT, BOARD_WIDTH};

/// Default cell edge in pixels
pub const DEFAULT_CELL_SIZE: f32 = 50.0;

/// Default distance from the window's left edge to the board
pub const DEFAULT_OFFSET_X: f32 = 100.0;

/// Default distance from the window's top edge to the board
pub const DEFAULT_OFFSET_Y: f32 = 50.0;

/// Where the board sits on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: u8,
    pub height: u8,
}

impl Layout {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Cell under the pixel (px, py), or None outside the board
    pub fn cell_at(&self, px: f32, py: f32) -> Option<Coord> {
        if !px.is_finite() || !py.is_finite() || self.cell_size <= 0.0 {
            return None;
        }
        let fx = ((px - self.offset_x) / self.cell_size).floor();
        let fy = ((py - self.offset_y) / self.cell_size).floor();
        if fx < 0.0 || fy < 0.0 || fx >= self.width as f32 || fy >= self.height as f32 {
            return None;
        }
        Some(Coord::new(fx as i16, fy as i16))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, c: Coord) -> (f32, f32) {
        (
            self.offset_x + c.x as f32 * self.cell_size,
            self.offset_y + c.y as f32 * self.cell_size,
        )
    }

    /// Center pixel of a cell, where floating scores are anchored
    pub fn cell_center(&self, c: Coord) -> (f32, f32) {
        let (x, y) = self.cell_origin(c);
        (x + self.cell_size / 2.0, y + self.cell_size / 2.0)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

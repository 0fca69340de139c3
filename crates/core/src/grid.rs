//! Grid module - cell occupancy and piece colors
//!
//! The grid is a `width x height` board where each cell is empty or holds one piece.
//! Uses a flat row-major buffer allocated once at construction; its size never changes.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Every accessor is bounds-checked; off-board coordinates are rejected, never clamped.

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, PieceColor};

/// 4-connected neighbor offsets (right, left, down, up)
pub const NEIGHBORS_4: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The playing grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    pub(crate) fn index(&self, c: Coord) -> Option<usize> {
        if !self.is_valid(c) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }

    /// Coordinate of a flat index (inverse of `index`)
    #[inline]
    pub(crate) fn coord_of(&self, idx: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((idx % w) as i16, (idx / w) as i16)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty_grid(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Check if a coordinate lies on the board
    pub fn is_valid(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width as i16 && c.y < self.height as i16
    }

    /// Get cell at a coordinate. Returns None if out of bounds.
    pub fn get(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// Color of the piece at `c`, if any
    pub fn color_at(&self, c: Coord) -> Option<PieceColor> {
        self.get(c).flatten()
    }

    /// True if `c` is on the board and empty
    pub fn is_empty(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(None))
    }

    /// True if `c` is on the board and holds a piece
    pub fn is_occupied(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(Some(_)))
    }

    /// Place a piece, overwriting whatever was there.
    /// Returns false (and changes nothing) if out of bounds.
    pub fn place_piece(&mut self, c: Coord, color: PieceColor) -> bool {
        match self.index(c) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                true
            }
            None => false,
        }
    }

    /// Clear a cell, returning the piece that was there
    pub fn remove_piece(&mut self, c: Coord) -> Option<PieceColor> {
        let idx = self.index(c)?;
        self.cells[idx].take()
    }

    /// Move the piece at `from` to `to`. Both must be valid, `from` occupied, `to` empty.
    pub(crate) fn move_piece(&mut self, from: Coord, to: Coord) -> bool {
        if !self.is_occupied(from) || !self.is_empty(to) {
            return false;
        }
        let color = self.remove_piece(from);
        match color {
            Some(color) => self.place_piece(to, color),
            None => false,
        }
    }

    /// In-bounds 4-neighbors of `c`
    pub fn neighbors(&self, c: Coord) -> ArrayVec<Coord, 4> {
        if !self.is_valid(c) {
            return ArrayVec::new();
        }
        NEIGHBORS_4
            .iter()
            .map(|&(dx, dy)| c.offset(dx, dy))
            .filter(|n| self.is_valid(*n))
            .collect()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| self.coord_of(idx))
            .collect()
    }

    /// Occupied cells in row-major order
    pub fn occupied_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(idx, _)| self.coord_of(idx))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn count_occupied(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write color codes (0 = empty) into `out`, row-major
    pub fn write_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.map_or(0, |color| color.code())));
    }

    /// Build a grid from rows of color codes (0 = empty). Rows must be equally long.
    ///
    /// Returns None on ragged input, unknown codes, or sides above `u8::MAX`.
    pub fn from_codes(rows: &[&[u8]]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first().map_or(0, |r| r.len())).ok()?;
        let mut grid = Grid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width as usize {
                return None;
            }
            for (x, &code) in row.iter().enumerate() {
                if code == 0 {
                    continue;
                }
                let color = PieceColor::from_code(code)?;
                grid.place_piece(Coord::new(x as i16, y as i16), color);
            }
        }
        Some(grid)
    }
}

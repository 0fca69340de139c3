//! Line detection - same-colored runs along four axes
//!
//! The scan walks cells in row-major order. Each occupied, not-yet-claimed cell
//! seeds a search in every direction of [`DIRECTIONS`]; the run is extended both
//! ways from the seed. Runs of at least the minimum length become lines and
//! claim their cells, so no line is reported twice. A claimed cell can still be
//! part of a later line in another direction (L/T/X shapes report each arm).

use crate::grid::Grid;
use crate::types::{Coord, PieceColor};

/// Probe directions: horizontal, vertical, diagonal, anti-diagonal
pub const DIRECTIONS: [(i16, i16); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// A qualifying run of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub color: PieceColor,
    /// Cells from the backward end to the forward end of the run
    pub cells: Vec<Coord>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }
}

/// Find every line of at least `min_len` pieces
pub fn find_all_lines(grid: &Grid, min_len: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut visited = vec![false; grid.len()];

    for idx in 0..grid.len() {
        if visited[idx] {
            continue;
        }
        let seed = grid.coord_of(idx);
        let Some(color) = grid.color_at(seed) else {
            continue;
        };

        for (dx, dy) in DIRECTIONS {
            let cells = run_through(grid, seed, color, dx, dy);
            if cells.len() < min_len {
                continue;
            }
            for &c in &cells {
                if let Some(i) = grid.index(c) {
                    visited[i] = true;
                }
            }
            lines.push(Line { color, cells });
        }
    }

    lines
}

/// Contiguous run of `color` through `seed` along (dx, dy), backward end first
fn run_through(grid: &Grid, seed: Coord, color: PieceColor, dx: i16, dy: i16) -> Vec<Coord> {
    let mut start = seed;
    while grid.color_at(start.offset(-dx, -dy)) == Some(color) {
        start = start.offset(-dx, -dy);
    }

    let mut cells = Vec::new();
    let mut cur = start;
    while grid.color_at(cur) == Some(color) {
        cells.push(cur);
        cur = cur.offset(dx, dy);
    }
    cells
}

/// Boolean mask of cells condemned for removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMask {
    width: u8,
    marks: Vec<bool>,
}

impl LineMask {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            marks: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if c.x < 0 || c.y < 0 || c.x >= self.width as i16 {
            return None;
        }
        let idx = c.y as usize * self.width as usize + c.x as usize;
        (idx < self.marks.len()).then_some(idx)
    }

    /// Replace the mask contents with the cells of `lines`
    pub fn mark_lines(&mut self, lines: &[Line]) {
        self.clear();
        for line in lines {
            for &c in &line.cells {
                if let Some(idx) = self.index(c) {
                    self.marks[idx] = true;
                }
            }
        }
    }

    pub fn is_marked(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|idx| self.marks[idx])
    }

    pub fn clear(&mut self) {
        for m in &mut self.marks {
            *m = false;
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.marks.iter().any(|&m| m)
    }

    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// Marked cells in row-major order
    pub fn marked(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width as usize;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(idx, _)| Coord::new((idx % w) as i16, (idx / w) as i16))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.marks
    }
}

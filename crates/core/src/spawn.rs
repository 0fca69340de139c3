//! Spawn module - committing the lookahead to the board and game-over detection

use arrayvec::ArrayVec;
use tracing::debug;

use crate::grid::Grid;
use crate::rng::ColorQueue;
use crate::types::{Coord, PieceColor, SPAWN_COUNT};

/// Result of a spawn attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Pieces committed, in placement order
    Placed(ArrayVec<(Coord, PieceColor), SPAWN_COUNT>),
    /// The board had no empty cell
    NoRoom,
}

impl SpawnOutcome {
    pub fn placed(&self) -> &[(Coord, PieceColor)] {
        match self {
            SpawnOutcome::Placed(p) => p,
            SpawnOutcome::NoRoom => &[],
        }
    }
}

/// Lookahead queue plus random placement
#[derive(Debug, Clone)]
pub struct Spawner {
    queue: ColorQueue,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            queue: ColorQueue::new(seed),
        }
    }

    pub fn lookahead(&self) -> &[PieceColor; SPAWN_COUNT] {
        self.queue.peek()
    }

    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    /// Commit the lookahead onto random empty cells.
    ///
    /// Places `min(SPAWN_COUNT, empty cells)` pieces and regenerates the lookahead.
    pub fn add_new_pieces(&mut self, grid: &mut Grid) -> SpawnOutcome {
        let mut empties = grid.empty_cells();
        if empties.is_empty() {
            return SpawnOutcome::NoRoom;
        }

        let count = SPAWN_COUNT.min(empties.len());
        self.queue.rng_mut().shuffle(&mut empties);
        let colors = self.queue.take();

        let mut placed = ArrayVec::new();
        for (&c, &color) in empties.iter().zip(colors.iter()).take(count) {
            grid.place_piece(c, color);
            placed.push((c, color));
        }
        debug!(count, ?placed, "spawned pieces");
        SpawnOutcome::Placed(placed)
    }

    /// Place `n` random colors on random empty cells, leaving the lookahead untouched.
    /// Returns how many were placed.
    pub fn scatter(&mut self, grid: &mut Grid, n: usize) -> usize {
        let mut empties = grid.empty_cells();
        let rng = self.queue.rng_mut();
        rng.shuffle(&mut empties);
        let count = n.min(empties.len());
        for &c in &empties[..count] {
            let color = rng.next_color();
            grid.place_piece(c, color);
        }
        count
    }
}

/// True if at least one piece has a legal destination.
///
/// A piece reaches some empty cell exactly when one of its 4-neighbors is
/// empty, so this matches trying `can_move` from every piece to every empty
/// cell without running a search per pair.
pub fn any_move_available(grid: &Grid) -> bool {
    grid.occupied_cells()
        .into_iter()
        .any(|c| grid.neighbors(c).iter().any(|&n| grid.is_empty(n)))
}

/// Game-over rule: fewer than `SPAWN_COUNT` empty cells, or pieces on the
/// board and none of them can move. An empty board is never over.
pub fn is_game_over(grid: &Grid) -> bool {
    if grid.count_empty() < SPAWN_COUNT {
        return true;
    }
    grid.count_occupied() > 0 && !any_move_available(grid)
}

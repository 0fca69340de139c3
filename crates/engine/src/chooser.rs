//! Greedy automatic player.

use crate::core::lines::DIRECTIONS;
use crate::core::{reachable_from, GameState, Grid};
use crate::types::{Coord, PieceColor};

/// Every (from, to) pair the current board allows, in scan order
pub fn legal_moves(state: &GameState) -> Vec<(Coord, Coord)> {
    if !state.accepts_input() {
        return Vec::new();
    }
    let grid = state.grid();
    grid.occupied_cells()
        .into_iter()
        .flat_map(|from| {
            reachable_from(grid, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Pick the move that builds the longest same-color run through its target.
/// Ties go to the earliest move in scan order.
pub fn choose_move(state: &GameState) -> Option<(Coord, Coord)> {
    let grid = state.grid();
    let mut best: Option<((Coord, Coord), usize)> = None;

    for (from, to) in legal_moves(state) {
        let Some(color) = grid.color_at(from) else {
            continue;
        };
        let value = DIRECTIONS
            .iter()
            .map(|&(dx, dy)| run_after_move(grid, from, to, color, dx, dy))
            .max()
            .unwrap_or(1);
        if best.map_or(true, |(_, v)| value > v) {
            best = Some(((from, to), value));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Length of the `color` run through `to` along (dx, dy) once `from` is vacated
fn run_after_move(grid: &Grid, from: Coord, to: Coord, color: PieceColor, dx: i16, dy: i16) -> usize {
    let same = |c: Coord| c != from && grid.color_at(c) == Some(color);
    let mut len = 1;
    for (sx, sy) in [(dx, dy), (-dx, -dy)] {
        let mut cur = to.offset(sx, sy);
        while same(cur) {
            len += 1;
            cur = cur.offset(sx, sy);
        }
    }
    len
}

/// Tick until the removal animation (and any chain) has finished.
/// Gives up after `max_ticks`; returns the ticks spent.
pub fn settle(state: &mut GameState, tick_ms: u32, max_ticks: u32) -> u32 {
    let mut ticks = 0;
    while state.is_animating() && ticks < max_ticks {
        state.tick(tick_ms);
        ticks += 1;
    }
    ticks
}

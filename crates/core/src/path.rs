//! Path module - breadth-first move validation
//!
//! A piece may travel through 4-connected empty cells. The origin cell itself is
//! traversable (it is vacated by the move). BFS yields a shortest path in hops.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::Coord;

/// Find a shortest path from `from` to `to`, both inclusive.
///
/// Returns an empty vector if either endpoint is off the board, if `to` is
/// occupied, or if no route exists.
pub fn find_path(grid: &Grid, from: Coord, to: Coord) -> Vec<Coord> {
    let (Some(start), Some(goal)) = (grid.index(from), grid.index(to)) else {
        return Vec::new();
    };
    if !grid.is_empty(to) {
        return Vec::new();
    }
    if start == goal {
        return vec![from];
    }

    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        for next in grid.neighbors(cur) {
            let Some(idx) = grid.index(next) else {
                continue;
            };
            if seen[idx] || !(idx == start || grid.is_empty(next)) {
                continue;
            }
            seen[idx] = true;
            parent[idx] = grid.index(cur);
            if idx == goal {
                return rebuild(grid, &parent, goal);
            }
            queue.push_back(next);
        }
    }

    Vec::new()
}

/// Walk parent links back from `goal` and reverse into from-to order
fn rebuild(grid: &Grid, parent: &[Option<usize>], goal: usize) -> Vec<Coord> {
    let mut path = vec![grid.coord_of(goal)];
    let mut cur = goal;
    while let Some(prev) = parent[cur] {
        path.push(grid.coord_of(prev));
        cur = prev;
    }
    path.reverse();
    path
}

/// True if the piece at `from` could travel to `to`
pub fn can_move(grid: &Grid, from: Coord, to: Coord) -> bool {
    !find_path(grid, from, to).is_empty()
}

/// Every empty cell reachable from `from` (flood fill, row-major order).
///
/// Equivalent to testing `can_move(from, e)` for each empty `e`, in one pass.
pub fn reachable_from(grid: &Grid, from: Coord) -> Vec<Coord> {
    let Some(start) = grid.index(from) else {
        return Vec::new();
    };

    let mut seen = vec![false; grid.len()];
    let mut stack = vec![from];
    seen[start] = true;

    while let Some(cur) = stack.pop() {
        for next in grid.neighbors(cur) {
            if let Some(idx) = grid.index(next) {
                if !seen[idx] && grid.is_empty(next) {
                    seen[idx] = true;
                    stack.push(next);
                }
            }
        }
    }

    seen[start] = grid.is_empty(from);
    seen.iter()
        .enumerate()
        .filter(|(_, s)| **s)
        .map(|(idx, _)| grid.coord_of(idx))
        .collect()
}

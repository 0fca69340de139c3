//! Path tests - shortest routes and blocked targets

use lines_game::core::{can_move, find_path, reachable_from, Grid};
use lines_game::types::{Coord, PieceColor};

fn assert_connected(path: &[Coord], grid: &Grid) {
    for pair in path.windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1, "path must step orthogonally");
    }
    for &c in &path[1..] {
        assert!(grid.is_empty(c), "path crosses occupied cell {:?}", c);
    }
}

#[test]
fn test_open_board_path_is_manhattan() {
    let mut grid = Grid::new(10, 10);
    let from = Coord::new(0, 0);
    let to = Coord::new(4, 3);
    grid.place_piece(from, PieceColor::Red);

    let path = find_path(&grid, from, to);
    assert_eq!(path.first(), Some(&from));
    assert_eq!(path.last(), Some(&to));
    assert_eq!(path.len() as u32 - 1, from.manhattan(to));
    assert_connected(&path, &grid);
}

#[test]
fn test_path_goes_around_wall() {
    let mut grid = Grid::new(10, 10);
    // Vertical wall at x = 5 with a single gap at the bottom.
    for y in 0..9 {
        grid.place_piece(Coord::new(5, y), PieceColor::Blue);
    }
    let from = Coord::new(4, 0);
    let to = Coord::new(6, 0);
    grid.place_piece(from, PieceColor::Red);

    let path = find_path(&grid, from, to);
    // Down 9, across 2, up 9.
    assert_eq!(path.len(), 21);
    assert!(path.contains(&Coord::new(5, 9)));
    assert_connected(&path, &grid);
}

#[test]
fn test_enclosed_target_has_no_path() {
    let mut grid = Grid::new(10, 10);
    let target = Coord::new(5, 5);
    for c in [
        Coord::new(4, 5),
        Coord::new(6, 5),
        Coord::new(5, 4),
        Coord::new(5, 6),
    ] {
        grid.place_piece(c, PieceColor::Green);
    }
    let from = Coord::new(0, 0);
    grid.place_piece(from, PieceColor::Red);

    assert!(find_path(&grid, from, target).is_empty());
    assert!(!can_move(&grid, from, target));
}

#[test]
fn test_occupied_or_invalid_target() {
    let mut grid = Grid::new(10, 10);
    grid.place_piece(Coord::new(0, 0), PieceColor::Red);
    grid.place_piece(Coord::new(3, 3), PieceColor::Red);

    assert!(find_path(&grid, Coord::new(0, 0), Coord::new(3, 3)).is_empty());
    assert!(find_path(&grid, Coord::new(0, 0), Coord::new(-1, 3)).is_empty());
    assert!(find_path(&grid, Coord::new(0, 0), Coord::new(10, 3)).is_empty());
}

#[test]
fn test_reachable_region() {
    let mut grid = Grid::new(5, 5);
    // Seal the top-left 2x2 corner.
    for c in [
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(0, 2),
        Coord::new(1, 2),
    ] {
        grid.place_piece(c, PieceColor::Yellow);
    }
    grid.place_piece(Coord::new(0, 0), PieceColor::Red);

    let reach = reachable_from(&grid, Coord::new(0, 0));
    assert_eq!(
        reach,
        vec![Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
    );
    for c in reach {
        assert!(can_move(&grid, Coord::new(0, 0), c));
    }
}

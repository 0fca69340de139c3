//! Grid tests - bounds, placement and cell queries

use lines_game::core::{find_path, reachable_from, Grid};
use lines_game::types::{Coord, PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);
    assert!(grid.is_empty_grid());

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            let c = Coord::new(x, y);
            assert!(grid.is_valid(c), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(grid.get(c), Some(None));
        }
    }
}

#[test]
fn test_out_of_bounds_is_a_no_op() {
    let mut grid = Grid::new(10, 10);

    for c in [Coord::new(-1, 0), Coord::new(0, -1), Coord::new(10, 0), Coord::new(0, 10)] {
        assert!(!grid.is_valid(c));
        assert_eq!(grid.get(c), None);
        assert!(!grid.place_piece(c, PieceColor::Red));
        assert_eq!(grid.remove_piece(c), None);
        // Off-board cells are neither empty nor occupied.
        assert!(!grid.is_empty(c));
        assert!(!grid.is_occupied(c));
    }
    assert!(grid.is_empty_grid());
}

#[test]
fn test_extreme_coordinates_are_ignored() {
    let mut grid = Grid::new(10, 10);
    grid.place_piece(Coord::new(0, 0), PieceColor::Red);

    for c in [
        Coord::new(i16::MAX, 0),
        Coord::new(0, i16::MAX),
        Coord::new(i16::MIN, 0),
        Coord::new(i16::MIN, i16::MAX),
    ] {
        assert!(grid.neighbors(c).is_empty());
        assert_eq!(grid.get(c), None);
        assert!(!grid.place_piece(c, PieceColor::Red));
        assert!(find_path(&grid, Coord::new(0, 0), c).is_empty());
        assert!(reachable_from(&grid, c).is_empty());
    }
    assert_eq!(grid.count_occupied(), 1);
}

#[test]
fn test_place_and_remove() {
    let mut grid = Grid::new(10, 10);
    let c = Coord::new(4, 7);

    assert!(grid.place_piece(c, PieceColor::Orange));
    assert!(grid.is_occupied(c));
    assert_eq!(grid.color_at(c), Some(PieceColor::Orange));
    assert_eq!(grid.count_occupied(), 1);
    assert_eq!(grid.count_empty(), 99);

    assert_eq!(grid.remove_piece(c), Some(PieceColor::Orange));
    assert!(grid.is_empty(c));
    assert_eq!(grid.remove_piece(c), None);
}

#[test]
fn test_neighbors_clip_at_edges() {
    let grid = Grid::new(10, 10);
    assert_eq!(grid.neighbors(Coord::new(0, 0)).len(), 2);
    assert_eq!(grid.neighbors(Coord::new(9, 5)).len(), 3);
    assert_eq!(grid.neighbors(Coord::new(4, 4)).len(), 4);
}

#[test]
fn test_cell_lists_are_row_major() {
    let mut grid = Grid::new(4, 3);
    grid.place_piece(Coord::new(3, 0), PieceColor::Red);
    grid.place_piece(Coord::new(0, 2), PieceColor::Blue);
    grid.place_piece(Coord::new(1, 1), PieceColor::Green);

    assert_eq!(
        grid.occupied_cells(),
        vec![Coord::new(3, 0), Coord::new(1, 1), Coord::new(0, 2)]
    );
    assert_eq!(grid.empty_cells().len(), 9);
    assert_eq!(grid.empty_cells()[0], Coord::new(0, 0));

    grid.clear();
    assert!(grid.is_empty_grid());
}

#[test]
fn test_from_codes() {
    let grid = Grid::from_codes(&[&[1, 0, 0], &[0, 2, 0], &[0, 0, 6]]).unwrap();
    assert_eq!(grid.color_at(Coord::new(0, 0)), Some(PieceColor::Red));
    assert_eq!(grid.color_at(Coord::new(1, 1)), Some(PieceColor::Green));
    assert_eq!(grid.color_at(Coord::new(2, 2)), Some(PieceColor::Orange));
    assert_eq!(grid.count_occupied(), 3);

    let mut codes = Vec::new();
    grid.write_codes(&mut codes);
    assert_eq!(codes, vec![1, 0, 0, 0, 2, 0, 0, 0, 6]);

    assert!(Grid::from_codes(&[&[1, 0], &[0]]).is_none());
    assert!(Grid::from_codes(&[&[7, 0], &[0, 0]]).is_none());
}

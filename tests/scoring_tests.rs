//! Scoring tests - per-piece points, length bonus, combo and popups

use lines_game::core::{calculate_score, find_all_lines, Grid, LineMask, ScoreKeeper};
use lines_game::types::{Coord, PieceColor, FLOATING_SCORE_TTL_MS, MIN_LINE_LENGTH};

fn red_row(grid: &mut Grid, y: i16, len: i16) {
    for x in 0..len {
        grid.place_piece(Coord::new(x, y), PieceColor::Red);
    }
}

fn mask_for(grid: &Grid) -> LineMask {
    let mut mask = LineMask::new(grid.width(), grid.height());
    mask.mark_lines(&find_all_lines(grid, MIN_LINE_LENGTH as usize));
    mask
}

#[test]
fn test_score_table() {
    assert_eq!(calculate_score(3, 1).total, 60);
    assert_eq!(calculate_score(4, 1).total, 100);
    assert_eq!(calculate_score(5, 1).total, 140);
    assert_eq!(calculate_score(3, 2).total, 120);
    assert_eq!(calculate_score(0, 4).total, 0);
}

#[test]
fn test_five_red_row() {
    let mut grid = Grid::new(10, 10);
    red_row(&mut grid, 0, 5);

    let lines = find_all_lines(&grid, MIN_LINE_LENGTH as usize);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 5);
    assert_eq!(lines[0].color, PieceColor::Red);

    let mut keeper = ScoreKeeper::new();
    let mask = mask_for(&grid);
    let result = keeper.remove_marked_and_score(&mut grid, &mask);
    assert_eq!(result.removed, 5);
    assert_eq!(result.piece_points, 50);
    assert_eq!(result.length_bonus, 90);
    assert_eq!(keeper.score(), 140);
    assert_eq!(keeper.combo(), 2);
    assert!(grid.is_empty_grid());
}

#[test]
fn test_combo_grows_per_pass_then_resets() {
    let mut keeper = ScoreKeeper::new();
    assert_eq!(keeper.combo(), 1);

    let mut expected = 0;
    for pass in 1..=3u32 {
        let mut grid = Grid::new(10, 10);
        red_row(&mut grid, 4, 3);
        let mask = mask_for(&grid);
        let result = keeper.remove_marked_and_score(&mut grid, &mask);
        assert_eq!(result.combo, pass);
        expected += 60 * pass;
        assert_eq!(keeper.score(), expected);
        assert_eq!(keeper.combo(), pass + 1);
    }

    keeper.reset_combo();
    assert_eq!(keeper.combo(), 1);
    // The running score survives a combo reset.
    assert_eq!(keeper.score(), 60 + 120 + 180);
}

#[test]
fn test_floating_scores_follow_removed_cells() {
    let mut grid = Grid::new(10, 10);
    red_row(&mut grid, 7, 3);

    let mut keeper = ScoreKeeper::new();
    let mask = mask_for(&grid);
    keeper.remove_marked_and_score(&mut grid, &mask);

    let floating = keeper.floating();
    assert_eq!(floating.len(), 3);
    for (i, f) in floating.iter().enumerate() {
        assert_eq!(f.position(), Coord::new(i as i16, 7));
        assert_eq!(f.points, 10);
        assert_eq!(f.remaining_ms(), FLOATING_SCORE_TTL_MS);
    }

    keeper.tick(FLOATING_SCORE_TTL_MS - 1);
    assert_eq!(keeper.floating().len(), 3);
    assert_eq!(keeper.floating()[0].remaining_ms(), 1);
    keeper.tick(1);
    assert!(keeper.floating().is_empty());
}

use tracing::debug;

use crate::core::{can_move, ClickOutcome, GameState};
use crate::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    NotPlayable,
    #[error("removal animation in progress")]
    Animating,
    #[error("coordinate is off the board")]
    OutOfBounds,
    #[error("no piece at the source cell")]
    EmptySource,
    #[error("target cell is occupied")]
    OccupiedTarget,
    #[error("no open path between source and target")]
    NoPath,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::NotPlayable => "not_playable",
            MoveError::Animating => "animating",
            MoveError::OutOfBounds => "out_of_bounds",
            MoveError::EmptySource => "empty_source",
            MoveError::OccupiedTarget => "occupied_target",
            MoveError::NoPath => "no_path",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Coord,
    pub to: Coord,
    pub steps: u32,
    /// The move completed at least one line and removal has started
    pub lines_found: bool,
}

/// Move the piece at `from` to `to`.
///
/// Every check runs before the board is touched, so a failed move leaves the
/// state (including any selection) exactly as it was.
pub fn apply_move(state: &mut GameState, from: Coord, to: Coord) -> Result<MoveReport, MoveError> {
    if state.game_over() {
        return Err(MoveError::NotPlayable);
    }
    if state.is_animating() {
        return Err(MoveError::Animating);
    }

    let grid = state.grid();
    if !grid.is_valid(from) || !grid.is_valid(to) {
        return Err(MoveError::OutOfBounds);
    }
    if !grid.is_occupied(from) {
        return Err(MoveError::EmptySource);
    }
    if grid.is_occupied(to) {
        return Err(MoveError::OccupiedTarget);
    }
    if !can_move(grid, from, to) {
        return Err(MoveError::NoPath);
    }

    if state.selection() != Some(from) {
        state.click_cell(from);
    }
    match state.click_cell(to) {
        ClickOutcome::Moved { steps, .. } => {
            let report = MoveReport {
                from,
                to,
                steps,
                lines_found: state.is_animating(),
            };
            debug!(?report, "engine move");
            Ok(report)
        }
        // Ruled out by the checks above; drop the selection made here.
        _ => {
            if state.selection() == Some(from) {
                state.click_cell(from);
            }
            Err(MoveError::NoPath)
        }
    }
}

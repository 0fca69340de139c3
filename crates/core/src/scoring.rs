//! Scoring module - per-piece points, length bonus and combo chains
//!
//! Rules:
//! - Each removed piece scores `POINTS_PER_PIECE * combo` and spawns a floating popup.
//! - A pass removing `n >= MIN_LINE_LENGTH` pieces adds `(n - 2) * LENGTH_BONUS * combo`.
//! - The combo multiplier starts at 1 and grows by 1 after every removal pass.
//!   The board resets it to 1 when a move or a chain ends without lines.

use serde::Serialize;

use crate::grid::Grid;
use crate::lines::LineMask;
use crate::types::{Coord, FLOATING_SCORE_TTL_MS, LENGTH_BONUS, MIN_LINE_LENGTH, POINTS_PER_PIECE};

/// Result of one removal pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub removed: u32,
    /// Sum of the per-piece awards
    pub piece_points: u32,
    pub length_bonus: u32,
    pub total: u32,
    /// Multiplier that was applied to this pass
    pub combo: u32,
}

/// Points for a single removed piece
pub fn calculate_piece_score(combo: u32) -> u32 {
    POINTS_PER_PIECE.saturating_mul(combo)
}

/// Bonus for removing `removed` pieces in one pass
pub fn calculate_length_bonus(removed: u32, combo: u32) -> u32 {
    if removed < MIN_LINE_LENGTH as u32 {
        return 0;
    }
    (removed - 2)
        .saturating_mul(LENGTH_BONUS)
        .saturating_mul(combo)
}

/// Complete score for a pass of `removed` pieces
pub fn calculate_score(removed: u32, combo: u32) -> ScoreResult {
    let piece_points = calculate_piece_score(combo).saturating_mul(removed);
    let length_bonus = calculate_length_bonus(removed, combo);
    ScoreResult {
        removed,
        piece_points,
        length_bonus,
        total: piece_points.saturating_add(length_bonus),
        combo,
    }
}

/// Transient popup shown where a piece was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloatingScore {
    pub x: i16,
    pub y: i16,
    pub points: u32,
    pub age_ms: u32,
}

impl FloatingScore {
    pub fn position(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Milliseconds left before the popup is pruned
    pub fn remaining_ms(&self) -> u32 {
        FLOATING_SCORE_TTL_MS.saturating_sub(self.age_ms)
    }
}

/// Running score, combo multiplier and live popups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u32,
    combo: u32,
    floating: Vec<FloatingScore>,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self {
            score: 0,
            combo: 1,
            floating: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn floating(&self) -> &[FloatingScore] {
        &self.floating
    }

    pub fn reset_combo(&mut self) {
        self.combo = 1;
    }

    /// Clear every marked, occupied cell and award points for it.
    ///
    /// Cells are processed row-major; each emits one popup. The combo grows
    /// by one afterwards, even for a pass that removed nothing.
    pub fn remove_marked_and_score(&mut self, grid: &mut Grid, mask: &LineMask) -> ScoreResult {
        let combo = self.combo;
        let per_piece = calculate_piece_score(combo);
        let mut removed = 0u32;

        for c in mask.marked() {
            if grid.remove_piece(c).is_some() {
                removed += 1;
                self.floating.push(FloatingScore {
                    x: c.x,
                    y: c.y,
                    points: per_piece,
                    age_ms: 0,
                });
            }
        }

        let result = calculate_score(removed, combo);
        self.score = self.score.saturating_add(result.total);
        self.combo = self.combo.saturating_add(1);
        result
    }

    /// Age popups and drop the expired ones
    pub fn tick(&mut self, elapsed_ms: u32) {
        for f in &mut self.floating {
            f.age_ms = f.age_ms.saturating_add(elapsed_ms);
        }
        self.floating.retain(|f| f.age_ms < FLOATING_SCORE_TTL_MS);
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::new()
    }
}

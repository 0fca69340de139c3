//! Game state module - manages the complete board state
//!
//! This module ties together all core components: grid, path finder, line
//! detector, removal animation, scoring and spawner. It handles selection,
//! moves, the removal/chain pipeline, timers and the game lifecycle.
//!
//! Post-move pipeline:
//!
//! 1. Lines on the board? Start the removal animation and stop here.
//! 2. Otherwise reset the combo, spawn the lookahead, and scan again.
//! 3. Lines after the spawn? Start the animation. Otherwise reset the combo and
//!    check for game over.
//!
//! When the animation reaches its remove phase the marked pieces are scored and
//! cleared. New lines restart the animation (chain reaction); otherwise the
//! lookahead is spawned and scanned. Post-spawn lines keep the chain going at
//! the raised combo, and the combo only resets once a scan comes up empty.

use serde::Serialize;
use tracing::{debug, trace};

use crate::animation::{Animation, AnimationStep};
use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::lines::{find_all_lines, Line};
use crate::path::find_path;
use crate::scoring::{FloatingScore, ScoreKeeper, ScoreResult};
use crate::snapshot::GameSnapshot;
use crate::spawn::{is_game_over, SpawnOutcome, Spawner};
use crate::types::*;

/// Currently selected piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub coord: Coord,
    visible: bool,
    timer_ms: u32,
}

impl Selection {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            visible: true,
            timer_ms: 0,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        while self.timer_ms >= SELECTION_BLINK_MS {
            self.timer_ms -= SELECTION_BLINK_MS;
            self.visible = !self.visible;
        }
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off the board, nothing selected, game over, or animation running
    Ignored,
    Selected(Coord),
    Deselected,
    /// The selected piece travelled `steps` cells
    Moved { from: Coord, to: Coord, steps: u32 },
    /// No path to the clicked cell; the selection was dropped
    MoveRejected,
}

/// Cumulative statistics of one episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GameStats {
    pub moves: u32,
    pub pieces_removed: u32,
    pub lines_cleared: u32,
    /// Highest combo multiplier applied to a removal pass
    pub longest_chain: u32,
    pub pieces_spawned: u32,
}

/// Board-level event, drained by observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Removed { lines: u32, result: ScoreResult },
    Spawned { placed: Vec<(Coord, PieceColor)> },
    GameOver { score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    selection: Option<Selection>,
    animation: Animation,
    scores: ScoreKeeper,
    spawner: Spawner,
    /// Lines condemned by the running animation
    pending_lines: u32,
    /// Cells travelled by the last successful move
    last_path: Vec<Coord>,
    /// Most recent removal pass, spawn or game over, until taken
    last_event: Option<BoardEvent>,
    stats: GameStats,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game: validate the config, scatter the initial pieces and
    /// resolve any line they happen to form.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Build a game around a prepared grid. Nothing is spawned and the grid is
    /// not scanned until the first move.
    pub fn with_grid(config: GameConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(ConfigError::GridMismatch {
                width: config.width,
                height: config.height,
                actual_w: grid.width(),
                actual_h: grid.height(),
            });
        }
        let mut state = Self::empty(config);
        state.grid = grid;
        Ok(state)
    }

    fn empty(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.width, config.height),
            selection: None,
            animation: Animation::new(config.width, config.height),
            scores: ScoreKeeper::new(),
            spawner: Spawner::new(config.seed),
            pending_lines: 0,
            last_path: Vec::new(),
            last_event: None,
            stats: GameStats::default(),
            episode_id: 0,
            game_over: false,
        }
    }

    /// Assumes `config` has been validated
    fn fresh(config: GameConfig) -> Self {
        let mut state = Self::empty(config);
        let placed = state
            .spawner
            .scatter(&mut state.grid, config.initial_pieces as usize);
        state.stats.pieces_spawned = placed as u32;
        debug!(seed = config.seed, placed, "new game");
        state.resolve_after_spawn();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection.map(|s| s.coord)
    }

    /// Whether the selected piece is in the visible half of its blink
    pub fn selection_visible(&self) -> bool {
        self.selection.is_some_and(|s| s.visible())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    pub fn animation_phase(&self) -> Option<AnimationPhase> {
        self.animation.phase()
    }

    /// Whether marked cells are currently drawn (false in the off half of a blink)
    pub fn blink_visible(&self) -> bool {
        self.animation.blink_visible()
    }

    pub fn is_marked(&self, c: Coord) -> bool {
        self.animation.mask().is_marked(c)
    }

    pub fn floating_scores(&self) -> &[FloatingScore] {
        self.scores.floating()
    }

    pub fn lookahead(&self) -> &[PieceColor; SPAWN_COUNT] {
        self.spawner.lookahead()
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn combo(&self) -> u32 {
        self.scores.combo()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }

    pub fn last_path(&self) -> &[Coord] {
        &self.last_path
    }

    /// Take the last board event (one-shot)
    pub fn take_last_event(&mut self) -> Option<BoardEvent> {
        self.last_event.take()
    }

    /// Whether clicks can currently change the board
    pub fn accepts_input(&self) -> bool {
        !self.game_over && !self.animation.is_active()
    }

    /// Handle a click on a board cell
    pub fn click_cell(&mut self, c: Coord) -> ClickOutcome {
        if !self.accepts_input() {
            trace!(?c, game_over = self.game_over, "click ignored");
            return ClickOutcome::Ignored;
        }
        if !self.grid.is_valid(c) {
            return ClickOutcome::Ignored;
        }

        if self.grid.is_occupied(c) {
            if self.selection() == Some(c) {
                self.selection = None;
                return ClickOutcome::Deselected;
            }
            self.selection = Some(Selection::new(c));
            return ClickOutcome::Selected(c);
        }

        let Some(from) = self.selection() else {
            return ClickOutcome::Ignored;
        };
        self.selection = None;

        let path = find_path(&self.grid, from, c);
        if path.is_empty() || !self.grid.move_piece(from, c) {
            debug!(?from, to = ?c, "no path");
            return ClickOutcome::MoveRejected;
        }

        let steps = (path.len() - 1) as u32;
        self.last_path = path;
        self.stats.moves += 1;
        debug!(?from, to = ?c, steps, "moved");

        let lines = find_all_lines(&self.grid, self.config.min_line_length as usize);
        if lines.is_empty() {
            self.scores.reset_combo();
            self.add_new_pieces();
            self.resolve_after_spawn();
        } else {
            self.start_removal(&lines);
        }

        ClickOutcome::Moved { from, to: c, steps }
    }

    /// Commit the lookahead to the board. No-op once the game is over; a full
    /// board triggers the game-over check instead. Returns pieces placed.
    pub fn add_new_pieces(&mut self) -> usize {
        if self.game_over {
            return 0;
        }
        match self.spawner.add_new_pieces(&mut self.grid) {
            SpawnOutcome::NoRoom => {
                self.check_game_over();
                0
            }
            SpawnOutcome::Placed(placed) => {
                self.stats.pieces_spawned += placed.len() as u32;
                self.last_event = Some(BoardEvent::Spawned {
                    placed: placed.to_vec(),
                });
                placed.len()
            }
        }
    }

    /// Set the game-over flag if the board is stuck. Returns the flag.
    pub fn check_game_over(&mut self) -> bool {
        if !self.game_over && is_game_over(&self.grid) {
            self.game_over = true;
            self.selection = None;
            debug!(score = self.score(), moves = self.stats.moves, "game over");
            self.last_event = Some(BoardEvent::GameOver {
                score: self.score(),
            });
        }
        self.game_over
    }

    /// Scan after a spawn: lines continue the chain at the current combo;
    /// otherwise the chain is over, so reset the combo and check for game over
    fn resolve_after_spawn(&mut self) {
        let lines = find_all_lines(&self.grid, self.config.min_line_length as usize);
        if lines.is_empty() {
            self.scores.reset_combo();
            self.check_game_over();
        } else {
            self.start_removal(&lines);
        }
    }

    fn start_removal(&mut self, lines: &[Line]) {
        self.animation.start(lines);
        self.pending_lines = lines.len() as u32;
        debug!(lines = lines.len(), combo = self.combo(), "lines found");
    }

    /// Score and clear the marked cells, then chain or hand back to the spawner
    fn resolve_removal(&mut self) {
        let result = self
            .scores
            .remove_marked_and_score(&mut self.grid, self.animation.mask());
        self.stats.pieces_removed += result.removed;
        self.stats.lines_cleared += self.pending_lines;
        self.stats.longest_chain = self.stats.longest_chain.max(result.combo);
        self.last_event = Some(BoardEvent::Removed {
            lines: self.pending_lines,
            result,
        });
        debug!(removed = result.removed, points = result.total, combo = result.combo, "removed");

        let lines = find_all_lines(&self.grid, self.config.min_line_length as usize);
        if !lines.is_empty() {
            self.start_removal(&lines);
            return;
        }

        self.animation.finish();
        self.pending_lines = 0;
        self.add_new_pieces();
        self.resolve_after_spawn();
    }

    /// Main game tick - advance every timer by `elapsed_ms`.
    ///
    /// Returns true if the animation changed phase.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if let Some(sel) = self.selection.as_mut() {
            sel.tick(elapsed_ms);
        }
        self.scores.tick(elapsed_ms);

        match self.animation.tick(elapsed_ms) {
            AnimationStep::Idle => false,
            AnimationStep::EnteredFastBlink => true,
            AnimationStep::EnteredRemove => {
                self.resolve_removal();
                true
            }
        }
    }

    /// Reinitialize the board, score, queue and flags. The new game is seeded
    /// from the current RNG state so it differs from the previous one.
    pub fn reset(&mut self) {
        let config = GameConfig {
            seed: self.spawner.seed(),
            ..self.config
        };
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::fresh(config);
        self.episode_id = next_episode;
    }

    /// Apply a game action. Returns true if it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::ClickCell(c) => self.click_cell(c) != ClickOutcome::Ignored,
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        self.grid.write_codes(&mut out.cells);
        out.marked.clear();
        out.marked.extend_from_slice(self.animation.mask().as_slice());
        out.selection = self.selection().map(|c| [c.x, c.y]);
        out.selection_visible = self.selection_visible();
        out.phase = self.animation.phase().map(|p| p.as_str());
        out.blink_visible = self.animation.blink_visible();
        out.floating.clear();
        out.floating.extend_from_slice(self.scores.floating());
        let lookahead = *self.lookahead();
        out.lookahead = lookahead.map(|c| c.code());
        out.score = self.score();
        out.combo = self.combo();
        out.game_over = self.game_over;
        out.stats = self.stats;
        out.episode_id = self.episode_id;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(GameConfig::default())
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the rules of a "Lines" board: pieces are moved
//! along open paths and removed when enough of one color line up. It has
//! **no dependencies** on rendering, windowing, or input devices, making it:
//!
//! - **Deterministic**: Same seed and clicks produce identical games
//! - **Testable**: Every timer advances only through [`GameState::tick`]
//! - **Portable**: Runs headless, in a terminal, or behind any GUI
//!
//! # Module Structure
//!
//! - [`grid`]: bounds-checked board of optional piece colors
//! - [`path`]: breadth-first move validation
//! - [`lines`]: four-direction line detection and the removal mask
//! - [`animation`]: highlight / fast-blink / remove state machine
//! - [`scoring`]: per-piece points, length bonus, combo, floating popups
//! - [`spawn`]: lookahead commit and game-over detection
//! - [`rng`]: seeded LCG and lookahead queue
//! - [`game_state`]: the board tying everything together
//! - [`snapshot`]: serializable per-frame view for renderers and observers
//!
//! # Example
//!
//! ```
//! use lines_core::{GameConfig, GameState, Grid};
//! use lines_core::types::{Coord, PieceColor, HIGHLIGHT_MS, FAST_BLINK_MS};
//!
//! let mut grid = Grid::new(10, 10);
//! grid.place_piece(Coord::new(0, 0), PieceColor::Red);
//! grid.place_piece(Coord::new(1, 0), PieceColor::Red);
//! grid.place_piece(Coord::new(6, 6), PieceColor::Red);
//!
//! let config = GameConfig { initial_pieces: 0, ..GameConfig::default() };
//! let mut game = GameState::with_grid(config, grid).unwrap();
//!
//! // Select the loose piece and move it next to the others.
//! game.click_cell(Coord::new(6, 6));
//! game.click_cell(Coord::new(2, 0));
//! assert!(game.is_animating());
//!
//! game.tick(HIGHLIGHT_MS);
//! game.tick(FAST_BLINK_MS);
//! assert_eq!(game.score(), 60);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] every frame with the elapsed milliseconds. The
//! selection blink, floating-score aging and removal animation all advance
//! from that single call.

pub mod animation;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod lines;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod spawn;

pub use lines_types as types;

// Re-export commonly used types for convenience
pub use animation::{Animation, AnimationState, AnimationStep};
pub use config::{ConfigError, GameConfig};
pub use game_state::{BoardEvent, ClickOutcome, GameState, GameStats};
pub use grid::Grid;
pub use lines::{find_all_lines, Line, LineMask};
pub use path::{can_move, find_path, reachable_from};
pub use rng::{ColorQueue, SimpleRng};
pub use scoring::{calculate_score, FloatingScore, ScoreKeeper, ScoreResult};
pub use snapshot::GameSnapshot;
pub use spawn::{any_move_available, is_game_over, SpawnOutcome, Spawner};

//! Move engine: high-level moves with typed failures, and an automatic player.
//!
//! The core board only understands clicks. This crate turns a (from, to)
//! request into the right click sequence, reports why a move is illegal, and
//! picks moves for headless play and benchmarks.

pub mod chooser;
pub mod moves;

pub use lines_core as core;
pub use lines_types as types;

pub use chooser::{choose_move, legal_moves, settle};
pub use moves::{apply_move, MoveError, MoveReport};

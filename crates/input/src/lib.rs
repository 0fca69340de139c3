//! Pointer input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! pointer positions in pixels onto board cells through a [`Layout`], and
//! turns clicks and key characters into [`crate::types::GameAction`]s.

pub mod layout;
pub mod map;

pub use lines_types as types;

pub use layout::Layout;
pub use map::{map_click, map_key, should_quit};

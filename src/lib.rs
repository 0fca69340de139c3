//! Lines (workspace facade crate).
//!
//! Re-exports the rule engine crates under `lines_game::{core,engine,input,types}`
//! so front ends depend on one package while the implementation lives in `crates/`.

pub use lines_core as core;
pub use lines_engine as engine;
pub use lines_input as input;
pub use lines_types as types;

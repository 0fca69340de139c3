//! Flat per-frame copy of everything a renderer or observer reads

use serde::Serialize;

use crate::game_state::GameStats;
use crate::scoring::FloatingScore;
use crate::types::SPAWN_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major color codes, 0 = empty
    pub cells: Vec<u8>,
    /// Row-major removal marks
    pub marked: Vec<bool>,
    pub selection: Option<[i16; 2]>,
    pub selection_visible: bool,
    pub phase: Option<&'static str>,
    pub blink_visible: bool,
    pub floating: Vec<FloatingScore>,
    pub lookahead: [u8; SPAWN_COUNT],
    pub score: u32,
    pub combo: u32,
    pub game_over: bool,
    pub stats: GameStats,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Color code at (x, y), or None off the board
    pub fn cell(&self, x: i16, y: i16) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.phase.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            marked: Vec::new(),
            selection: None,
            selection_visible: false,
            phase: None,
            blink_visible: true,
            floating: Vec::new(),
            lookahead: [0; SPAWN_COUNT],
            score: 0,
            combo: 1,
            game_over: false,
            stats: GameStats::default(),
            episode_id: 0,
            seed: 0,
        }
    }
}

//! Removal animation state machine
//!
//! One board-wide animation drives every removal:
//!
//! ```text
//! Inactive --start--> Highlight --300ms--> FastBlink --1000ms--> Remove
//!                         ^                                        |
//!                         +------------- chain reaction -----------+
//! ```
//!
//! The machine only keeps time and the condemned-cell mask. Reaching `Remove`
//! is reported to the caller, which performs the removal and then either
//! [`Animation::start`]s again (new lines) or [`Animation::finish`]es.

use crate::lines::{Line, LineMask};
use crate::types::{AnimationPhase, FAST_BLINK_TOGGLE_MS};

/// Animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Inactive,
    Active {
        phase: AnimationPhase,
        phase_timer_ms: u32,
        blink_timer_ms: u32,
        blink_visible: bool,
    },
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Nothing changed phase (or the machine is inactive)
    Idle,
    /// Highlight ended, fast blink began
    EnteredFastBlink,
    /// Fast blink ended; the caller must now remove the marked cells
    EnteredRemove,
}

#[derive(Debug, Clone)]
pub struct Animation {
    state: AnimationState,
    mask: LineMask,
}

impl Animation {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            state: AnimationState::Inactive,
            mask: LineMask::new(width, height),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, AnimationState::Active { .. })
    }

    pub fn phase(&self) -> Option<AnimationPhase> {
        match self.state {
            AnimationState::Active { phase, .. } => Some(phase),
            AnimationState::Inactive => None,
        }
    }

    /// Whether marked cells should currently be drawn
    pub fn blink_visible(&self) -> bool {
        match self.state {
            AnimationState::Active { blink_visible, .. } => blink_visible,
            AnimationState::Inactive => true,
        }
    }

    pub fn mask(&self) -> &LineMask {
        &self.mask
    }

    /// Mark the cells of `lines` and (re)enter Highlight with fresh timers
    pub fn start(&mut self, lines: &[Line]) {
        self.mask.mark_lines(lines);
        self.state = AnimationState::Active {
            phase: AnimationPhase::Highlight,
            phase_timer_ms: 0,
            blink_timer_ms: 0,
            blink_visible: true,
        };
    }

    /// Return to Inactive and clear the mask
    pub fn finish(&mut self) {
        self.mask.clear();
        self.state = AnimationState::Inactive;
    }

    /// Advance timers by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) -> AnimationStep {
        let AnimationState::Active {
            phase,
            phase_timer_ms,
            blink_timer_ms,
            blink_visible,
        } = self.state
        else {
            return AnimationStep::Idle;
        };

        // The owner resolves Remove in the tick that enters it.
        if phase == AnimationPhase::Remove {
            return AnimationStep::Idle;
        }

        let timer = phase_timer_ms.saturating_add(elapsed_ms);
        let mut blink = blink_timer_ms;
        let mut visible = blink_visible;
        if phase == AnimationPhase::FastBlink {
            blink = blink.saturating_add(elapsed_ms);
            while blink >= FAST_BLINK_TOGGLE_MS {
                blink -= FAST_BLINK_TOGGLE_MS;
                visible = !visible;
            }
        }

        if timer >= phase.duration_ms() {
            let next = phase.next();
            self.state = AnimationState::Active {
                phase: next,
                phase_timer_ms: 0,
                blink_timer_ms: 0,
                blink_visible: visible && next != AnimationPhase::Remove,
            };
            return match next {
                AnimationPhase::Remove => AnimationStep::EnteredRemove,
                _ => AnimationStep::EnteredFastBlink,
            };
        }

        self.state = AnimationState::Active {
            phase,
            phase_timer_ms: timer,
            blink_timer_ms: blink,
            blink_visible: visible,
        };
        AnimationStep::Idle
    }
}

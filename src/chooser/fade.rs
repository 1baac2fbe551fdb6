//! Tick-driven alpha fade-in.

use crate::blend::BlendControl;

/// Ticks between one-unit weight moves.
pub const FADE_STEP_TICKS: u8 = 5;
/// Backdrop weight at the start of a fade-in.
pub const FADE_START_BG: u8 = 16;
/// Object weight at the start of a fade-in.
pub const FADE_START_FG: u8 = 0;

/// Progress of one fade-in: the backdrop weight walks from 16 down to 0
/// while the object weight walks from 0 up to 16, one unit every
/// [`FADE_STEP_TICKS`] ticks. The weight register is reprogrammed only on
/// ticks where the weights actually moved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FadeProgress {
    countdown: u8,
    bg: u8,
    fg: u8,
}

impl FadeProgress {
    pub const fn start() -> Self {
        Self { countdown: FADE_STEP_TICKS, bg: FADE_START_BG, fg: FADE_START_FG }
    }

    /// Advance one tick.
    pub fn step(&mut self, blend: &mut impl BlendControl) {
        if self.is_done() {
            return;
        }
        self.countdown -= 1;
        if self.countdown == 0 {
            self.countdown = FADE_STEP_TICKS;
            self.bg -= 1;
            self.fg += 1;
            blend.set_blend_weights(self.bg, self.fg);
        }
    }

    /// The object has reached full weight and the backdrop is fully out.
    pub fn is_done(&self) -> bool {
        self.bg == 0
    }

    /// Current `(backdrop, object)` weights.
    pub fn weights(&self) -> (u8, u8) {
        (self.bg, self.fg)
    }
}

//! Flag state shared between the state machine and the render hook.
//!
//! The machine writes these flags while it runs; the hook reads them every
//! frame and applies them to the live sprites. The state is owned by the
//! caller and handed to the screen at construction, and nothing here resets
//! it, so whatever the caller seeded (or a previous screen left behind)
//! carries straight through.

/// Which of the two options.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Pick {
    #[default]
    A,
    B,
}

impl Pick {
    /// The opposite option.
    pub const fn other(self) -> Pick {
        match self {
            Pick::A => Pick::B,
            Pick::B => Pick::A,
        }
    }
}

/// Per-option flags plus the persisted animation frame.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PickState {
    /// Frame advance allowed; while false the hook pins the sprite to
    /// `frame`.
    pub animate: bool,
    /// Draw fully opaque instead of as a blend target.
    pub opaque: bool,
    /// One-shot: slide the sprite toward the screen center, self-clears on
    /// arrival.
    pub center: bool,
    /// Last frame shown. Written back while animating, restored while
    /// frozen.
    pub frame: u8,
}

/// Both options' flags and the current selection.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ChooserState {
    pub a: PickState,
    pub b: PickState,
    pub choice: Pick,
}

impl ChooserState {
    pub fn pick(&self, pick: Pick) -> &PickState {
        match pick {
            Pick::A => &self.a,
            Pick::B => &self.b,
        }
    }

    pub fn pick_mut(&mut self, pick: Pick) -> &mut PickState {
        match pick {
            Pick::A => &mut self.a,
            Pick::B => &mut self.b,
        }
    }
}

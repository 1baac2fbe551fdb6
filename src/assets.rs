//! Static asset descriptions for the selector screen. Each option's figure
//! is 64×128, drawn as two stacked 64×64 halves; the display templates here
//! bind each half's animation streams and OAM defaults to its render-hook
//! policy.

use crate::chooser::Pick;
use crate::object::{OamTemplate, ObjectFlags};

/// Ticks each running frame stays visible.
pub const FRAME_TICKS: u8 = 10;

/// One command in an animation stream, consumed by the object engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimStep {
    /// Show the frame starting at `tile` for `duration` ticks.
    Frame { tile: u16, duration: u8 },
    /// Jump back to the start of the stream.
    Loop,
    /// Stay on the previous frame forever.
    Hold,
}

/// Running cycle, upper half of a figure.
pub static RUN_TOP: &[AnimStep] = &[
    AnimStep::Frame { tile: 0x000, duration: FRAME_TICKS },
    AnimStep::Frame { tile: 0x100, duration: FRAME_TICKS },
    AnimStep::Frame { tile: 0x080, duration: FRAME_TICKS },
    AnimStep::Frame { tile: 0x180, duration: FRAME_TICKS },
    AnimStep::Loop,
];

/// Running cycle, lower half (tiles offset by `0x40` from the upper half).
pub static RUN_BOTTOM: &[AnimStep] = &[
    AnimStep::Frame { tile: 0x040, duration: FRAME_TICKS },
    AnimStep::Frame { tile: 0x140, duration: FRAME_TICKS },
    AnimStep::Frame { tile: 0x0C0, duration: FRAME_TICKS },
    AnimStep::Frame { tile: 0x1C0, duration: FRAME_TICKS },
    AnimStep::Loop,
];

/// Standing pose, upper half.
pub static STILL_TOP: &[AnimStep] = &[
    AnimStep::Frame { tile: 0x000, duration: FRAME_TICKS },
    AnimStep::Hold,
];

/// Standing pose, lower half.
pub static STILL_BOTTOM: &[AnimStep] = &[
    AnimStep::Frame { tile: 0x040, duration: FRAME_TICKS },
    AnimStep::Hold,
];

/// Anim table for upper halves: stream 0 runs, stream 1 stands.
pub static ANIMS_TOP: &[&[AnimStep]] = &[RUN_TOP, STILL_TOP];

/// Anim table for lower halves.
pub static ANIMS_BOTTOM: &[&[AnimStep]] = &[RUN_BOTTOM, STILL_BOTTOM];

/// Shared OAM defaults for every half: 64×64, priority 2, blend mode set so
/// a figure starts out as a first blend target until its hook says otherwise.
pub static OAM_64X64: OamTemplate = OamTemplate {
    attr0: ObjectFlags::GFX_BLEND,
    attr1: 0xC000, // 64x64
    attr2: 0x0800, // priority 2
};

/// An externally loaded blob: compressed tile graphics or a palette.
#[derive(Debug, Copy, Clone)]
pub struct Resource<'a> {
    pub data: &'a [u8],
    pub tag: u16,
}

/// Everything the engine needs to display one object.
#[derive(Debug, Copy, Clone)]
pub struct Template<'a> {
    pub tile_tag: u16,
    pub palette_tag: u16,
    pub oam: &'a OamTemplate,
    pub anims: &'a [&'a [AnimStep]],
    /// Which render-hook policy drives this object each frame.
    pub hook: Pick,
}

/// Art bundle for one option: graphics, palette, and the two half templates.
#[derive(Debug, Copy, Clone)]
pub struct PickArt<'a> {
    pub graphics: Resource<'a>,
    pub palette: Resource<'a>,
    pub top: Template<'a>,
    pub bottom: Template<'a>,
}

/// Both options' art, handed to the screen at construction.
#[derive(Debug, Copy, Clone)]
pub struct ScreenAssets<'a> {
    pub a: PickArt<'a>,
    pub b: PickArt<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_streams_loop() {
        assert_eq!(RUN_TOP.len(), 5);
        assert_eq!(*RUN_TOP.last().unwrap(), AnimStep::Loop);
        assert_eq!(*RUN_BOTTOM.last().unwrap(), AnimStep::Loop);
    }

    #[test]
    fn still_streams_hold() {
        assert_eq!(*STILL_TOP.last().unwrap(), AnimStep::Hold);
        assert_eq!(*STILL_BOTTOM.last().unwrap(), AnimStep::Hold);
    }

    #[test]
    fn bottom_tiles_offset_from_top() {
        for (top, bottom) in RUN_TOP.iter().zip(RUN_BOTTOM.iter()) {
            if let (
                AnimStep::Frame { tile: t, duration: dt },
                AnimStep::Frame { tile: b, duration: db },
            ) = (top, bottom)
            {
                assert_eq!(b - t, 0x40);
                assert_eq!(dt, db);
            }
        }
    }
}

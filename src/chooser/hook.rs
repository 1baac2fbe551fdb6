//! Per-frame render hook.
//!
//! Runs once per half per frame, after the state machine has ticked, so a
//! flag raised this tick is on screen the same frame. Order matters and is
//! fixed: blend bit, then animation freeze, then the one-shot slide.

use super::state::{ChooserState, Pick};
use crate::object::{ObjectFlags, Sprite};

/// X both figures slide to when confirmed.
pub const SLIDE_TARGET_X: u16 = 0x77;
/// Horizontal units moved per tick while sliding.
pub const SLIDE_STEP: u16 = 2;

/// Apply one option's flags to a live sprite.
pub(crate) fn apply(state: &mut ChooserState, pick: Pick, sprite: &mut Sprite) {
    let flags = state.pick_mut(pick);

    // The blend-target bit tracks the opaque flag. Bit cleared means the
    // object draws opaque, bit set means it blends with the backdrop.
    if flags.opaque {
        sprite.attr0.remove(ObjectFlags::GFX_BLEND);
    } else {
        sprite.attr0.insert(ObjectFlags::GFX_BLEND);
    }

    // Remember the frame while running, pin it while frozen.
    if flags.animate {
        flags.frame = sprite.anim_frame;
    } else {
        sprite.anim_frame = flags.frame;
    }

    // One-shot slide toward the center. A approaches from the right, B from
    // the left; the flag drops on the first tick the sprite sits on target.
    if flags.center {
        match pick {
            Pick::A => {
                if sprite.x > SLIDE_TARGET_X {
                    sprite.x -= SLIDE_STEP;
                } else {
                    flags.center = false;
                }
            }
            Pick::B => {
                if sprite.x < SLIDE_TARGET_X {
                    sprite.x += SLIDE_STEP;
                } else {
                    flags.center = false;
                }
            }
        }
    }
}

//! # Blend Register Interface
//!
//! The display hardware mixes the first-target layer into the layers below it
//! under the control of two write-only registers:
//!
//! | Register  | Address       | Layout                                        |
//! |-----------|---------------|-----------------------------------------------|
//! | selection | `$0400_0050`  | which objects/layers join first-target blending |
//! | weights   | `$0400_0052`  | `(background << 8) \| foreground`, 0..=16 each  |
//!
//! The selector screen programs the selection register once and then ramps
//! the weight register, so both sit behind the narrow [`BlendControl`] trait:
//! [`MmioBlend`] writes through to hardware, [`ShadowBlend`] keeps a readable
//! shadow copy of what was written (the registers themselves read back as
//! open bus).

use log::debug;

/// Selection value while the choice screen is live: objects flagged
/// semi-transparent in their attribute word become the first blend target.
pub const BLEND_SEL_CHOICE: u16 = 0x2F00;

/// Alternate selection value blending every object as first target.
/// Reserved; the screen relies on per-object semi-transparent mode instead.
pub const BLEND_SEL_OBJ: u16 = 0x2F50;

/// Weight word for the settled choice screen: both figures semi-visible,
/// background weight 10, foreground weight 3.
pub const HALF_BLEND: u16 = 0x0A03;

const BLEND_SEL_REG: *mut u16 = 0x0400_0050 as *mut u16;
const BLEND_WEIGHT_REG: *mut u16 = 0x0400_0052 as *mut u16;

/// Pack a background/foreground weight pair into the weight-register layout.
#[inline]
pub const fn pack_weights(bg: u8, fg: u8) -> u16 {
    ((bg as u16) << 8) | fg as u16
}

/// Write access to the two blend registers.
///
/// `set_blend_weights` is the usual entry; `set_blend_packed` exists for the
/// composite constants ([`HALF_BLEND`]) that are defined as a whole word.
pub trait BlendControl {
    fn set_blend_selection(&mut self, mask: u16);

    fn set_blend_packed(&mut self, packed: u16);

    #[inline]
    fn set_blend_weights(&mut self, bg: u8, fg: u8) {
        self.set_blend_packed(pack_weights(bg, fg));
    }
}

/// Write-through implementation over the memory-mapped registers.
pub struct MmioBlend;

impl BlendControl for MmioBlend {
    #[inline]
    fn set_blend_selection(&mut self, mask: u16) {
        debug!(target: "blend", "selection <- ${:04X}", mask);
        unsafe { core::ptr::write_volatile(BLEND_SEL_REG, mask) };
    }

    #[inline]
    fn set_blend_packed(&mut self, packed: u16) {
        debug!(target: "blend", "weights <- ${:04X}", packed);
        unsafe { core::ptr::write_volatile(BLEND_WEIGHT_REG, packed) };
    }
}

/// Shadow copy of both write-only registers.
///
/// Engines that want to read blending state back keep one of these in front
/// of the real registers; it also counts writes, which is what the screen's
/// timing tests observe.
#[derive(Debug, Default, Copy, Clone)]
pub struct ShadowBlend {
    pub selection: u16,
    pub weights: u16,
    pub selection_writes: u32,
    pub weight_writes: u32,
}

impl BlendControl for ShadowBlend {
    fn set_blend_selection(&mut self, mask: u16) {
        self.selection = mask;
        self.selection_writes += 1;
    }

    fn set_blend_packed(&mut self, packed: u16) {
        self.weights = packed;
        self.weight_writes += 1;
    }
}

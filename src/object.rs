//! Render-object model. [`Sprite`] carries the live per-object fields the
//! per-frame hooks are allowed to touch; [`OamTemplate`] carries the static
//! attribute defaults an object is seeded from.

bitflags::bitflags! {
    /// Attribute word of a displayed object.
    ///
    /// Only `GFX_BLEND` is toggled at runtime by this crate; the rest are
    /// carried through from the template so an engine can seed objects
    /// directly from [`OamTemplate`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct ObjectFlags: u16 {
        /// Object is affine-transformed.
        const AFFINE      = 0x0100;
        /// Object is not rendered at all.
        const HIDDEN      = 0x0200;
        /// Object participates in first-target alpha blending
        /// (semi-transparent graphics mode).
        const GFX_BLEND   = 0x0400;
        /// Object acts as an object-window mask.
        const GFX_WINDOW  = 0x0800;
        /// Mosaic effect applied.
        const MOSAIC      = 0x1000;
        /// 256-color palette mode.
        const COLOR_256   = 0x2000;
    }
}

/// Static attribute defaults for one displayed object.
///
/// `attr1`/`attr2` hold size/flip and tile/priority fields the compositor
/// owns; this crate never decodes them.
#[derive(Debug, Copy, Clone)]
pub struct OamTemplate {
    pub attr0: ObjectFlags,
    pub attr1: u16,
    pub attr2: u16,
}

/// One live render object.
///
/// Owned by the object engine; a sprite hook reads and conditionally mutates
/// these fields every frame, before the object is composited.
#[derive(Debug, Copy, Clone)]
pub struct Sprite {
    pub x: u16,
    pub y: u16,
    /// Index into the object's current animation stream.
    pub anim_frame: u8,
    pub attr0: ObjectFlags,
}

impl Sprite {
    /// Seed a fresh object from template defaults at the given position.
    pub const fn new(oam: &OamTemplate, x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            anim_frame: 0,
            attr0: oam.attr0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_seeds_from_template() {
        let oam = OamTemplate {
            attr0: ObjectFlags::GFX_BLEND,
            attr1: 0xC000,
            attr2: 0x0800,
        };
        let sprite = Sprite::new(&oam, 0x37, 0x20);

        assert_eq!(sprite.x, 0x37);
        assert_eq!(sprite.y, 0x20);
        assert_eq!(sprite.anim_frame, 0);
        assert!(sprite.attr0.contains(ObjectFlags::GFX_BLEND));
    }
}

//! Object-engine seam.
//!
//! The selector screen only ever asks its host engine to upload art and to
//! put objects on the display list, so those services live behind one small
//! trait.

use crate::assets::{Resource, Template};

/// Opaque display-list slot handed back by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ObjHandle(pub u8);

/// Slots for the two stacked halves of one 64×128 figure.
#[derive(Debug, Copy, Clone)]
pub struct ObjPair {
    pub top: ObjHandle,
    pub bottom: ObjHandle,
}

pub trait ObjectEngine {
    /// Upload a compressed tile blob into object video memory.
    fn load_graphics(&mut self, gfx: &Resource);

    /// Upload a palette blob into object palette memory.
    fn load_palette(&mut self, pal: &Resource);

    /// Create an object from `template` at `(x, y)`. `front` asks for
    /// front-of-list stacking so the new object draws above what is
    /// already there.
    fn display_object(&mut self, template: &Template, x: u16, y: u16, front: bool) -> ObjHandle;
}

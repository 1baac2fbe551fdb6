//! Two-option selector screen for sprite engines with hardware alpha
//! blending. A cooperative per-tick state machine fades each option's
//! figure in over the backdrop and runs the choice loop; a per-frame render
//! hook applies the resulting flags to the live sprites.
//!
//! The hardware seams are traits, so the screen runs against real
//! memory-mapped registers or against test doubles.
#![cfg_attr(not(test), no_std)]

pub mod assets;
pub mod audio;
pub mod blend;
pub mod chooser;
pub mod engine;
pub mod input;
pub mod object;

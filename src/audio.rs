//! Sound cue seam.
//!
//! The screen never talks to a mixer directly; it hands short cues to
//! whatever sink the platform wires in.

/// Cues the selector screen can request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cue {
    /// Short confirmation blip, played on toggle and on confirm.
    Blip,
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink that drops every cue, for platforms without sound.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue) {}
}

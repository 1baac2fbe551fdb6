//! The two-option selector screen.
//!
//! The screen fades the first figure in over the backdrop and then the
//! second one next to it. After that it loops, letting the player flip the
//! selection until a confirm press slides the chosen figure to the center
//! and locks the result in. Fades run on the hardware blender; per-frame
//! sprite effects run through [`ChoiceScreen::sprite_hook`].

use log::debug;

use crate::assets::{PickArt, ScreenAssets};
use crate::audio::{AudioSink, Cue};
use crate::blend::{BlendControl, BLEND_SEL_CHOICE, HALF_BLEND};
use crate::engine::{ObjPair, ObjectEngine};
use crate::input::{Button, Pad};
use crate::object::Sprite;

mod fade;
mod hook;
mod state;

pub use fade::{FadeProgress, FADE_START_BG, FADE_START_FG, FADE_STEP_TICKS};
pub use hook::{SLIDE_STEP, SLIDE_TARGET_X};
pub use state::{ChooserState, Pick, PickState};

/// Y of the upper half of each figure; the lower half hangs below it.
pub const SPRITE_Y: u16 = 0x20;
/// Vertical offset of a figure's lower half from its upper half.
pub const HALF_HEIGHT: u16 = 0x40;
/// Starting x for Option A, 64 units right of the slide target.
pub const PICK_A_X: u16 = 0xB7;
/// Starting x for Option B, 64 units left of the slide target.
pub const PICK_B_X: u16 = 0x37;

/// Where the screen is in its scripted flow. Fade phases carry their own
/// progress; nothing lives outside the variant that owns it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Init,
    FadeInA(FadeProgress),
    FadeInB(FadeProgress),
    Choice,
    Slide(Pick),
    Confirmed,
}

/// One run of the selector screen.
///
/// Owns the flag record and the phase; talks to the platform exclusively
/// through the traits passed into [`tick`](ChoiceScreen::tick).
pub struct ChoiceScreen<'a> {
    assets: ScreenAssets<'a>,
    state: ChooserState,
    phase: Phase,
    obj_a: Option<ObjPair>,
    obj_b: Option<ObjPair>,
}

impl<'a> ChoiceScreen<'a> {
    /// Adopts `state` as-is and never clears it; flags left over from an
    /// earlier run stay in effect.
    pub fn new(assets: ScreenAssets<'a>, state: ChooserState) -> Self {
        Self {
            assets,
            state,
            phase: Phase::Init,
            obj_a: None,
            obj_b: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &ChooserState {
        &self.state
    }

    /// Display-list handles for one option's figure, once it is on stage.
    pub fn objects(&self, pick: Pick) -> Option<ObjPair> {
        match pick {
            Pick::A => self.obj_a,
            Pick::B => self.obj_b,
        }
    }

    /// The final selection, once the slide has finished.
    pub fn confirmed(&self) -> Option<Pick> {
        match self.phase {
            Phase::Confirmed => Some(self.state.choice),
            _ => None,
        }
    }

    /// Advance the screen by one scheduler tick. Call exactly once per
    /// frame, before the engine runs the per-sprite hooks.
    pub fn tick(
        &mut self,
        pad: &Pad,
        blend: &mut impl BlendControl,
        engine: &mut impl ObjectEngine,
        audio: &mut impl AudioSink,
    ) {
        match &mut self.phase {
            Phase::Init => {
                blend.set_blend_selection(BLEND_SEL_CHOICE);
                blend.set_blend_weights(FADE_START_BG, FADE_START_FG);
                self.obj_a = Some(load_big_sprite(engine, &self.assets.a, PICK_A_X, SPRITE_Y));
                debug!(target: "chooser", "first option on stage, fading in");
                self.phase = Phase::FadeInA(FadeProgress::start());
            }
            Phase::FadeInA(fade) => {
                fade.step(blend);
                let done = fade.is_done();
                if done {
                    self.state.a.opaque = true;
                    // weights go back to the start pair before the second
                    // figure appears, or it pops in at full strength
                    blend.set_blend_weights(FADE_START_BG, FADE_START_FG);
                    self.obj_b =
                        Some(load_big_sprite(engine, &self.assets.b, PICK_B_X, SPRITE_Y));
                    debug!(target: "chooser", "second option on stage, fading in");
                    self.phase = Phase::FadeInB(FadeProgress::start());
                }
            }
            Phase::FadeInB(fade) => {
                fade.step(blend);
                let done = fade.is_done();
                if done {
                    blend.set_blend_packed(HALF_BLEND);
                    debug!(target: "chooser", "both options up, entering choice loop");
                    self.phase = Phase::Choice;
                }
            }
            Phase::Choice => {
                // left and right both flip; pressing both on one tick is
                // still a single flip
                if pad.just_pressed(Button::Left) || pad.just_pressed(Button::Right) {
                    self.state.choice = self.state.choice.other();
                    audio.play(Cue::Blip);
                    debug!(target: "chooser", "selection moved to {:?}", self.state.choice);
                }

                let chosen = self.state.choice;
                let picked = self.state.pick_mut(chosen);
                picked.animate = true;
                picked.opaque = true;
                let passed = self.state.pick_mut(chosen.other());
                passed.animate = false;
                passed.opaque = false;

                if pad.just_pressed(Button::A) {
                    audio.play(Cue::Blip);
                    let picked = self.state.pick_mut(chosen);
                    picked.center = true;
                    picked.animate = false;
                    debug!(target: "chooser", "confirmed {:?}, sliding to center", chosen);
                    self.phase = Phase::Slide(chosen);
                }
            }
            Phase::Slide(pick) => {
                // the hook moves the sprite; this arm only waits for the
                // one-shot flag to drop
                let pick = *pick;
                if !self.state.pick(pick).center {
                    debug!(target: "chooser", "slide finished, {:?} locked in", pick);
                    self.phase = Phase::Confirmed;
                }
            }
            Phase::Confirmed => {}
        }
    }

    /// Render-hook entry. The engine calls this for each displayed half
    /// every frame, after `tick` and before compositing.
    pub fn sprite_hook(&mut self, pick: Pick, sprite: &mut Sprite) {
        hook::apply(&mut self.state, pick, sprite);
    }
}

/// Upload one option's art and put its two stacked halves on the display
/// list, front of list so they draw over the backdrop.
fn load_big_sprite(engine: &mut impl ObjectEngine, art: &PickArt, x: u16, y: u16) -> ObjPair {
    engine.load_graphics(&art.graphics);
    engine.load_palette(&art.palette);
    let top = engine.display_object(&art.top, x, y, true);
    let bottom = engine.display_object(&art.bottom, x, y + HALF_HEIGHT, true);
    ObjPair { top, bottom }
}

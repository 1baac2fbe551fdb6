//! Pad state with edge detection.
//!
//! The screen only ever consumes freshly produced boolean signals, so the pad
//! is fed once per tick with whatever the platform's poller read; current and
//! previous words are kept so presses can be edge-triggered.

use bit_field::BitField;

/// Valid key bits in the packed key word.
pub const KEY_MASK: u16 = 0x03FF;

#[derive(Debug, Copy, Clone)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
    R,
    L,
}

impl Button {
    /// Bit position in the key word (key-register order).
    const fn idx(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::Select => 2,
            Button::Start => 3,
            Button::Right => 4,
            Button::Left => 5,
            Button::Up => 6,
            Button::Down => 7,
            Button::R => 8,
            Button::L => 9,
        }
    }

    pub const fn mask(self) -> u16 {
        1 << self.idx()
    }
}

/// Current and previous key words.
#[derive(Debug, Default, Copy, Clone)]
pub struct Pad {
    keys: u16,
    keys_last: u16,
}

impl Pad {
    pub const fn new() -> Self {
        Self { keys: 0, keys_last: 0 }
    }

    /// Latch this tick's pressed-key mask (active high).
    pub fn update(&mut self, pressed: u16) {
        self.keys_last = self.keys;
        self.keys = pressed & KEY_MASK;
    }

    /// Latch from a raw key-register value. The register reads active low,
    /// so the word is inverted on the way in.
    pub fn update_from_keyinput(&mut self, raw: u16) {
        self.update(!raw);
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.keys.get_bit(button.idx())
    }

    #[inline]
    pub fn was_pressed(&self, button: Button) -> bool {
        self.keys_last.get_bit(button.idx())
    }

    /// True only on the tick the button went down (edge-trigger).
    #[inline]
    pub fn just_pressed(&self, button: Button) -> bool {
        self.is_pressed(button) && !self.was_pressed(button)
    }

    /// True only on the tick the button was released (edge-trigger).
    #[inline]
    pub fn just_released(&self, button: Button) -> bool {
        !self.is_pressed(button) && self.was_pressed(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edges_once() {
        let mut pad = Pad::new();
        pad.update(Button::Left.mask());
        assert!(pad.just_pressed(Button::Left));

        // held: still pressed, no new edge
        pad.update(Button::Left.mask());
        assert!(pad.is_pressed(Button::Left));
        assert!(!pad.just_pressed(Button::Left));
    }

    #[test]
    fn release_and_repress_retriggers() {
        let mut pad = Pad::new();
        pad.update(Button::A.mask());
        assert!(pad.just_pressed(Button::A));

        pad.update(0);
        assert!(pad.just_released(Button::A));
        assert!(!pad.just_pressed(Button::A));

        pad.update(Button::A.mask());
        assert!(pad.just_pressed(Button::A));
    }

    #[test]
    fn keyinput_word_is_active_low() {
        let mut pad = Pad::new();
        pad.update_from_keyinput(!Button::Right.mask());
        assert!(pad.is_pressed(Button::Right));
        assert!(!pad.is_pressed(Button::Left));

        pad.update_from_keyinput(!0);
        assert!(!pad.is_pressed(Button::Right));
    }
}

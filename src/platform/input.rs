//! Keyboard bindings
//!
//! Arrow keys and WASD drive the same four controls.

use crate::sim::FrameInput;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    A,
    D,
    W,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Space,
        Key::A,
        Key::D,
        Key::W,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Logical controls the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

impl Control {
    /// Keys bound to this control
    pub fn bindings(self) -> &'static [Key] {
        match self {
            Control::RotateLeft => &[Key::Left, Key::A],
            Control::RotateRight => &[Key::Right, Key::D],
            Control::Thrust => &[Key::Up, Key::W],
            Control::Fire => &[Key::Space],
        }
    }
}

/// Anything that can answer held/pressed queries for controls
pub trait ControlSource {
    fn is_held(&self, control: Control) -> bool;
    /// Went down this frame (was up last frame)
    fn is_pressed(&self, control: Control) -> bool;
}

impl FrameInput {
    /// Sample a control source: steering and thrust are held, fire is an edge
    pub fn from_controls(source: &impl ControlSource) -> Self {
        Self {
            rotate_left: source.is_held(Control::RotateLeft),
            rotate_right: source.is_held(Control::RotateRight),
            thrust: source.is_held(Control::Thrust),
            fire: source.is_pressed(Control::Fire),
        }
    }
}

/// Key state with one frame of history
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    down: [bool; Key::ALL.len()],
    was_down: [bool; Key::ALL.len()],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going up or down
    pub fn set(&mut self, key: Key, down: bool) {
        self.down[key.slot()] = down;
    }

    /// Latch the current state as "last frame"
    pub fn end_frame(&mut self) {
        self.was_down = self.down;
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.down[key.slot()]
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.down[key.slot()] && !self.was_down[key.slot()]
    }
}

impl ControlSource for Keyboard {
    fn is_held(&self, control: Control) -> bool {
        control.bindings().iter().any(|&k| self.key_held(k))
    }

    fn is_pressed(&self, control: Control) -> bool {
        control.bindings().iter().any(|&k| self.key_pressed(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_bindings_drive_same_control() {
        let mut kb = Keyboard::new();
        kb.set(Key::A, true);
        assert!(kb.is_held(Control::RotateLeft));
        kb.set(Key::A, false);
        kb.set(Key::Left, true);
        assert!(kb.is_held(Control::RotateLeft));
        assert!(!kb.is_held(Control::RotateRight));

        kb.set(Key::W, true);
        assert!(kb.is_held(Control::Thrust));
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut kb = Keyboard::new();
        kb.set(Key::Space, true);
        assert!(FrameInput::from_controls(&kb).fire);
        kb.end_frame();

        // still held next frame: no second shot
        let input = FrameInput::from_controls(&kb);
        assert!(!input.fire);
        kb.end_frame();

        kb.set(Key::Space, false);
        kb.end_frame();
        kb.set(Key::Space, true);
        assert!(FrameInput::from_controls(&kb).fire);
    }

    #[test]
    fn test_frame_input_sampling() {
        let mut kb = Keyboard::new();
        kb.set(Key::D, true);
        kb.set(Key::Up, true);
        kb.end_frame();
        let input = FrameInput::from_controls(&kb);
        assert_eq!(
            input,
            FrameInput {
                rotate_left: false,
                rotate_right: true,
                thrust: true,
                fire: false,
            }
        );
    }

    #[test]
    fn test_every_key_has_a_slot() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.slot(), i);
        }
    }
}

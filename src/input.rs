//! Input collaborators
//!
//! The simulation only ever sees [`TickInput`] commands that fire once per
//! key press. Turning raw "is this key down" polling into those edges is the
//! job of [`KeyLatch`], which remembers the previous poll for every key.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape
    Quit,
    /// Space
    Start,
    /// A
    Left,
    /// D
    Right,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Quit, Key::Start, Key::Left, Key::Right];

    fn index(self) -> usize {
        match self {
            Key::Quit => 0,
            Key::Start => 1,
            Key::Left => 2,
            Key::Right => 3,
        }
    }
}

/// Something that yields one frame of commands at a time
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Edge detector over raw key states
#[derive(Debug, Clone, Default)]
pub struct KeyLatch {
    /// Held state reported for the current poll
    down: [bool; 4],
    /// Held state as of the previous `take`
    was_down: [bool; 4],
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the raw state of a key for the current frame
    pub fn set(&mut self, key: Key, down: bool) {
        self.down[key.index()] = down;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    /// Commands for keys that went down since the last call
    pub fn take(&mut self) -> TickInput {
        let pressed = |key: Key| self.down[key.index()] && !self.was_down[key.index()];
        let input = TickInput {
            quit: pressed(Key::Quit),
            start: pressed(Key::Start),
            move_left: pressed(Key::Left),
            move_right: pressed(Key::Right),
            idle_mode: false,
        };
        self.was_down = self.down;
        input
    }
}

impl InputSource for KeyLatch {
    fn poll(&mut self) -> TickInput {
        self.take()
    }
}

/// Replays a fixed list of per-frame commands, then reports quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    /// Keep going with empty input instead of quitting when the script ends
    pub hold: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            hold: false,
        }
    }

    /// Autopilot for `frames` frames, then quit
    pub fn idle(frames: usize) -> Self {
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        Self::new(std::iter::repeat_n(idle, frames))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        match self.frames.pop_front() {
            Some(input) => input,
            None if self.hold => TickInput::default(),
            None => TickInput {
                quit: true,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_fires_once() {
        let mut latch = KeyLatch::new();
        latch.set(Key::Left, true);
        assert!(latch.take().move_left);

        // Still held: no repeat
        for _ in 0..5 {
            assert!(!latch.take().move_left);
        }

        latch.set(Key::Left, false);
        assert!(latch.take().is_empty());

        latch.set(Key::Left, true);
        assert!(latch.take().move_left);
    }

    #[test]
    fn test_keys_latch_independently() {
        let mut latch = KeyLatch::new();
        latch.set(Key::Start, true);
        latch.set(Key::Right, true);
        let first = latch.poll();
        assert!(first.start && first.move_right);
        assert!(!first.quit && !first.move_left);

        latch.set(Key::Start, false);
        latch.set(Key::Quit, true);
        let second = latch.poll();
        assert!(second.quit);
        assert!(!second.start && !second.move_right);
        assert!(latch.is_down(Key::Right));
    }

    #[test]
    fn test_scripted_input_quits_when_done() {
        let mut script = ScriptedInput::new([TickInput::start(), TickInput::left()]);
        assert_eq!(script.poll(), TickInput::start());
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.poll(), TickInput::left());
        assert!(script.poll().quit);
    }

    #[test]
    fn test_scripted_input_can_hold() {
        let mut script = ScriptedInput::default();
        script.hold = true;
        assert!(script.poll().is_empty());
    }

    #[test]
    fn test_idle_script() {
        let mut script = ScriptedInput::idle(2);
        assert!(script.poll().idle_mode);
        assert!(script.poll().idle_mode);
        assert!(script.poll().quit);
    }

    #[test]
    fn test_key_indices_are_distinct() {
        let mut seen = [false; 4];
        for key in Key::ALL {
            assert!(!seen[key.index()]);
            seen[key.index()] = true;
        }
    }
}

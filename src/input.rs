//! Held-key input state
//!
//! The host forwards discrete key-down/key-up events; each simulation reads
//! the resulting held-key set once at the start of its tick. Last state wins,
//! no queuing or coalescing.

/// Keys the games recognize. Anything else is ignored at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
}

impl Key {
    /// All keys, in the order Snake polls them (matches the original game).
    pub const ALL: [Key; 4] = [Key::Left, Key::Up, Key::Right, Key::Down];

    /// Parse a browser `KeyboardEvent::key()` value. Unrecognized keys map
    /// to `None` and are dropped by the host.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowUp" => Some(Key::Up),
            "ArrowRight" => Some(Key::Right),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Up => 1,
            Key::Right => 2,
            Key::Down => 3,
        }
    }
}

/// Set of currently held keys, merged from asynchronous key events.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Release everything (view teardown, window blur).
    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}

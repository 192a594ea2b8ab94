
//! Keyboard state, updated by the window once per frame

const KEYBOARD_KEYS: usize = 256; // This MUST be `u8::max_value() + 1`

/// Passed to `Window::poll_events` each frame to get updated.
#[derive(Clone)]
pub struct Input {
    /// The state of keyboard keys, indexed by scancode. Can also be accessed more ergonomically
    /// through the `Input::key()` method
    pub keys: [KeyState; KEYBOARD_KEYS],

    /// Set if any key changed state in the current frame
    pub changed: bool,
}

impl Input {
    pub fn new() -> Input {
        Input {
            keys: [KeyState::Up; KEYBOARD_KEYS],
            changed: false,
        }
    }

    /// Moves every key on from the transitional states of the last frame. Called by
    /// `Window::poll_events` before new events are handled.
    pub fn refresh(&mut self) {
        for state in self.keys.iter_mut() {
            *state = match *state {
                KeyState::Released => KeyState::Up,
                KeyState::Pressed | KeyState::PressedRepeat => KeyState::Down,
                other => other,
            };
        }
        self.changed = false;
    }

    /// Records a key press or release for the given scancode.
    pub fn handle_key(&mut self, scancode: u8, pressed: bool) {
        self.changed = true;

        let state = &mut self.keys[scancode as usize];
        *state = if pressed {
            if state.down() {
                KeyState::PressedRepeat
            } else {
                KeyState::Pressed
            }
        } else {
            KeyState::Released
        };
    }

    /// The state of the given keyboard key. Note that `Key` represent scancodes.
    /// See [`Key`](enum.Key.html) for more info
    pub fn key(&self, key: Key) -> KeyState {
        self.keys[key as usize]
    }

    /// True if the key went down this frame, counting key repeat.
    pub fn pressed(&self, key: Key) -> bool {
        self.key(key).pressed_repeat()
    }

    pub fn down(&self, key: Key) -> bool {
        self.key(key).down()
    }
}

impl Default for Input {
    fn default() -> Input { Input::new() }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyState {
    /// The button is not held down.
    Up,
    /// The button is being held down. In the previous frame it was not held down.
    Pressed,
    /// The button is being held down, and its repeat action triggered
    PressedRepeat,
    /// The button is being held down.
    Down,
    /// The button is not being held down. In the previous frame it was held down.
    Released,
}

impl KeyState {
    /// Returns true if the button is being held down (`Down`, `Pressed` or `PressedRepeat`)
    pub fn down(self) -> bool {
        match self {
            KeyState::Up | KeyState::Released => false,
            KeyState::Down | KeyState::Pressed | KeyState::PressedRepeat => true,
        }
    }

    pub fn up(self) -> bool {
        !self.down()
    }

    /// Returns true if the button is being held down, but was not held down in the last
    /// frame (`Pressed`)
    pub fn pressed(self) -> bool { self == KeyState::Pressed }

    /// Returns true either if this button was just pressed, or if the repeat action has been
    /// triggered by the key being held down for an extended amount of time.
    pub fn pressed_repeat(self) -> bool {
        self == KeyState::Pressed || self == KeyState::PressedRepeat
    }

    pub fn released(self) -> bool { self == KeyState::Released }
}

/// Codes for the keys the demos use. These are X11 scancodes, so they refer to a position on the
/// keyboard rather than a specific symbol. The names are based on the american keyboard layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Key {
    Key1 = 0xa, Key2 = 0xb, Key3 = 0xc, Key4 = 0xd, Key5 = 0xe,
    Key6 = 0xf, Key7 = 0x10, Key8 = 0x11, Key9 = 0x12, Key0 = 0x13,

    Q = 0x18, W = 0x19, E = 0x1a, R = 0x1b, T = 0x1c, Y = 0x1d, U = 0x1e, I = 0x1f, O = 0x20, P = 0x21,
    A = 0x26, S = 0x27, D = 0x28, F = 0x29, G = 0x2a, H = 0x2b, J = 0x2c, K = 0x2d, L = 0x2e,
    Z = 0x34, X = 0x35, C = 0x36, V = 0x37, B = 0x38, N = 0x39, M = 0x3a,

    Space = 0x41, Escape = 0x9, Return = 0x24,

    Right = 0x72, Left = 0x71, Down = 0x74, Up = 0x6f,

    F1 = 0x43, F2 = 0x44, F3 = 0x45, F4 = 0x46,  F5 = 0x47,  F6 = 0x48,
    F7 = 0x49, F8 = 0x4a, F9 = 0x4b, F10 = 0x4c, F11 = 0x5f, F12 = 0x60,
}

impl Key {
    /// The number keys `1` to `9`, in order
    pub const DIGITS: [Key; 9] = [
        Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5,
        Key::Key6, Key::Key7, Key::Key8, Key::Key9,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release() {
        let mut input = Input::new();
        assert_eq!(KeyState::Up, input.key(Key::W));

        input.handle_key(Key::W as u8, true);
        assert_eq!(KeyState::Pressed, input.key(Key::W));
        assert!(input.pressed(Key::W));
        assert!(input.changed);

        input.refresh();
        assert_eq!(KeyState::Down, input.key(Key::W));
        assert!(!input.pressed(Key::W));
        assert!(input.down(Key::W));
        assert!(!input.changed);

        // Holding the key triggers the repeat action
        input.handle_key(Key::W as u8, true);
        assert_eq!(KeyState::PressedRepeat, input.key(Key::W));
        assert!(input.pressed(Key::W));

        input.handle_key(Key::W as u8, false);
        assert!(input.key(Key::W).released());

        input.refresh();
        assert_eq!(KeyState::Up, input.key(Key::W));
    }

    #[test]
    fn keys_are_independent() {
        let mut input = Input::new();
        input.handle_key(Key::Left as u8, true);

        assert!(input.down(Key::Left));
        assert!(input.key(Key::Right).up());
        assert_eq!(Key::Key3, Key::DIGITS[2]);
    }
}

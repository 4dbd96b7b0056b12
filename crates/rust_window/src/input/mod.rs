//! Input state tracking
//!
//! The pressed maps here are only written as events are dispatched to the
//! application, never from raw platform polling, so queries made from inside a
//! hook agree with what the application has already been told.

mod keys;

pub use keys::{KeyboardKey, MouseButton};

use crate::foundation::math::Position;

/// Number of slots in the keyboard pressed map, covering every GLFW key code
pub const KEY_CODE_COUNT: usize = KeyboardKey::LAST.code() as usize + 1;

/// Number of slots in the mouse button pressed map
pub const MOUSE_BUTTON_COUNT: usize = MouseButton::ALL.len();

/// A keyboard key or a mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Keyboard key
    Key(KeyboardKey),
    /// Mouse button
    Mouse(MouseButton),
}

impl From<KeyboardKey> for Button {
    fn from(key: KeyboardKey) -> Self {
        Button::Key(key)
    }
}

impl From<MouseButton> for Button {
    fn from(button: MouseButton) -> Self {
        Button::Mouse(button)
    }
}

/// Pressed state for keys and mouse buttons plus the last known cursor state
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    keyboard_keys: [bool; KEY_CODE_COUNT],
    mouse_buttons: [bool; MOUSE_BUTTON_COUNT],
    mouse_entered: bool,
    mouse_position: Position,
}

impl InputState {
    /// Create an input state with nothing pressed
    pub fn new() -> Self {
        Self {
            keyboard_keys: [false; KEY_CODE_COUNT],
            mouse_buttons: [false; MOUSE_BUTTON_COUNT],
            mouse_entered: false,
            mouse_position: Position::zeros(),
        }
    }

    /// Record a key press or release
    ///
    /// Returns `false` when the key has no slot in the pressed map
    /// (`KeyboardKey::Unknown`), in which case nothing is recorded.
    pub fn handle_key_input(&mut self, key: KeyboardKey, pressed: bool) -> bool {
        match key_index(key) {
            Some(index) => {
                self.keyboard_keys[index] = pressed;
                true
            }
            None => false,
        }
    }

    /// Record a mouse button press or release
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.mouse_buttons[button_index(button)] = pressed;
    }

    /// Record the cursor entering or leaving the window
    pub fn handle_mouse_enter(&mut self, entered: bool) {
        self.mouse_entered = entered;
    }

    /// Record a cursor move
    pub fn handle_mouse_move(&mut self, position: Position) {
        self.mouse_position = position;
    }

    /// Whether a key or mouse button is currently held
    pub fn is_pressed(&self, button: impl Into<Button>) -> bool {
        match button.into() {
            Button::Key(key) => self.is_key_pressed(key),
            Button::Mouse(button) => self.is_mouse_button_pressed(button),
        }
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyboardKey) -> bool {
        key_index(key).is_some_and(|index| self.keyboard_keys[index])
    }

    /// Whether a mouse button is currently held
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons[button_index(button)]
    }

    /// Either control key is held
    pub fn ctrl_pressed(&self) -> bool {
        self.either_pressed(KeyboardKey::LeftControl, KeyboardKey::RightControl)
    }

    /// Either alt key is held
    pub fn alt_pressed(&self) -> bool {
        self.either_pressed(KeyboardKey::LeftAlt, KeyboardKey::RightAlt)
    }

    /// Either shift key is held
    pub fn shift_pressed(&self) -> bool {
        self.either_pressed(KeyboardKey::LeftShift, KeyboardKey::RightShift)
    }

    /// Either super key is held
    pub fn super_pressed(&self) -> bool {
        self.either_pressed(KeyboardKey::LeftSuper, KeyboardKey::RightSuper)
    }

    /// Whether the cursor is inside the window
    pub fn mouse_entered(&self) -> bool {
        self.mouse_entered
    }

    /// Last dispatched cursor position
    pub fn mouse_position(&self) -> Position {
        self.mouse_position
    }

    fn either_pressed(&self, left: KeyboardKey, right: KeyboardKey) -> bool {
        self.is_key_pressed(left) || self.is_key_pressed(right)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn key_index(key: KeyboardKey) -> Option<usize> {
    usize::try_from(key.code())
        .ok()
        .filter(|&index| index < KEY_CODE_COUNT)
}

fn button_index(button: MouseButton) -> usize {
    // Button codes are 0..MOUSE_BUTTON_COUNT by construction
    button.code() as usize
}

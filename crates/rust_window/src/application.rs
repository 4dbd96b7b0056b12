//! Application trait and lifecycle hooks

use crate::foundation::math::{Position, ScrollDelta, Size};
use crate::input::{KeyboardKey, MouseButton};
use crate::session::Session;

/// Application lifecycle trait
///
/// Implement this trait and pass the application to [`Session::run`]. Every
/// hook has a default, so override only what you need. Hooks receive the
/// running session for queries, window changes and closing.
///
/// Hooks fire on the session's thread, one at a time, in this order:
/// `on_app_start`, `on_load_resources`, then per frame `on_frame_start`, the
/// event hooks in the order the events arrived, `on_update`, `on_post_draw`,
/// and finally `on_app_stop`.
pub trait Application {
    /// Called before the window is created
    ///
    /// Window setters called here decide how the window is created.
    fn on_app_start(&mut self, _session: &mut Session) {}

    /// Called right after the window is created with its OpenGL context current
    fn on_load_resources(&mut self, _session: &mut Session) {}

    /// Called at the start of every frame, before events are polled
    fn on_frame_start(&mut self, _session: &mut Session) {}

    /// Called when a framebuffer resize is dispatched
    ///
    /// [`Session::get_window_size`] still returns the previous size while this
    /// runs; it is updated once the hook returns.
    fn on_framebuffer_size(&mut self, _session: &mut Session, _size: Size) {}

    /// Called when a mouse button event is dispatched
    fn on_mouse_button(&mut self, _session: &mut Session, _button: MouseButton, _pressed: bool) {}

    /// Called when a cursor move is dispatched
    fn on_mouse_position(&mut self, _session: &mut Session, _position: Position) {}

    /// Called when the cursor enters or leaves the window
    fn on_mouse_enter(&mut self, _session: &mut Session, _entered: bool) {}

    /// Called when a scroll event is dispatched
    fn on_mouse_scroll(&mut self, _session: &mut Session, _translation: ScrollDelta) {}

    /// Called when a keyboard key event is dispatched
    fn on_keyboard_key(&mut self, _session: &mut Session, _key: KeyboardKey, _pressed: bool) {}

    /// Called when a text input character is dispatched
    fn on_keyboard_character(&mut self, _session: &mut Session, _codepoint: u32) {}

    /// Called when the window is closed by the user or [`Session::try_close`]
    ///
    /// Return `false` to keep running. [`Session::force_close`] never asks.
    fn on_try_close(&mut self, _session: &mut Session) -> bool {
        true
    }

    /// Called once per frame after all events have been dispatched
    fn on_update(&mut self, _session: &mut Session) {}

    /// Called once per frame after drawing is done
    fn on_post_draw(&mut self, _session: &mut Session) {}

    /// Called right before the window is destroyed
    fn on_app_stop(&mut self, _session: &mut Session) {}
}

//! Session-owned window state

use crate::config::WindowConfig;
use crate::events::EventQueue;
use crate::input::InputState;

/// Lifecycle phase of a session
///
/// `NotRunning → Starting → Running → Stopping → NotRunning`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No session active; `run` may be called
    #[default]
    NotRunning,
    /// `on_app_start`, window creation and `on_load_resources`
    Starting,
    /// The frame loop
    Running,
    /// `on_app_stop` and teardown
    Stopping,
}

/// Everything a session knows about its window
///
/// Reset to `Default` whenever a session ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowState {
    /// Desired configuration, mirrored from the window manager once a window exists
    pub config: WindowConfig,

    /// Current lifecycle phase
    pub phase: SessionState,

    /// Leave the loop at the next check without asking the application
    pub force_close: bool,

    /// Pressed maps and cursor state as of the last dispatched event
    pub input: InputState,

    /// Events waiting for the next dispatch pass
    pub events: EventQueue,
}

impl WindowState {
    /// Whether a session is active in any phase
    pub fn is_running(&self) -> bool {
        self.phase != SessionState::NotRunning
    }

    /// Restore every field to its default value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PlatformEvent;
    use crate::input::KeyboardKey;

    #[test]
    fn test_reset() {
        let mut state = WindowState::default();
        state.config.title = "Running".to_string();
        state.phase = SessionState::Running;
        state.force_close = true;
        state.input.handle_key_input(KeyboardKey::A, true);
        state.events.push(PlatformEvent::WindowClose);
        assert!(state.is_running());

        state.reset();
        assert_eq!(state, WindowState::default());
        assert!(!state.is_running());
    }
}

//! Platform events and the per-frame pending queue
//!
//! The platform adapter turns every native callback into exactly one
//! [`PlatformEvent`] and appends it to the [`EventQueue`]. Nothing is filtered
//! or coalesced: two identical cursor moves in one poll are two events.

use crate::foundation::math::{Position, ScrollDelta, Size};
use crate::input::{KeyboardKey, MouseButton};

/// Everything the window manager can report in one polling pass
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Framebuffer was resized
    FramebufferSize {
        /// New framebuffer size in pixels
        size: Size,
    },

    /// Mouse button was pressed or released
    MouseButton {
        /// The button that changed
        button: MouseButton,
        /// Whether the button is now held
        pressed: bool,
    },

    /// Cursor moved
    MousePosition {
        /// New cursor position
        position: Position,
    },

    /// Cursor entered or left the window
    MouseEnter {
        /// Whether the cursor is now inside the window
        entered: bool,
    },

    /// Scroll wheel or touchpad scroll
    MouseScroll {
        /// Scroll translation on both axes
        translation: ScrollDelta,
    },

    /// Keyboard key was pressed, repeated or released
    KeyboardKey {
        /// The key that changed
        key: KeyboardKey,
        /// Whether the key is now held
        pressed: bool,
    },

    /// Text input produced a character
    KeyboardCharacter {
        /// Unicode code point
        codepoint: u32,
    },

    /// The user or the application asked for the window to close
    WindowClose,
}

/// Ordered queue of events waiting for the next dispatch pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventQueue {
    events: Vec<PlatformEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event behind everything already queued
    pub fn push(&mut self, event: PlatformEvent) {
        log::trace!("Queued {:?}", event);
        self.events.push(event);
    }

    /// Take every queued event, leaving the queue empty
    pub fn take(&mut self) -> Vec<PlatformEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<PlatformEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = PlatformEvent>>(&mut self, iter: T) {
        for event in iter {
            self.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_preserves_order_and_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(PlatformEvent::MouseEnter { entered: true });
        queue.push(PlatformEvent::WindowClose);
        queue.push(PlatformEvent::KeyboardCharacter { codepoint: 'a' as u32 });

        let events = queue.take();
        assert!(queue.is_empty());
        assert_eq!(
            events,
            vec![
                PlatformEvent::MouseEnter { entered: true },
                PlatformEvent::WindowClose,
                PlatformEvent::KeyboardCharacter { codepoint: 'a' as u32 },
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut queue = EventQueue::new();
        let moved = PlatformEvent::MousePosition { position: Position::new(1.0, 2.0) };
        queue.extend([moved.clone(), moved.clone(), moved]);
        assert_eq!(queue.len(), 3);
    }
}

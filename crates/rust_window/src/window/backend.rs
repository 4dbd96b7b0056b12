//! Backend-agnostic window management traits
//!
//! The session only ever needs to create one window, pump its events into the
//! pending queue and forward attribute changes. Everything else about the
//! windowing library stays behind these traits.

use std::ffi::c_void;

use crate::config::WindowConfig;
use crate::events::EventQueue;
use crate::foundation::math::Size;
use crate::window::WindowResult;

/// Factory for native windows
///
/// Implementations initialize the windowing library lazily in
/// [`Platform::create_window`] and must leave nothing initialized when it fails.
pub trait Platform {
    /// Initialize the library and create a window from `config`
    ///
    /// The returned window has its OpenGL context current on the calling
    /// thread and reports all eight event categories through
    /// [`WindowBackend::poll_events`].
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>>;
}

/// A live native window
///
/// Dropping the backend destroys the window and releases the library.
///
/// # Thread Safety
/// Not `Send`: GLFW windows must stay on the thread that created them.
pub trait WindowBackend {
    /// Deliver pending OS messages
    ///
    /// Appends one event per native callback to `queue`, in the order the
    /// library reported them. Must not interpret or coalesce events.
    fn poll_events(&mut self, queue: &mut EventQueue);

    /// Set the window title text
    fn set_title(&mut self, title: &str);

    /// Resize the window's client area
    fn set_size(&mut self, size: Size);

    /// Show or hide the window
    fn set_visible(&mut self, visible: bool);

    /// Allow or forbid resizing by dragging the window edges
    fn set_resizable(&mut self, resizable: bool);

    /// Show or hide the title bar and border
    fn set_decorated(&mut self, decorated: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Address of an OpenGL function in the current context, or null
    fn get_proc_address(&mut self, name: &str) -> *const c_void;
}

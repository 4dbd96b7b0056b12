//! GLFW-based window management with an OpenGL context
//!
//! Creates the single application window, makes its context current and turns
//! GLFW's queued window events into [`PlatformEvent`]s.

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;

use glfw::{Action, Context, WindowEvent};

use crate::config::WindowConfig;
use crate::events::{EventQueue, PlatformEvent};
use crate::foundation::math::{self, Position, ScrollDelta, Size};
use crate::input::{KeyboardKey, MouseButton};
use crate::window::backend::{Platform, WindowBackend};
use crate::window::{WindowError, WindowResult};

/// Creates GLFW windows
///
/// GLFW is initialized on each [`Platform::create_window`] call and torn down
/// again when the returned window is dropped.
#[derive(Debug, Default)]
pub struct GlfwPlatform;

impl GlfwPlatform {
    /// Create the platform; GLFW itself is not touched until a window is requested
    pub fn new() -> Self {
        Self
    }
}

impl Platform for GlfwPlatform {
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>> {
        GlfwWindow::new(config).map(|window| Box::new(window) as Box<dyn WindowBackend>)
    }
}

/// GLFW window wrapper with proper resource management
///
/// Field order matters: the window is destroyed before the last `Glfw` handle
/// goes away and terminates the library.
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    glfw: glfw::Glfw,
}

impl GlfwWindow {
    /// Initialize GLFW and create a window with a current OpenGL context
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        if !math::is_positive_size(config.size()) {
            return Err(WindowError::InvalidSize {
                width: config.width,
                height: config.height,
            });
        }
        let (width, height) = (config.width.unsigned_abs(), config.height.unsigned_abs());

        let last_error = Rc::new(RefCell::new(None));
        let mut glfw = glfw::init(error_callback(Rc::clone(&last_error))).map_err(|e| {
            WindowError::InitializationFailed(failure_message(
                &format!("{e:?}"),
                last_error.borrow_mut().take(),
            ))
        })?;

        glfw.default_window_hints();
        glfw.window_hint(glfw::WindowHint::ContextVersion(
            config.context_version.major,
            config.context_version.minor,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Visible(config.visible));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        glfw.window_hint(glfw::WindowHint::Decorated(config.decorated));

        // On failure `glfw` is dropped here, which terminates the library
        let (mut window, events) = glfw
            .create_window(width, height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                WindowError::CreationFailed(failure_message(
                    &format!(
                        "{}x{} window with an OpenGL {}.{} context",
                        width, height, config.context_version.major, config.context_version.minor,
                    ),
                    last_error.borrow_mut().take(),
                ))
            })?;

        window.make_current();

        // Set up event polling for every category the session dispatches
        window.set_framebuffer_size_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_cursor_enter_polling(true);
        window.set_scroll_polling(true);
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_close_polling(true);

        Ok(Self {
            window,
            events,
            glfw,
        })
    }
}

impl WindowBackend for GlfwWindow {
    fn poll_events(&mut self, queue: &mut EventQueue) {
        self.glfw.poll_events();

        for (_, event) in glfw::flush_messages(&self.events) {
            if matches!(event, WindowEvent::Close) {
                // Closing is decided by the application, not by GLFW's flag
                self.window.set_should_close(false);
            }
            if let Some(event) = translate_event(event) {
                queue.push(event);
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_size(&mut self, size: Size) {
        self.window.set_size(size.x, size.y);
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.window.show();
        } else {
            self.window.hide();
        }
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.window.set_resizable(resizable);
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.window.set_decorated(decorated);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn get_proc_address(&mut self, name: &str) -> *const c_void {
        self.window.get_proc_address(name) as *const c_void
    }
}

/// GLFW error callback that logs each error and keeps the latest description
fn error_callback(last_error: Rc<RefCell<Option<String>>>) -> impl FnMut(glfw::Error, String) {
    move |error, description| {
        log::error!("GLFW error {:?}: {}", error, description);
        *last_error.borrow_mut() = Some(description);
    }
}

/// Describe a failed GLFW call, preferring GLFW's own description
fn failure_message(what: &str, native: Option<String>) -> String {
    match native {
        Some(description) => format!("{what}: {description}"),
        None => what.to_string(),
    }
}

/// Convert a GLFW window event into the session's event model
///
/// Returns `None` for event kinds the session does not dispatch. Key repeats
/// count as pressed.
pub fn translate_event(event: WindowEvent) -> Option<PlatformEvent> {
    let event = match event {
        WindowEvent::FramebufferSize(width, height) => PlatformEvent::FramebufferSize {
            size: Size::new(width, height),
        },
        WindowEvent::MouseButton(button, action, _) => PlatformEvent::MouseButton {
            button: MouseButton::from_code(button as i32)?,
            pressed: action != Action::Release,
        },
        WindowEvent::CursorPos(x, y) => PlatformEvent::MousePosition {
            position: Position::new(x, y),
        },
        WindowEvent::CursorEnter(entered) => PlatformEvent::MouseEnter { entered },
        WindowEvent::Scroll(x, y) => PlatformEvent::MouseScroll {
            translation: ScrollDelta::new(x, y),
        },
        WindowEvent::Key(key, _, action, _) => PlatformEvent::KeyboardKey {
            key: KeyboardKey::from_code(key as i32),
            pressed: action != Action::Release,
        },
        WindowEvent::Char(character) => PlatformEvent::KeyboardCharacter {
            codepoint: u32::from(character),
        },
        WindowEvent::Close => PlatformEvent::WindowClose,
        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_key_actions() {
        let press = WindowEvent::Key(glfw::Key::R, 0, Action::Press, glfw::Modifiers::Control);
        let repeat = WindowEvent::Key(glfw::Key::R, 0, Action::Repeat, glfw::Modifiers::empty());
        let release = WindowEvent::Key(glfw::Key::R, 0, Action::Release, glfw::Modifiers::empty());

        assert_eq!(
            translate_event(press),
            Some(PlatformEvent::KeyboardKey { key: KeyboardKey::R, pressed: true })
        );
        assert_eq!(
            translate_event(repeat),
            Some(PlatformEvent::KeyboardKey { key: KeyboardKey::R, pressed: true })
        );
        assert_eq!(
            translate_event(release),
            Some(PlatformEvent::KeyboardKey { key: KeyboardKey::R, pressed: false })
        );
    }

    #[test]
    fn test_translate_key_codes() {
        let keys = [
            (glfw::Key::Space, KeyboardKey::Space),
            (glfw::Key::Escape, KeyboardKey::Escape),
            (glfw::Key::LeftControl, KeyboardKey::LeftControl),
            (glfw::Key::RightSuper, KeyboardKey::RightSuper),
            (glfw::Key::Menu, KeyboardKey::Menu),
            (glfw::Key::Unknown, KeyboardKey::Unknown),
        ];

        for (native, expected) in keys {
            let event = WindowEvent::Key(native, 0, Action::Press, glfw::Modifiers::empty());
            assert_eq!(
                translate_event(event),
                Some(PlatformEvent::KeyboardKey { key: expected, pressed: true })
            );
        }
    }

    #[test]
    fn test_translate_mouse_events() {
        assert_eq!(
            translate_event(WindowEvent::MouseButton(
                glfw::MouseButton::Button2,
                Action::Press,
                glfw::Modifiers::empty()
            )),
            Some(PlatformEvent::MouseButton { button: MouseButton::RIGHT, pressed: true })
        );
        assert_eq!(
            translate_event(WindowEvent::CursorPos(10.0, 20.5)),
            Some(PlatformEvent::MousePosition { position: Position::new(10.0, 20.5) })
        );
        assert_eq!(
            translate_event(WindowEvent::CursorEnter(false)),
            Some(PlatformEvent::MouseEnter { entered: false })
        );
        assert_eq!(
            translate_event(WindowEvent::Scroll(0.0, -1.0)),
            Some(PlatformEvent::MouseScroll { translation: ScrollDelta::new(0.0, -1.0) })
        );
    }

    #[test]
    fn test_translate_window_events() {
        assert_eq!(
            translate_event(WindowEvent::FramebufferSize(800, 600)),
            Some(PlatformEvent::FramebufferSize { size: Size::new(800, 600) })
        );
        assert_eq!(
            translate_event(WindowEvent::Char('é')),
            Some(PlatformEvent::KeyboardCharacter { codepoint: 0xE9 })
        );
        assert_eq!(translate_event(WindowEvent::Close), Some(PlatformEvent::WindowClose));
        assert_eq!(translate_event(WindowEvent::Focus(true)), None);
    }

    #[test]
    fn test_failure_message_includes_native_description() {
        assert_eq!(
            failure_message("Internal", Some("X11: Failed to open display".to_string())),
            "Internal: X11: Failed to open display"
        );
        assert_eq!(failure_message("Internal", None), "Internal");
    }

    #[test]
    fn test_error_callback_keeps_latest_description() {
        let last_error = Rc::new(RefCell::new(None));
        let mut callback = error_callback(Rc::clone(&last_error));

        callback(glfw::Error::PlatformError, "first".to_string());
        callback(
            glfw::Error::VersionUnavailable,
            "GLX: Failed to create context".to_string(),
        );

        assert_eq!(
            last_error.borrow_mut().take().as_deref(),
            Some("GLX: Failed to create context")
        );
    }

    #[test]
    fn test_invalid_size_is_rejected_before_init() {
        let config = WindowConfig::default().with_size(0, 400);
        assert!(matches!(
            GlfwWindow::new(&config),
            Err(WindowError::InvalidSize { width: 0, height: 400 })
        ));
    }
}

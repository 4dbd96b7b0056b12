//! Session and dispatch loop
//!
//! A [`Session`] owns one window for the duration of [`Session::run`] and all
//! state the application can query: window configuration, pressed keys and
//! buttons, and the cursor.

use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

use crate::{
    application::Application,
    config::WindowConfig,
    events::PlatformEvent,
    foundation::math::{self, Position, Size},
    input::{Button, InputState},
    window::{
        GlfwPlatform, Platform, SessionState, WindowBackend, WindowError, WindowResult,
        WindowState,
    },
};

/// Main session struct
///
/// Only one session can run at a time per `Session` value; calling
/// [`Session::run`] from inside a hook fails with
/// [`WindowError::AlreadyRunning`].
pub struct Session {
    /// Mirrored window configuration, input state and pending events
    state: WindowState,

    /// Creates the native window when the session starts
    platform: Box<dyn Platform>,

    /// The live window, present between creation and teardown
    backend: Option<Box<dyn WindowBackend>>,
}

impl Session {
    /// Create a session backed by GLFW
    pub fn new() -> Self {
        Self::with_platform(Box::new(GlfwPlatform::new()))
    }

    /// Create a GLFW session that will open a window from `config`
    pub fn with_config(config: WindowConfig) -> Self {
        let mut session = Self::new();
        session.apply_config(&config);
        session
    }

    /// Create a session on a custom windowing backend
    pub fn with_platform(platform: Box<dyn Platform>) -> Self {
        Self {
            state: WindowState::default(),
            platform,
            backend: None,
        }
    }

    /// Run the session with the given application
    ///
    /// Blocks until the application closes. On return, whether by close,
    /// error or panic, the window is destroyed and all state is back to its
    /// defaults.
    ///
    /// # Errors
    /// [`WindowError::AlreadyRunning`] if this session is already running,
    /// leaving it untouched. Window creation errors after `on_app_start`.
    pub fn run<A: Application + ?Sized>(&mut self, app: &mut A) -> WindowResult<()> {
        if self.is_running() {
            log::warn!("Session is already running");
            return Err(WindowError::AlreadyRunning);
        }

        log::info!("Starting session...");
        self.state.phase = SessionState::Starting;

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run_session(app)));
        self.terminate();

        match result {
            Ok(Ok(())) => {
                log::info!("Session shutdown complete");
                Ok(())
            }
            Ok(Err(e)) => {
                log::error!("Session failed to start: {}", e);
                Err(e)
            }
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    fn run_session<A: Application + ?Sized>(&mut self, app: &mut A) -> WindowResult<()> {
        app.on_app_start(self);

        let backend = self.platform.create_window(&self.state.config)?;
        log::info!(
            "Created {}x{} window \"{}\"",
            self.state.config.width,
            self.state.config.height,
            self.state.config.title
        );
        self.backend = Some(backend);

        app.on_load_resources(self);

        self.state.force_close = false;
        self.state.phase = SessionState::Running;
        log::info!("Starting main loop...");

        let mut should_close = false;
        while !should_close && !self.state.force_close {
            app.on_frame_start(self);
            self.poll_events();
            if let Some(close) = self.dispatch_events(app) {
                should_close = close;
            }
            app.on_update(self);
            app.on_post_draw(self);
        }

        if self.state.force_close {
            log::info!("Session force closed");
        }
        self.state.phase = SessionState::Stopping;
        app.on_app_stop(self);
        Ok(())
    }

    fn poll_events(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.poll_events(&mut self.state.events);
        }
    }

    /// Dispatch every pending event to `app`, in queue order
    ///
    /// Returns the result of the last `on_try_close` in the batch, if any.
    /// Events queued by hooks during the pass wait for the next frame.
    fn dispatch_events<A: Application + ?Sized>(&mut self, app: &mut A) -> Option<bool> {
        let mut should_close = None;

        for event in self.state.events.take() {
            log::trace!("Dispatching {:?}", event);

            match event {
                PlatformEvent::FramebufferSize { size } => {
                    app.on_framebuffer_size(self, size);
                    self.state.config.width = size.x;
                    self.state.config.height = size.y;
                }
                PlatformEvent::MouseButton { button, pressed } => {
                    app.on_mouse_button(self, button, pressed);
                    self.state.input.handle_mouse_button(button, pressed);
                }
                PlatformEvent::MouseEnter { entered } => {
                    app.on_mouse_enter(self, entered);
                    self.state.input.handle_mouse_enter(entered);
                }
                PlatformEvent::MousePosition { position } => {
                    app.on_mouse_position(self, position);
                    self.state.input.handle_mouse_move(position);
                }
                PlatformEvent::MouseScroll { translation } => {
                    app.on_mouse_scroll(self, translation);
                }
                PlatformEvent::KeyboardKey { key, pressed } => {
                    app.on_keyboard_key(self, key, pressed);
                    if !self.state.input.handle_key_input(key, pressed) {
                        log::warn!("Key {:?} has no pressed-state slot", key);
                    }
                }
                PlatformEvent::KeyboardCharacter { codepoint } => {
                    app.on_keyboard_character(self, codepoint);
                }
                PlatformEvent::WindowClose => {
                    should_close = Some(app.on_try_close(self));
                }
            }
        }

        should_close
    }

    /// Destroy the window and restore every value to its default
    fn terminate(&mut self) {
        if self.backend.take().is_some() {
            log::debug!("Window destroyed");
        }
        self.state.reset();
    }

    /// Whether a session is active in any phase
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Current lifecycle phase
    pub fn state(&self) -> SessionState {
        self.state.phase
    }

    /// Whether a native window currently exists
    pub fn has_window(&self) -> bool {
        self.backend.is_some()
    }

    /// Ask the application to close
    ///
    /// Queues a close request that reaches `on_try_close` on the next
    /// dispatch pass.
    pub fn try_close(&mut self) {
        self.state.events.push(PlatformEvent::WindowClose);
    }

    /// Close without asking the application
    ///
    /// The current frame finishes, including `on_update` and `on_post_draw`,
    /// and the loop exits at its next check.
    pub fn force_close(&mut self) {
        log::debug!("Force close requested");
        self.state.force_close = true;
    }

    /// Current mirrored window configuration
    pub fn config(&self) -> &WindowConfig {
        &self.state.config
    }

    /// Apply every field of `config` through the window setters
    ///
    /// The context version only takes effect at window creation.
    pub fn apply_config(&mut self, config: &WindowConfig) {
        self.set_window_title(config.title.clone());
        self.set_window_size(config.size());
        self.set_window_visible(config.visible);
        self.set_window_resizable(config.resizable);
        self.set_window_decorated(config.decorated);
        self.state.config.context_version = config.context_version;
    }

    /// Get the window title
    pub fn get_window_title(&self) -> &str {
        &self.state.config.title
    }

    /// Set the window title
    pub fn set_window_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if let Some(backend) = self.backend.as_mut() {
            log::debug!("Setting window title to \"{}\"", title);
            backend.set_title(&title);
        }
        self.state.config.title = title;
    }

    /// Get the window size
    ///
    /// Updated from framebuffer resize events after `on_framebuffer_size`
    /// returns.
    pub fn get_window_size(&self) -> Size {
        self.state.config.size()
    }

    /// Set the window size
    ///
    /// Sizes below one pixel are stored but make the next window creation fail.
    pub fn set_window_size(&mut self, size: Size) {
        if !math::is_positive_size(size) {
            log::warn!("Window size {}x{} is not positive", size.x, size.y);
        }
        if let Some(backend) = self.backend.as_mut() {
            log::debug!("Setting window size to {}x{}", size.x, size.y);
            backend.set_size(size);
        }
        self.state.config.width = size.x;
        self.state.config.height = size.y;
    }

    /// Set the window size from width and height
    pub fn set_window_size_wh(&mut self, width: i32, height: i32) {
        self.set_window_size(Size::new(width, height));
    }

    /// Whether the window is shown
    pub fn get_window_visible(&self) -> bool {
        self.state.config.visible
    }

    /// Show or hide the window
    pub fn set_window_visible(&mut self, visible: bool) {
        if let Some(backend) = self.backend.as_mut() {
            log::debug!("Setting window visible: {}", visible);
            backend.set_visible(visible);
        }
        self.state.config.visible = visible;
    }

    /// Whether the window can be resized by dragging its edges
    pub fn get_window_resizable(&self) -> bool {
        self.state.config.resizable
    }

    /// Allow or forbid resizing by dragging the window edges
    pub fn set_window_resizable(&mut self, resizable: bool) {
        if let Some(backend) = self.backend.as_mut() {
            log::debug!("Setting window resizable: {}", resizable);
            backend.set_resizable(resizable);
        }
        self.state.config.resizable = resizable;
    }

    /// Whether the window has a title bar and border
    pub fn get_window_decorated(&self) -> bool {
        self.state.config.decorated
    }

    /// Show or hide the title bar and border
    pub fn set_window_decorated(&mut self, decorated: bool) {
        if let Some(backend) = self.backend.as_mut() {
            log::debug!("Setting window decorated: {}", decorated);
            backend.set_decorated(decorated);
        }
        self.state.config.decorated = decorated;
    }

    /// Input state as of the last dispatched event
    pub fn input(&self) -> &InputState {
        &self.state.input
    }

    /// Whether the cursor is inside the window
    pub fn get_mouse_entered(&self) -> bool {
        self.state.input.mouse_entered()
    }

    /// Last dispatched cursor position
    pub fn get_mouse_position(&self) -> Position {
        self.state.input.mouse_position()
    }

    /// Whether a key or mouse button is held, as of the last dispatched event
    pub fn get_pressed(&self, button: impl Into<Button>) -> bool {
        self.state.input.is_pressed(button)
    }

    /// Either control key is held
    pub fn get_ctrl_pressed(&self) -> bool {
        self.state.input.ctrl_pressed()
    }

    /// Either alt key is held
    pub fn get_alt_pressed(&self) -> bool {
        self.state.input.alt_pressed()
    }

    /// Either shift key is held
    pub fn get_shift_pressed(&self) -> bool {
        self.state.input.shift_pressed()
    }

    /// Either super key is held
    pub fn get_super_pressed(&self) -> bool {
        self.state.input.super_pressed()
    }

    /// Present the back buffer; does nothing without a window
    pub fn swap_buffers(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.swap_buffers();
        }
    }

    /// Address of an OpenGL function, or null without a window
    pub fn get_proc_address(&mut self, name: &str) -> *const c_void {
        self.backend
            .as_mut()
            .map_or(std::ptr::null(), |backend| backend.get_proc_address(name))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

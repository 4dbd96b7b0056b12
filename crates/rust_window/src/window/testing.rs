//! Scripted window backend for tests
//!
//! Each poll delivers the next scripted batch of events; once the script runs
//! out, polls deliver nothing. Every call the session forwards is recorded in
//! a shared [`BackendLog`] that outlives the window.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::c_void;
use std::rc::Rc;

use crate::config::WindowConfig;
use crate::events::{EventQueue, PlatformEvent};
use crate::foundation::math::Size;
use crate::window::backend::{Platform, WindowBackend};
use crate::window::{WindowError, WindowResult};

/// A call forwarded to the scripted window
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BackendCall {
    SetTitle(String),
    SetSize(Size),
    SetVisible(bool),
    SetResizable(bool),
    SetDecorated(bool),
    SwapBuffers,
}

#[derive(Debug, Default)]
pub(crate) struct BackendLog {
    pub created: Vec<WindowConfig>,
    pub destroyed: usize,
    pub polls: usize,
    pub calls: Vec<BackendCall>,
}

impl BackendLog {
    pub fn live_windows(&self) -> usize {
        self.created.len() - self.destroyed
    }
}

pub(crate) struct ScriptedPlatform {
    frames: VecDeque<Vec<PlatformEvent>>,
    failure: Option<String>,
    log: Rc<RefCell<BackendLog>>,
}

impl ScriptedPlatform {
    pub fn new(frames: Vec<Vec<PlatformEvent>>) -> (Self, Rc<RefCell<BackendLog>>) {
        let log = Rc::new(RefCell::new(BackendLog::default()));
        let platform = Self {
            frames: frames.into(),
            failure: None,
            log: Rc::clone(&log),
        };
        (platform, log)
    }

    /// A platform whose window creation always fails with `message`
    pub fn failing(message: &str) -> (Self, Rc<RefCell<BackendLog>>) {
        let (mut platform, log) = Self::new(Vec::new());
        platform.failure = Some(message.to_string());
        (platform, log)
    }
}

impl Platform for ScriptedPlatform {
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>> {
        if let Some(message) = &self.failure {
            return Err(WindowError::CreationFailed(message.clone()));
        }

        self.log.borrow_mut().created.push(config.clone());
        Ok(Box::new(ScriptedWindow {
            frames: std::mem::take(&mut self.frames),
            log: Rc::clone(&self.log),
        }))
    }
}

struct ScriptedWindow {
    frames: VecDeque<Vec<PlatformEvent>>,
    log: Rc<RefCell<BackendLog>>,
}

impl ScriptedWindow {
    fn record(&self, call: BackendCall) {
        self.log.borrow_mut().calls.push(call);
    }
}

impl WindowBackend for ScriptedWindow {
    fn poll_events(&mut self, queue: &mut EventQueue) {
        self.log.borrow_mut().polls += 1;
        if let Some(frame) = self.frames.pop_front() {
            queue.extend(frame);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.record(BackendCall::SetTitle(title.to_string()));
    }

    fn set_size(&mut self, size: Size) {
        self.record(BackendCall::SetSize(size));
    }

    fn set_visible(&mut self, visible: bool) {
        self.record(BackendCall::SetVisible(visible));
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.record(BackendCall::SetResizable(resizable));
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.record(BackendCall::SetDecorated(decorated));
    }

    fn swap_buffers(&mut self) {
        self.record(BackendCall::SwapBuffers);
    }

    fn get_proc_address(&mut self, _name: &str) -> *const c_void {
        std::ptr::null()
    }
}

impl Drop for ScriptedWindow {
    fn drop(&mut self) {
        self.log.borrow_mut().destroyed += 1;
    }
}

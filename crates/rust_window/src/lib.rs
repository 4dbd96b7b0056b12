//! # Rust Window
//!
//! Single-window application lifecycle and input event dispatch on top of GLFW.
//!
//! ## Features
//!
//! - **One Window, One Loop**: `Session::run` owns window creation, the frame loop and teardown
//! - **Typed Events**: every native callback becomes one `PlatformEvent`, dispatched in order
//! - **Polling Queries**: pressed keys, buttons and cursor state as of the last dispatched event
//! - **Override What You Need**: every `Application` hook has a default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_window::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn on_app_start(&mut self, session: &mut Session) {
//!         session.set_window_title("My App Window");
//!         session.set_window_resizable(true);
//!     }
//!
//!     fn on_keyboard_key(&mut self, session: &mut Session, key: KeyboardKey, pressed: bool) {
//!         if key == KeyboardKey::Escape && pressed {
//!             session.force_close();
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::new();
//!     session.run(&mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod input;
pub mod window;

mod application;
mod session;


pub use application::Application;
pub use config::{Config, ConfigError, ContextVersion, WindowConfig};
pub use session::Session;
pub use window::{SessionState, WindowError, WindowResult};

/// Common imports for applications
pub mod prelude {
    pub use crate::{
        Application,
        Session, SessionState,
        WindowConfig, WindowError, WindowResult,
        config::Config,
        events::PlatformEvent,
        foundation::math::{Position, ScrollDelta, Size},
        input::{Button, KeyboardKey, MouseButton},
    };
}

//! Window management subsystem
//!
//! The session talks to the native window through two small traits:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Session (dispatch loop)     │
//! └─────────────┬───────────────────┘
//!               │ create_window
//!      ┌────────▼────────┐
//!      │ Platform        │ ← backend.rs
//!      └────────┬────────┘
//!               │ returns
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← backend.rs, implemented by glfw_backend.rs
//!      └─────────────────┘
//! ```
//!
//! - **`backend`**: the contract every windowing library adapter implements
//! - **`glfw_backend`**: the GLFW adapter with an OpenGL context
//! - **`state`**: the mirrored window configuration, input state and pending queue

pub mod backend;
pub mod glfw_backend;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{Platform, WindowBackend};
pub use glfw_backend::{GlfwPlatform, GlfwWindow};
pub use state::{SessionState, WindowState};

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `run` was called while a session was already active
    #[error("A session is already running")]
    AlreadyRunning,

    /// The windowing library could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window or its context could not be created
    #[error("Window creation failed: {0}")]
    CreationFailed(String),

    /// The configured size cannot be used to create a window
    #[error("Invalid window size {width}x{height}")]
    InvalidSize {
        /// Configured width
        width: i32,
        /// Configured height
        height: i32,
    },
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

//! Sandbox showing the session lifecycle and input queries
//!
//! - Escape closes the window immediately
//! - Ctrl+R toggles whether the window edges can be dragged
//! - Z while F is held toggles window decorations
//! - The title bar close button is ignored
//!
//! Window settings can be replaced with `sandbox.toml` or `sandbox.ron` in the
//! working directory. A file replaces the sandbox's whole window config, so
//! fields it leaves out take the library defaults, not the sandbox ones.

use rust_window::prelude::*;
use rust_window::foundation::{logging, math::size_delta};

const CONFIG_PATHS: [&str; 2] = ["sandbox.toml", "sandbox.ron"];

struct SandboxApp {
    config: WindowConfig,
}

impl SandboxApp {
    fn new(config: Option<WindowConfig>) -> Self {
        Self {
            config: config.unwrap_or_else(sandbox_config),
        }
    }
}

/// Window settings used when no config file is found
fn sandbox_config() -> WindowConfig {
    WindowConfig::default()
        .with_size(512, 512)
        .with_title("My App Window")
        .with_resizable(true)
}

impl Application for SandboxApp {
    // Called before the window is created; setters here decide how it is created
    fn on_app_start(&mut self, session: &mut Session) {
        session.apply_config(&self.config);
    }

    fn on_framebuffer_size(&mut self, session: &mut Session, size: Size) {
        // The size getter still holds the previous size while this hook runs
        let previous = session.get_window_size();
        let change = size_delta(previous, size);
        log::info!(
            "Framebuffer size changed. Previous size: {}x{} new size: {}x{} change: {}x{}",
            previous.x, previous.y, size.x, size.y, change.x, change.y
        );
    }

    fn on_mouse_enter(&mut self, _session: &mut Session, entered: bool) {
        if entered {
            log::info!("Mouse entered");
        } else {
            log::info!("Mouse left");
        }
    }

    fn on_keyboard_key(&mut self, session: &mut Session, key: KeyboardKey, pressed: bool) {
        if !pressed {
            return;
        }

        if key == KeyboardKey::Escape {
            session.force_close();
        } else if key == KeyboardKey::R && session.get_ctrl_pressed() {
            let resizable = !session.get_window_resizable();
            log::info!("Resizable: {}", resizable);
            session.set_window_resizable(resizable);
        } else if key == KeyboardKey::Z && session.get_pressed(KeyboardKey::F) {
            let decorated = !session.get_window_decorated();
            log::info!("Decorated: {}", decorated);
            session.set_window_decorated(decorated);
        }
    }

    // Returning false means the close button does not close the window
    fn on_try_close(&mut self, _session: &mut Session) -> bool {
        log::info!("Close requested; press Escape to quit");
        false
    }

    fn on_app_stop(&mut self, _session: &mut Session) {
        log::info!("Sandbox stopping");
    }
}

fn load_config() -> Option<WindowConfig> {
    let path = CONFIG_PATHS
        .iter()
        .find(|path| std::path::Path::new(path).exists())?;

    match WindowConfig::load_from_file(path) {
        Ok(config) => {
            log::info!("Loaded window config from {}", path);
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", path, e);
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(logging::LevelFilter::Info);

    log::info!("Starting sandbox");

    let mut app = SandboxApp::new(load_config());
    let mut session = Session::new();

    match session.run(&mut app) {
        Ok(()) => {
            log::info!("Sandbox completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Sandbox failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_settings_without_config_file() {
        let mut session = Session::new();
        SandboxApp::new(None).on_app_start(&mut session);

        assert_eq!(session.get_window_size(), Size::new(512, 512));
        assert_eq!(session.get_window_title(), "My App Window");
        assert!(session.get_window_resizable());
    }

    #[test]
    fn test_config_file_replaces_sandbox_settings() {
        let config = WindowConfig::from_toml_str(r#"title = "From file""#).unwrap();
        let mut session = Session::new();
        SandboxApp::new(Some(config.clone())).on_app_start(&mut session);

        assert_eq!(session.config(), &config);
        assert_eq!(session.get_window_size(), WindowConfig::default().size());
        assert!(!session.get_window_resizable());
    }
}

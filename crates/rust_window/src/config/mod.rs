//! Configuration system
//!
//! Window configuration can be built in code or loaded from a TOML or RON file
//! before a session starts.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Size;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            Self::from_toml_str(&contents)
        } else if path.ends_with(".ron") {
            Self::from_ron_str(&contents)
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// OpenGL context version requested at window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
}

impl Default for ContextVersion {
    fn default() -> Self {
        Self { major: 4, minor: 6 }
    }
}

/// Window configuration
///
/// Before a window exists these are the values it will be created with.
/// Once it exists the session keeps them in sync with the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: i32,

    /// Window height
    pub height: i32,

    /// Whether the window is shown
    pub visible: bool,

    /// Whether the user can resize the window by dragging its edges
    pub resizable: bool,

    /// Whether the window has a title bar and border
    pub decorated: bool,

    /// OpenGL context version hint
    pub context_version: ContextVersion,
}

impl WindowConfig {
    /// Window size as a vector
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether the window is resizable
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the OpenGL context version
    pub fn with_context_version(mut self, major: u32, minor: u32) -> Self {
        self.context_version = ContextVersion { major, minor };
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 600,
            height: 400,
            visible: true,
            resizable: false,
            decorated: true,
            context_version: ContextVersion::default(),
        }
    }
}

impl Config for WindowConfig {}

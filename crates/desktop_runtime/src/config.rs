//! Desktop configuration: window definitions and desktop icons.
//!
//! The built-in configuration is `desktop.toml`, validated by the build script and embedded as
//! JSON. [`DesktopConfig::from_toml_str`] accepts the same format for ad-hoc desktops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    model::{DesktopIconDefinition, DesktopState, IconKind, InteractionState, WindowDefinition},
    window_manager::WindowManager,
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));
}

pub use generated::DESKTOP_CONFIG_JSON;

/// Supported `schema_version` value.
pub const DESKTOP_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a desktop configuration is rejected.
pub enum ConfigError {
    #[error("desktop config could not be parsed: {0}")]
    Parse(String),
    #[error("unsupported desktop config schema version {found} (expected {expected})")]
    SchemaVersion { expected: u32, found: u32 },
    #[error("window with empty id")]
    EmptyWindowId,
    #[error("duplicate window id `{0}`")]
    DuplicateWindow(String),
    #[error("duplicate icon id `{0}`")]
    DuplicateIcon(String),
    #[error("icon `{0}` does not match any window")]
    UnknownIconTarget(String),
    #[error("external icon `{0}` has no url")]
    MissingExternalUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub windows: Vec<WindowDefinition>,
    #[serde(default)]
    pub icons: Vec<DesktopIconDefinition>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            schema_version: DESKTOP_CONFIG_SCHEMA_VERSION,
            windows: Vec::new(),
            icons: Vec::new(),
        }
    }
}

impl DesktopConfig {
    /// Loads the configuration embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the embedded payload does not decode or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(DESKTOP_CONFIG_JSON)
            .map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a `desktop.toml` document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or a failed validation rule.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the schema version, id uniqueness and icon targets.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != DESKTOP_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::SchemaVersion {
                expected: DESKTOP_CONFIG_SCHEMA_VERSION,
                found: self.schema_version,
            });
        }

        let mut window_ids = HashSet::new();
        for window in &self.windows {
            if window.id.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyWindowId);
            }
            if !window_ids.insert(window.id.as_str()) {
                return Err(ConfigError::DuplicateWindow(window.id.to_string()));
            }
        }

        let mut icon_ids = HashSet::new();
        for icon in &self.icons {
            if !icon_ids.insert(icon.id.as_str()) {
                return Err(ConfigError::DuplicateIcon(icon.id.clone()));
            }
            match icon.kind {
                IconKind::Window if !window_ids.contains(icon.id.as_str()) => {
                    return Err(ConfigError::UnknownIconTarget(icon.id.clone()));
                }
                IconKind::External if icon.url.as_deref().map_or(true, str::is_empty) => {
                    return Err(ConfigError::MissingExternalUrl(icon.id.clone()));
                }
                IconKind::Window | IconKind::External => {}
            }
        }
        Ok(())
    }

    /// Builds the initial desktop state for this configuration.
    pub fn initial_state(&self) -> (DesktopState, InteractionState) {
        (
            DesktopState::new(
                WindowManager::new(self.windows.iter().cloned()),
                self.icons.clone(),
            ),
            InteractionState::default(),
        )
    }
}

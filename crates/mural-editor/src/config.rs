//! Drafting configuration
//!
//! Construction-time constants for the draw session, plus RON load/save
//! from the OS config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Drafting constants, fixed for the lifetime of an editing session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DraftConfig {
    /// Grid step raw picks snap to, in world units
    pub grid_step: f32,
    /// Angle snap increment in degrees
    pub angle_increment_deg: f32,
    /// Shortest wall that can be drawn
    pub min_length: f32,
    /// Footprint thickness of every wall
    pub wall_thickness: f32,
    /// Extruded height of every wall
    pub wall_height: f32,
    /// Distance under which two endpoints count as a shared joint
    pub endpoint_tolerance: f32,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            grid_step: 0.01,
            angle_increment_deg: 45.0,
            min_length: 0.01,
            wall_thickness: 0.3,
            wall_height: 2.75,
            endpoint_tolerance: 0.001,
        }
    }
}

impl DraftConfig {
    /// Angle snap increment in radians
    pub fn angle_increment(&self) -> f32 {
        self.angle_increment_deg.to_radians()
    }
}

/// Configuration error types
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Error during deserialization
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Handles loading, saving, and accessing the drafting configuration
pub struct ConfigManager {
    config: DraftConfig,
    config_path: PathBuf,
    dirty: bool,
}

impl ConfigManager {
    /// Create a new configuration manager, loading from disk if available
    pub fn new() -> Self {
        let config_path = Self::config_path();
        let config = Self::load_from_path(&config_path).unwrap_or_else(|| {
            tracing::info!("No config file found, using defaults");
            DraftConfig::default()
        });

        Self {
            config,
            config_path,
            dirty: false,
        }
    }

    /// Get the OS-standard configuration directory
    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mural")
    }

    /// Get the configuration file path
    fn config_path() -> PathBuf {
        Self::config_dir().join("config.ron")
    }

    /// Load configuration from a file path
    fn load_from_path(path: &PathBuf) -> Option<DraftConfig> {
        let content = std::fs::read_to_string(path).ok()?;
        match ron::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Get a reference to the current configuration
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration (marks as dirty)
    pub fn config_mut(&mut self) -> &mut DraftConfig {
        self.dirty = true;
        &mut self.config
    }

    /// Check if the configuration has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save the configuration to disk
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(&self.config_path, &content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {:?}", self.config_path);
        self.dirty = false;
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset_to_defaults(&mut self) {
        self.config = DraftConfig::default();
        self.dirty = true;
    }

    /// Get the config file path (for display purposes)
    pub fn config_file_path(&self) -> &PathBuf {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

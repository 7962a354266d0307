//! Configuration for the playback coordinator.
//!
//! Values are loadable from a TOML file or table embedded in the host's
//! engine configuration, with defaults matching the reference integration
//! (8000 instances, 60 fps simulation, 10x render scale).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    File(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Config validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for the effect-playback coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Upper bound on concurrently running effect instances, passed to the
    /// backend manager at construction.
    pub max_instances: u32,

    /// Fixed rate of the backend simulation clock, in frames per second.
    /// The backend's clock model is frame-quantized; see
    /// [`crate::effects::clock::FrameClock`].
    pub simulation_fps: f32,

    /// Scale applied to every spawned instance so effects authored in the
    /// backend's native units are visible at host pixel scale. The vertical
    /// component is negated at spawn time to flip into the host's y-down
    /// convention.
    pub render_scale: f32,

    /// Near plane of the screen-space orthographic projection.
    pub depth_near: f32,

    /// Far plane of the screen-space orthographic projection.
    pub depth_far: f32,

    /// Longest resource name accepted by the loader bridge. Names are
    /// marshalled into a fixed-size buffer during the path-name conversion
    /// the backend requires.
    pub max_resource_name: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_instances: 8000,
            simulation_fps: 60.0,
            render_scale: 10.0,
            depth_near: -128.0,
            depth_far: 128.0,
            max_resource_name: 255,
        }
    }
}

impl CoordinatorConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks invariants the coordinator relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_instances == 0 {
            return Err(ConfigError::Validation(
                "max_instances must be at least 1".to_string(),
            ));
        }
        if !self.simulation_fps.is_finite() || self.simulation_fps <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "simulation_fps must be positive, got {}",
                self.simulation_fps
            )));
        }
        if !self.render_scale.is_finite() || self.render_scale == 0.0 {
            return Err(ConfigError::Validation(
                "render_scale must be non-zero".to_string(),
            ));
        }
        if self.depth_near >= self.depth_far {
            return Err(ConfigError::Validation(format!(
                "depth_near ({}) must be below depth_far ({})",
                self.depth_near, self.depth_far
            )));
        }
        if self.max_resource_name == 0 {
            return Err(ConfigError::Validation(
                "max_resource_name must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CoordinatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_instances, 8000);
        assert_eq!(config.simulation_fps, 60.0);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = CoordinatorConfig::from_toml_str(
            r#"
            max_instances = 1024
            render_scale = 4.0
            "#,
        )
        .unwrap();
        assert_eq!(config.max_instances, 1024);
        assert_eq!(config.render_scale, 4.0);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.simulation_fps, 60.0);
    }

    #[test]
    fn test_rejects_zero_fps() {
        let config = CoordinatorConfig {
            simulation_fps: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_depth_range() {
        let config = CoordinatorConfig {
            depth_near: 10.0,
            depth_far: -10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(
            CoordinatorConfig::from_toml_str("max_instances = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}

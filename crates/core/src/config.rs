use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Color, CrossfadeMode, Easing, Interpolator, InterpolatorError};

const MAX_DURATION_MS: u64 = 600_000;
const MAX_FPS: u32 = 240;

/// A complete cross-fade: what to interpolate and how to play it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub mode: CrossfadeMode,
    pub colors: Vec<Color>,
    pub duration_ms: u64,
    pub easing: Easing,
    pub target_fps: u32,
    /// Number of runs. Each run after the first plays the colors reversed.
    pub cycles: u32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            mode: CrossfadeMode::Hsv,
            colors: vec![Color(0xFF03_A9F4), Color(0xFF00_9688)],
            duration_ms: 1000,
            easing: Easing::Linear,
            target_fps: 60,
            cycles: 1,
        }
    }
}

/// Persisted configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    pub fade: FadeConfig,
    pub created_at: String,
    pub modified_at: String,
}

impl FadeConfig {
    /// Load from a JSON config file, writing the defaults first if the file
    /// doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config_file: ConfigFile =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if config_file.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Config file version {} doesn't match library version {}",
                config_file.version,
                env!("CARGO_PKG_VERSION")
            );
        }

        Ok(config_file.fade)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && parent != Path::new(".") {
                fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
            }
        }

        let now = chrono::Utc::now().to_rfc3339();
        let config_file = ConfigFile {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fade: self.clone(),
            created_at: now.clone(),
            modified_at: now,
        };

        let content = serde_json::to_string_pretty(&config_file)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Check every field, collecting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.colors.len() < 2 {
            errors.push(format!(
                "colors must contain at least 2 entries, got {}",
                self.colors.len()
            ));
        }

        if self.duration_ms == 0 || self.duration_ms > MAX_DURATION_MS {
            errors.push(format!(
                "duration_ms must be between 1 and {}",
                MAX_DURATION_MS
            ));
        }

        if self.target_fps == 0 || self.target_fps > MAX_FPS {
            errors.push(format!("target_fps must be between 1 and {}", MAX_FPS));
        }

        if self.cycles == 0 {
            errors.push("cycles must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(errors))
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn build_interpolator(&self) -> Result<Interpolator, ConfigError> {
        Ok(self.mode.build_sequence(&self.colors)?)
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    ReadError(String),
    WriteError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(Vec<String>),
    Interpolator(InterpolatorError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::WriteError(msg) => write!(f, "Failed to write config file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config file: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "Failed to serialize config: {}", msg),
            ConfigError::ValidationError(errors) => {
                write!(f, "Config validation errors: {}", errors.join(", "))
            }
            ConfigError::Interpolator(err) => write!(f, "Invalid fade: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<InterpolatorError> for ConfigError {
    fn from(err: InterpolatorError) -> Self {
        ConfigError::Interpolator(err)
    }
}

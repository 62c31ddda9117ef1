//! Host settings
//!
//! Loaded from an optional JSON file. Every field has a default, so `{}` is a
//! valid settings file. Court geometry is fixed and not configurable here.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_TICK_RATE;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Frame loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frames per second (0 runs unpaced)
    pub tick_rate: u32,
    /// Serve RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Stop after this many frames
    pub max_ticks: Option<u64>,
    /// Exchange left/right hand labels before they reach the paddles
    pub swap_sides: bool,
    /// JSON-lines observation script; the synthetic sweep is used when absent
    pub script: Option<PathBuf>,
    /// Write every snapshot to this JSON-lines file
    pub record: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
            max_ticks: None,
            swap_sides: false,
            script: None,
            record: None,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate > 1000 {
            return Err(SettingsError::Invalid(format!(
                "tick_rate {} exceeds 1000",
                self.tick_rate
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(SettingsError::Invalid("max_ticks must be positive".into()));
        }
        Ok(())
    }

    /// The configured seed, or one taken from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tick_rate, 60);
    }

    #[test]
    fn test_partial_json_overrides_fields() {
        let settings =
            Settings::from_json(r#"{"seed": 9, "swap_sides": true, "script": "hands.jsonl"}"#)
                .unwrap();
        assert_eq!(settings.seed, Some(9));
        assert!(settings.swap_sides);
        assert_eq!(settings.script, Some(PathBuf::from("hands.jsonl")));
        assert_eq!(settings.tick_rate, 60);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{"tick_rate": 5000}"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"max_ticks": 0}"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{tick_rate: 60"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_explicit_seed_is_used() {
        let settings = Settings {
            seed: Some(77),
            ..Settings::default()
        };
        assert_eq!(settings.resolve_seed(), 77);
    }
}

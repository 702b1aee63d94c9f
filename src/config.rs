//! Runtime configuration.
//!
//! Values come from an optional JSON file; anything missing takes its
//! default. Command-line flags are applied on top by the binary.
//!
//! ```json
//! {
//!   "base_interval_ms": 1500,
//!   "speed_presets": [0.5, 1.0, 2.0],
//!   "default_algorithm": "graph-bfs"
//! }
//! ```

use crate::error::{AlgottyError, Result};
use crate::timeline::{is_valid_speed, BASE_INTERVAL, DEFAULT_SPEED};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Dwell time per step at 1.0x
    pub base_interval_ms: u64,
    /// Speed every sequence starts at
    pub default_speed: f64,
    /// Speeds cycled through by the `+`/`-` keys
    pub speed_presets: Vec<f64>,
    /// UI frame period; also the tick granularity
    pub frame_poll_ms: u64,
    /// Algorithm selected at startup
    pub default_algorithm: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_interval_ms: BASE_INTERVAL.as_millis() as u64,
            default_speed: DEFAULT_SPEED,
            speed_presets: vec![0.25, 0.5, 1.0, 1.5, 2.0],
            frame_poll_ms: 16,
            default_algorithm: "binary-search".to_string(),
        }
    }
}

impl Config {
    /// Read and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&text).map_err(|e| AlgottyError::config(path, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_interval_ms == 0 {
            return Err(AlgottyError::invalid_config("base_interval_ms must be positive"));
        }
        if self.frame_poll_ms == 0 {
            return Err(AlgottyError::invalid_config("frame_poll_ms must be positive"));
        }
        if !is_valid_speed(self.default_speed) {
            return Err(AlgottyError::invalid_config(format!(
                "default_speed must be positive and finite, got {}",
                self.default_speed
            )));
        }
        if self.speed_presets.is_empty() {
            return Err(AlgottyError::invalid_config("speed_presets must not be empty"));
        }
        if let Some(bad) = self.speed_presets.iter().find(|s| !is_valid_speed(**s)) {
            return Err(AlgottyError::invalid_config(format!(
                "speed preset {} must be positive and finite",
                bad
            )));
        }
        Ok(())
    }

    pub fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_poll_ms)
    }

    /// Presets sorted ascending with duplicates removed
    pub fn sorted_presets(&self) -> Vec<f64> {
        let mut presets = self.speed_presets.clone();
        presets.sort_by(f64::total_cmp);
        presets.dedup();
        presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_interval(), Duration::from_millis(2000));
        assert_eq!(config.default_speed, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "base_interval_ms": 500 }"#).unwrap();
        assert_eq!(config.base_interval_ms, 500);
        assert_eq!(config.frame_poll_ms, 16);
        assert_eq!(config.default_algorithm, "binary-search");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = serde_json::from_str(r#"{ "speed": 2 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_failures() {
        let bad = [
            Config { base_interval_ms: 0, ..Config::default() },
            Config { frame_poll_ms: 0, ..Config::default() },
            Config { default_speed: -1.0, ..Config::default() },
            Config { speed_presets: Vec::new(), ..Config::default() },
            Config { speed_presets: vec![1.0, f64::NAN], ..Config::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_sorted_presets() {
        let config = Config {
            speed_presets: vec![2.0, 0.5, 1.0, 0.5],
            ..Config::default()
        };
        assert_eq!(config.sorted_presets(), vec![0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_load_reports_path() {
        let path = std::env::temp_dir().join(format!("algotty-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AlgottyError::Config { .. }));
    }
}

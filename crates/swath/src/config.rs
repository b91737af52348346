use serde::{Deserialize, Serialize};

use crate::lod::LodConfig;
use crate::mode::VisibilityMode;

/// Session-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub lod: LodConfig,
    pub initial_mode: VisibilityMode,
    pub auto_filter_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lod: LodConfig::default(),
            initial_mode: VisibilityMode::Filtered,
            auto_filter_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid { field: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid engine config json: {msg}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let alt = self.lod.lod_threshold_altitude;
        if !alt.is_finite() || alt < 0.0 {
            return Err(ConfigError::Invalid {
                field: "lod.lod_threshold_altitude",
                reason: format!("must be a finite, non-negative altitude (got {alt})"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EngineConfig};
    use crate::mode::VisibilityMode;

    #[test]
    fn empty_object_yields_defaults() {
        let c = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(c, EngineConfig::default());
        assert_eq!(c.initial_mode, VisibilityMode::Filtered);
        assert_eq!(c.lod.max_all_swaths, 200);
        assert_eq!(c.lod.filter_debounce_ms, 150);
        assert!(c.auto_filter_enabled);
    }

    #[test]
    fn partial_overrides() {
        let c = EngineConfig::from_json_str(
            r#"{"initial_mode":"all","lod":{"max_all_swaths":25,"show_cap_warning":false}}"#,
        )
        .unwrap();
        assert_eq!(c.initial_mode, VisibilityMode::All);
        assert_eq!(c.lod.max_all_swaths, 25);
        assert!(!c.lod.show_cap_warning);
        assert_eq!(c.lod.filter_debounce_ms, 150);
    }

    #[test]
    fn rejects_bad_json_and_bad_values() {
        assert!(matches!(
            EngineConfig::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"initial_mode":"sometimes"}"#),
            Err(ConfigError::Parse(_))
        ));
        let err = EngineConfig::from_json_str(r#"{"lod":{"lod_threshold_altitude":-1.0}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "lod.lod_threshold_altitude",
                ..
            }
        ));
    }

    #[test]
    fn round_trips_through_pretty_json() {
        let c = EngineConfig::default();
        let json = c.to_json_pretty().unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), c);
    }
}
